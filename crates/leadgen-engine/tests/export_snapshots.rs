use leadgen_engine::{SortSpec, derive_view, serialize};
use leadgen_types::{CompanyMeta, LeadCollection, LeadId, LeadRecord, Person, PersonMeta};

fn leads() -> LeadCollection {
    LeadCollection::new(vec![
        LeadRecord {
            id: LeadId::from("rj"),
            score: 72.0,
            person: Person {
                name: "Ray \"RJ\" Jones".to_string(),
                title: "Principal Investigator".to_string(),
                company: "Global Pharma".to_string(),
                email: None,
                location_person: "London".to_string(),
                location_company: "London, UK".to_string(),
                linkedin_url: Some("https://linkedin.com/in/rj".to_string()),
                phone: None,
                avatar: None,
            },
            person_meta: PersonMeta::default(),
            company_meta: CompanyMeta {
                name: Some("Global Pharma".to_string()),
                funding_stage: Some("IPO".to_string()),
                is_hub: true,
                ..CompanyMeta::default()
            },
            rank_reasons: vec!["Established Funding (+10)".to_string()],
        },
        LeadRecord {
            id: LeadId::from("golden-1"),
            score: 95.0,
            person: Person {
                name: "Dr. Sarah Chen".to_string(),
                title: "Director of Safety Assessment".to_string(),
                company: "Hepatix Bio".to_string(),
                email: Some("s.chen@hepatix.bio".to_string()),
                location_person: "Cambridge, MA".to_string(),
                location_company: "Cambridge, MA".to_string(),
                linkedin_url: None,
                phone: Some("+1-555-0199".to_string()),
                avatar: None,
            },
            person_meta: PersonMeta {
                has_recent_paper: true,
                paper_title: Some("Predictive DILI Models".to_string()),
                years_experience: 15,
            },
            company_meta: CompanyMeta {
                name: Some("Hepatix Bio".to_string()),
                funding_stage: Some("Series B".to_string()),
                uses_tech: true,
                is_hub: true,
                ..CompanyMeta::default()
            },
            rank_reasons: vec![
                "High Value Role (+30)".to_string(),
                "Recent IDILI/3D Paper (+40)".to_string(),
            ],
        },
    ])
    .unwrap()
}

#[test]
fn default_view_export() {
    let view = derive_view(&leads(), "", SortSpec::default());
    let doc = serialize(&view).unwrap().unwrap();

    insta::assert_snapshot!(doc, @r#"
    Rank,Score,Name,Title,Company,Funding,Person Location,Company HQ,Email,LinkedIn
    1,95,Dr. Sarah Chen,Director of Safety Assessment,Hepatix Bio,Series B,"Cambridge, MA","Cambridge, MA",s.chen@hepatix.bio,
    2,72,"Ray ""RJ"" Jones",Principal Investigator,Global Pharma,IPO,London,"London, UK",,https://linkedin.com/in/rj
    "#);
}

#[test]
fn filtered_view_export_renumbers_ranks() {
    let view = derive_view(&leads(), "london", SortSpec::default());
    let doc = serialize(&view).unwrap().unwrap();

    insta::assert_snapshot!(doc, @r#"
    Rank,Score,Name,Title,Company,Funding,Person Location,Company HQ,Email,LinkedIn
    1,72,"Ray ""RJ"" Jones",Principal Investigator,Global Pharma,IPO,London,"London, UK",,https://linkedin.com/in/rj
    "#);
}
