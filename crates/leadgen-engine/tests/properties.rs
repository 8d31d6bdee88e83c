//! Derivation properties over a realistic lead snapshot.

use leadgen_engine::{
    SortDirection, SortKey, SortSpec, aggregate, derive_view, filter, serialize, sort,
};
use leadgen_types::{CompanyMeta, LeadCollection, LeadId, LeadRecord, Person, PersonMeta};

struct Row {
    id: &'static str,
    score: f64,
    name: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
}

fn record(row: &Row) -> LeadRecord {
    LeadRecord {
        id: LeadId::from(row.id),
        score: row.score,
        person: Person {
            name: row.name.to_string(),
            title: row.title.to_string(),
            company: row.company.to_string(),
            email: Some(format!("{}@leads.test", row.id)),
            location_person: row.location.to_string(),
            location_company: "Boston, MA".to_string(),
            linkedin_url: Some(format!("https://linkedin.com/in/{}", row.id)),
            phone: None,
            avatar: None,
        },
        person_meta: PersonMeta::default(),
        company_meta: CompanyMeta::default(),
        rank_reasons: vec!["High Value Role (+30)".to_string(), "In Biotech Hub (+10)".to_string()],
    }
}

fn snapshot() -> LeadCollection {
    let rows = [
        Row {
            id: "p1",
            score: 10.0,
            name: "Nia Patel",
            title: "Junior Researcher",
            company: "SmallStart",
            location: "Remote",
        },
        Row {
            id: "p2",
            score: 90.0,
            name: "Sarah Chen",
            title: "Director of Safety Assessment",
            company: "Hepatix Bio",
            location: "Cambridge, MA",
        },
        Row {
            id: "p3",
            score: 90.0,
            name: "Omar Haddad",
            title: "VP Safety Assessment",
            company: "LiverChip Inc",
            location: "Boston, MA",
        },
        Row {
            id: "p4",
            score: 40.0,
            name: "Greta Lind",
            title: "Toxicologist",
            company: "SafeMeds",
            location: "Basel",
        },
        Row {
            id: "p5",
            score: 65.0,
            name: "Ken Ito",
            title: "Head of Discovery",
            company: "Moderna",
            location: "Cambridge, MA",
        },
    ];
    LeadCollection::new(rows.iter().map(record).collect()).unwrap()
}

fn scores(collection: &LeadCollection) -> Vec<f64> {
    collection.iter().map(|l| l.score).collect()
}

fn ids(collection: &LeadCollection) -> Vec<&str> {
    collection.iter().map(|l| l.id.as_str()).collect()
}

#[test]
fn filter_identity_for_empty_query() {
    let leads = snapshot();
    assert_eq!(ids(&filter(&leads, "")), ids(&leads));
}

#[test]
fn filter_is_sound_and_complete() {
    let leads = snapshot();
    for query in ["cambridge", "SAFE", "ma", "x", "Head", "zzz"] {
        let kept = filter(&leads, query);
        let needle = query.to_lowercase();
        for lead in &leads {
            let hit = [
                &lead.person.name,
                &lead.person.title,
                &lead.person.company,
                &lead.person.location_person,
            ]
            .iter()
            .any(|f| f.to_lowercase().contains(&needle));
            assert_eq!(
                kept.ids().contains(&&lead.id),
                hit,
                "query {:?} lead {}",
                query,
                lead.id
            );
        }
    }
}

#[test]
fn sort_totality_on_reference_scores() {
    let rows = [
        Row {
            id: "a",
            score: 10.0,
            name: "A",
            title: "T",
            company: "C",
            location: "L",
        },
        Row {
            id: "b",
            score: 90.0,
            name: "B",
            title: "T",
            company: "C",
            location: "L",
        },
        Row {
            id: "c",
            score: 90.0,
            name: "C",
            title: "T",
            company: "C",
            location: "L",
        },
        Row {
            id: "d",
            score: 40.0,
            name: "D",
            title: "T",
            company: "C",
            location: "L",
        },
    ];
    let leads = LeadCollection::new(rows.iter().map(record).collect()).unwrap();

    let desc = sort(&leads, SortKey::Score, SortDirection::Desc);
    assert_eq!(scores(&desc), vec![90.0, 90.0, 40.0, 10.0]);
    assert_eq!(ids(&desc)[..2], ["b", "c"]);

    let asc = sort(&leads, SortKey::Score, SortDirection::Asc);
    assert_eq!(scores(&asc), vec![10.0, 40.0, 90.0, 90.0]);
    assert_eq!(ids(&asc)[2..], ["b", "c"]);
}

#[test]
fn sort_is_stable_for_every_key_and_direction() {
    let leads = snapshot();
    for key in SortKey::ALL {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort(&leads, key, direction);
            let position = |id: &LeadId| leads.iter().position(|l| &l.id == id).unwrap();
            for pair in sorted.iter().collect::<Vec<_>>().windows(2) {
                if key.compare(pair[0], pair[1]).is_eq() {
                    assert!(
                        position(&pair[0].id) < position(&pair[1].id),
                        "{} {} broke tie order",
                        key,
                        direction
                    );
                }
            }
        }
    }
}

#[test]
fn combined_filter_and_sort() {
    let leads = snapshot();
    let view = derive_view(&leads, "cambridge", SortSpec::default());
    assert_eq!(ids(&view), vec!["p2", "p5"]);

    let view = derive_view(&leads, "safety", SortSpec::new(SortKey::Name, SortDirection::Asc));
    assert_eq!(ids(&view), vec!["p3", "p2"]);
}

#[test]
fn aggregates_ignore_the_current_view() {
    let leads = snapshot();
    let before = aggregate(&leads);
    let _view = derive_view(&leads, "basel", SortSpec::default());
    assert_eq!(aggregate(&leads), before);
    assert_eq!(before.total, 5);
    assert_eq!(before.high_probability, 2);
    // (10 + 90 + 90 + 40 + 65) / 5 = 59
    assert_eq!(before.average_score, 59);
}

#[test]
fn export_shape_follows_view() {
    let leads = snapshot();
    let view = derive_view(&leads, "", SortSpec::default());
    let doc = serialize(&view).unwrap().expect("non-empty export");

    let lines: Vec<&str> = doc.lines().collect();
    assert_eq!(lines.len(), view.len() + 1);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(doc.as_bytes());
    let ranks: Vec<String> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            assert_eq!(r.len(), 10);
            r[0].to_string()
        })
        .collect();
    assert_eq!(ranks, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn export_of_empty_view_is_a_no_op() {
    let leads = snapshot();
    let view = derive_view(&leads, "nobody matches this", SortSpec::default());
    assert!(view.is_empty());
    assert_eq!(serialize(&view).unwrap(), None);
}
