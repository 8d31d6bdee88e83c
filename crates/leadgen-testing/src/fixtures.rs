//! Lead fixtures.
//!
//! `sample_leads` mirrors what the lead server hands out: one golden lead,
//! a spread of tiers, mixed funding stages and locations.

use anyhow::{Context, Result};
use leadgen_types::{CompanyMeta, LeadId, LeadRecord, Person, PersonMeta};
use serde_json::Value;

/// Fluent builder for a single lead.
pub struct LeadBuilder {
    record: LeadRecord,
}

impl LeadBuilder {
    pub fn new(id: &str, score: f64) -> Self {
        Self {
            record: LeadRecord {
                id: LeadId::from(id),
                score,
                person: Person {
                    name: format!("Lead {}", id),
                    title: "Scientist".to_string(),
                    company: "Acme Bio".to_string(),
                    email: None,
                    location_person: "Boston, MA".to_string(),
                    location_company: "Boston, MA".to_string(),
                    linkedin_url: None,
                    phone: None,
                    avatar: None,
                },
                person_meta: PersonMeta::default(),
                company_meta: CompanyMeta::default(),
                rank_reasons: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.person.name = name.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.person.title = title.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.record.person.company = company.to_string();
        self.record.company_meta.name = Some(company.to_string());
        self
    }

    /// Person location and company HQ.
    pub fn located(mut self, person: &str, company: &str) -> Self {
        self.record.person.location_person = person.to_string();
        self.record.person.location_company = company.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.record.person.email = Some(email.to_string());
        self
    }

    pub fn linkedin(mut self, url: &str) -> Self {
        self.record.person.linkedin_url = Some(url.to_string());
        self
    }

    pub fn funding(mut self, stage: &str) -> Self {
        self.record.company_meta.funding_stage = Some(stage.to_string());
        self
    }

    pub fn paper(mut self, title: &str) -> Self {
        self.record.person_meta.has_recent_paper = true;
        self.record.person_meta.paper_title = Some(title.to_string());
        self
    }

    pub fn reasons(mut self, reasons: &[&str]) -> Self {
        self.record.rank_reasons = reasons.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn build(self) -> LeadRecord {
        self.record
    }
}

/// Five leads, scores 95/82/64/45/15 (two high probability, average 60).
pub fn sample_leads() -> Vec<LeadRecord> {
    vec![
        LeadBuilder::new("golden-1", 95.0)
            .name("Dr. Sarah Chen")
            .title("Director of Safety Assessment")
            .company("Hepatix Bio")
            .located("Cambridge, MA", "Cambridge, MA")
            .email("s.chen@hepatix.bio")
            .linkedin("https://linkedin.com/in/sarahchen-tox")
            .funding("Series B")
            .paper("Predictive DILI Models in 3D Liver Spheroids")
            .reasons(&[
                "High Value Role (+30)",
                "Recent IDILI/3D Paper (+40)",
                "High Growth Funding (+20)",
                "In Biotech Hub (+10)",
            ])
            .build(),
        LeadBuilder::new("p-2", 82.0)
            .name("Omar Haddad")
            .title("VP Preclinical Safety")
            .company("LiverChip Inc")
            .located("Remote", "Boston, MA")
            .email("omar@liverchip.io")
            .funding("Series A")
            .reasons(&["High Value Role (+30)", "High Growth Funding (+20)"])
            .build(),
        LeadBuilder::new("p-3", 64.0)
            .name("Greta Lind")
            .title("Head of Toxicology")
            .company("Global Pharma")
            .located("Basel", "Basel, Switzerland")
            .funding("IPO")
            .reasons(&["High Value Role (+30)", "Established Funding (+10)"])
            .build(),
        LeadBuilder::new("p-4", 45.0)
            .name("Ken Ito")
            .title("Toxicologist, \"in vitro\" methods")
            .company("NanoCure")
            .located("San Diego, CA", "San Diego, CA")
            .funding("Seed")
            .build(),
        LeadBuilder::new("p-5", 15.0)
            .name("Nia Patel")
            .title("Junior Researcher")
            .company("SmallStart")
            .located("Austin, TX", "Austin, TX")
            .build(),
    ]
}

/// Lead list in the server's wire format (`id` nested under `person`).
pub fn leads_json(leads: &[LeadRecord]) -> Result<String> {
    let values = leads.iter().map(to_wire).collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string_pretty(&values)?)
}

/// Scan envelope: `{message, new_leads, data}`.
pub fn scan_json(message: &str, leads: &[LeadRecord]) -> Result<String> {
    let data = leads.iter().map(to_wire).collect::<Result<Vec<_>>>()?;
    let envelope = serde_json::json!({
        "message": message,
        "new_leads": data.len(),
        "data": data,
    });
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn to_wire(lead: &LeadRecord) -> Result<Value> {
    let mut value = serde_json::to_value(lead)?;
    let object = value.as_object_mut().context("lead did not serialize to an object")?;
    let id = object.remove("id").context("lead has no id")?;
    object
        .get_mut("person")
        .and_then(Value::as_object_mut)
        .context("lead has no person")?
        .insert("id".to_string(), id);
    Ok(value)
}
