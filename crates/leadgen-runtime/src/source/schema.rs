use leadgen_types::{CompanyMeta, LeadId, Person, PersonMeta};
use serde::Deserialize;

/// Lead as served by the lead server.
///
/// The server keeps the identifier on the person; some exports carry it at
/// the top level instead. Either placement is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadWire {
    #[serde(default)]
    pub id: Option<LeadId>,
    pub score: f64,
    pub person: PersonWire,
    #[serde(default)]
    pub person_meta: PersonMeta,
    #[serde(default)]
    pub company_meta: CompanyMeta,
    #[serde(default)]
    pub rank_reasons: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonWire {
    #[serde(default)]
    pub id: Option<LeadId>,
    #[serde(flatten)]
    pub person: Person,
}

/// Body of `POST /scan`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_leads: Option<usize>,
    pub data: Vec<LeadWire>,
}
