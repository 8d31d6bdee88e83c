use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Score at or above which a lead counts as high probability.
pub const HIGH_PROBABILITY_THRESHOLD: f64 = 80.0;

/// Score at or above which a lead counts as a medium tier lead.
pub const MEDIUM_PROBABILITY_THRESHOLD: f64 = 50.0;

/// Funding stages shown as high-growth targets.
pub const GROWTH_FUNDING_STAGES: [&str; 2] = ["Series A", "Series B"];

/// Stable lead identifier.
///
/// Data sources may send either a string or an integer; both are held as text
/// so ids compare the same way regardless of origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeadId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LeadId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for LeadId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for LeadId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => LeadId(s),
            RawId::Signed(n) => LeadId(n.to_string()),
            RawId::Unsigned(n) => LeadId(n.to_string()),
        })
    }
}

/// Contact details for the person behind a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub location_person: String,
    pub location_company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Signals about the person (scientific intent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonMeta {
    #[serde(default)]
    pub has_recent_paper: bool,
    /// Only meaningful when `has_recent_paper` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_title: Option<String>,
    #[serde(default)]
    pub years_experience: u32,
}

impl PersonMeta {
    /// Paper title, if the person has a recent paper at all.
    pub fn recent_paper(&self) -> Option<&str> {
        if self.has_recent_paper {
            self.paper_title.as_deref()
        } else {
            None
        }
    }
}

/// Signals about the person's company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_stage: Option<String>,
    #[serde(default)]
    pub uses_tech: bool,
    #[serde(default)]
    pub open_to_nams: bool,
    #[serde(default)]
    pub is_hub: bool,
}

/// Display tier derived from a lead's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_PROBABILITY_THRESHOLD {
            ScoreTier::High
        } else if score >= MEDIUM_PROBABILITY_THRESHOLD {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

/// One scored outreach candidate, immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub score: f64,
    pub person: Person,
    #[serde(default)]
    pub person_meta: PersonMeta,
    #[serde(default)]
    pub company_meta: CompanyMeta,
    /// Most significant reason first
    #[serde(default)]
    pub rank_reasons: Vec<String>,
}

impl LeadRecord {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }

    pub fn is_high_probability(&self) -> bool {
        self.score >= HIGH_PROBABILITY_THRESHOLD
    }

    pub fn funding_stage(&self) -> Option<&str> {
        self.company_meta.funding_stage.as_deref()
    }

    pub fn is_growth_stage(&self) -> bool {
        self.funding_stage()
            .is_some_and(|stage| GROWTH_FUNDING_STAGES.contains(&stage))
    }

    /// True when the person works away from company HQ.
    pub fn hq_differs(&self) -> bool {
        self.person.location_person != self.person.location_company
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_id_accepts_string_and_integer() {
        let text: LeadId = serde_json::from_str("\"golden-1\"").unwrap();
        let number: LeadId = serde_json::from_str("42").unwrap();

        assert_eq!(text.as_str(), "golden-1");
        assert_eq!(number, LeadId::from(42));
        assert_eq!(serde_json::to_string(&number).unwrap(), "\"42\"");
    }

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(50.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(49.0), ScoreTier::Low);
    }

    #[test]
    fn test_recent_paper_requires_flag() {
        let meta = PersonMeta {
            has_recent_paper: false,
            paper_title: Some("Stale".to_string()),
            years_experience: 3,
        };
        assert_eq!(meta.recent_paper(), None);

        let meta = PersonMeta {
            has_recent_paper: true,
            ..meta
        };
        assert_eq!(meta.recent_paper(), Some("Stale"));
    }

    #[test]
    fn test_partial_metadata_uses_defaults() {
        let json = r#"{
            "id": 7,
            "score": 65,
            "person": {
                "name": "Ada",
                "title": "Toxicologist",
                "company": "NanoCure",
                "location_person": "Austin, TX",
                "location_company": "Austin, TX"
            }
        }"#;

        let lead: LeadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(lead.id.as_str(), "7");
        assert_eq!(lead.score, 65.0);
        assert!(lead.rank_reasons.is_empty());
        assert!(!lead.person_meta.has_recent_paper);
        assert_eq!(lead.funding_stage(), None);
        assert!(!lead.is_growth_stage());
        assert!(!lead.hq_differs());
    }
}
