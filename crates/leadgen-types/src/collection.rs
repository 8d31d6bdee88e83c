use crate::{Error, LeadId, LeadRecord, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered, duplicate-free sequence of leads.
///
/// Records are shared between a snapshot and every view derived from it, so
/// filtering and sorting never copy or mutate lead data. The only way to build
/// a collection from raw records is [`LeadCollection::new`], which checks the
/// invariants; [`retain`](Self::retain) and [`sorted_by`](Self::sorted_by)
/// only select or reorder existing records and therefore keep them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadCollection {
    leads: Vec<Arc<LeadRecord>>,
}

impl LeadCollection {
    pub fn new(records: Vec<LeadRecord>) -> Result<Self> {
        let mut seen: HashSet<&LeadId> = HashSet::with_capacity(records.len());
        for record in &records {
            if !record.score.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "lead {} has a non-finite score",
                    record.id
                )));
            }
            if !seen.insert(&record.id) {
                return Err(Error::InvalidInput(format!(
                    "duplicate lead id: {}",
                    record.id
                )));
            }
        }

        Ok(Self {
            leads: records.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LeadRecord> {
        self.leads.get(index).map(record_ref)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &LeadRecord> + DoubleEndedIterator {
        self.leads.iter().map(record_ref)
    }

    pub fn ids(&self) -> Vec<&LeadId> {
        self.iter().map(|lead| &lead.id).collect()
    }

    /// Keep the records matching `keep`, in their current order.
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&LeadRecord) -> bool,
    {
        Self {
            leads: self
                .leads
                .iter()
                .filter(|lead| keep(record_ref(lead)))
                .cloned()
                .collect(),
        }
    }

    /// Stable reorder: records comparing `Equal` keep their current relative order.
    pub fn sorted_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&LeadRecord, &LeadRecord) -> Ordering,
    {
        let mut leads = self.leads.clone();
        leads.sort_by(|a, b| compare(record_ref(a), record_ref(b)));
        Self { leads }
    }

    pub fn truncated(&self, limit: usize) -> Self {
        Self {
            leads: self.leads.iter().take(limit).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LeadCollection {
    type Item = &'a LeadRecord;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<LeadRecord>>,
        fn(&'a Arc<LeadRecord>) -> &'a LeadRecord,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.leads.iter().map(record_ref as fn(&'a Arc<LeadRecord>) -> &'a LeadRecord)
    }
}

fn record_ref(lead: &Arc<LeadRecord>) -> &LeadRecord {
    lead
}

impl TryFrom<Vec<LeadRecord>> for LeadCollection {
    type Error = Error;

    fn try_from(records: Vec<LeadRecord>) -> Result<Self> {
        Self::new(records)
    }
}

impl Serialize for LeadCollection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for LeadCollection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<LeadRecord>::deserialize(deserializer)?;
        LeadCollection::new(records).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompanyMeta, Person, PersonMeta};

    fn lead(id: &str, score: f64) -> LeadRecord {
        LeadRecord {
            id: LeadId::from(id),
            score,
            person: Person {
                name: format!("Person {}", id),
                title: "Toxicologist".to_string(),
                company: "Hepatix Bio".to_string(),
                email: None,
                location_person: "Cambridge, MA".to_string(),
                location_company: "Cambridge, MA".to_string(),
                linkedin_url: None,
                phone: None,
                avatar: None,
            },
            person_meta: PersonMeta::default(),
            company_meta: CompanyMeta::default(),
            rank_reasons: vec![],
        }
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = LeadCollection::new(vec![lead("a", 10.0), lead("a", 20.0)]).unwrap_err();
        assert_eq!(err, Error::InvalidInput("duplicate lead id: a".to_string()));
    }

    #[test]
    fn test_new_rejects_non_finite_scores() {
        assert!(LeadCollection::new(vec![lead("a", f64::NAN)]).is_err());
        assert!(LeadCollection::new(vec![lead("b", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_derived_views_do_not_touch_source() {
        let source =
            LeadCollection::new(vec![lead("a", 10.0), lead("b", 90.0), lead("c", 40.0)]).unwrap();

        let sorted = source.sorted_by(|a, b| b.score.total_cmp(&a.score));
        let kept = source.retain(|l| l.score > 20.0);

        let ids = |c: &LeadCollection| -> Vec<String> {
            c.iter().map(|l| l.id.to_string()).collect()
        };
        assert_eq!(ids(&source), vec!["a", "b", "c"]);
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
        assert_eq!(ids(&kept), vec!["b", "c"]);
        assert_eq!(ids(&source.truncated(2)), vec!["a", "b"]);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"id": "x", "score": 1, "person": {"name": "A", "title": "T", "company": "C",
             "location_person": "L", "location_company": "L"}},
            {"id": "x", "score": 2, "person": {"name": "B", "title": "T", "company": "C",
             "location_person": "L", "location_company": "L"}}
        ]"#;

        let result: std::result::Result<LeadCollection, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
