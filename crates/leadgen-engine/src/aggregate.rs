use leadgen_types::LeadCollection;
use serde::Serialize;

/// Dataset-wide KPIs. Always computed over the unfiltered snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeadStats {
    pub total: usize,
    pub high_probability: usize,
    pub average_score: i64,
}

pub fn aggregate(collection: &LeadCollection) -> LeadStats {
    let total = collection.len();
    if total == 0 {
        return LeadStats::default();
    }

    let high_probability = collection
        .iter()
        .filter(|lead| lead.is_high_probability())
        .count();
    let sum: f64 = collection.iter().map(|lead| lead.score).sum();

    LeadStats {
        total,
        high_probability,
        average_score: round_half_up(sum / total as f64),
    }
}

/// Round to the nearest integer, halves going up (57.5 -> 58, -0.5 -> 0).
pub fn round_half_up(value: f64) -> i64 {
    // Adding 0.5 first would carry 0.49999999999999994 up to 1
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadgen_types::{CompanyMeta, LeadId, LeadRecord, Person, PersonMeta};

    fn collection(scores: &[f64]) -> LeadCollection {
        let records = scores
            .iter()
            .enumerate()
            .map(|(i, score)| LeadRecord {
                id: LeadId::from(i as i64),
                score: *score,
                person: Person {
                    name: format!("Lead {}", i),
                    title: "Scientist".to_string(),
                    company: "Acme".to_string(),
                    email: None,
                    location_person: "Remote".to_string(),
                    location_company: "Remote".to_string(),
                    linkedin_url: None,
                    phone: None,
                    avatar: None,
                },
                person_meta: PersonMeta::default(),
                company_meta: CompanyMeta::default(),
                rank_reasons: vec![],
            })
            .collect();
        LeadCollection::new(records).unwrap()
    }

    #[test]
    fn test_aggregate_mixed_scores() {
        let stats = aggregate(&collection(&[80.0, 50.0, 90.0, 10.0]));
        assert_eq!(
            stats,
            LeadStats {
                total: 4,
                high_probability: 2,
                average_score: 58,
            }
        );
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate(&LeadCollection::empty()), LeadStats::default());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let stats = aggregate(&collection(&[79.99, 80.0, 100.0]));
        assert_eq!(stats.high_probability, 2);
    }

    #[test]
    fn test_halfway_rounds_up() {
        assert_eq!(round_half_up(57.5), 58);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(57.49), 57);
        assert_eq!(aggregate(&collection(&[1.0, 2.0])).average_score, 2);
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(57.49999999999999), 57);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.6), -1);
    }
}
