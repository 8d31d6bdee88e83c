use leadgen_types::{LeadCollection, LeadRecord};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a lead table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Score,
    Name,
    Title,
    Company,
    Location,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Score,
        SortKey::Name,
        SortKey::Title,
        SortKey::Company,
        SortKey::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Name => "name",
            SortKey::Title => "title",
            SortKey::Company => "company",
            SortKey::Location => "location",
        }
    }

    /// Compare two leads on this key in ascending order.
    ///
    /// Scores compare numerically. Text fields compare by code point, with no
    /// case or locale folding.
    pub fn compare(&self, a: &LeadRecord, b: &LeadRecord) -> Ordering {
        match self {
            // Collection scores are finite, so partial_cmp only fails on NaN
            SortKey::Score => a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal),
            SortKey::Name => a.person.name.cmp(&b.person.name),
            SortKey::Title => a.person.title.cmp(&b.person.title),
            SortKey::Company => a.person.company.cmp(&b.person.company),
            SortKey::Location => a.person.location_person.cmp(&b.person.location_person),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(SortKey::Score),
            "name" => Ok(SortKey::Name),
            "title" => Ok(SortKey::Title),
            "company" => Ok(SortKey::Company),
            "location" => Ok(SortKey::Location),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction: {}", other)),
        }
    }
}

/// Active ordering of a lead view. Defaults to highest score first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.direction)
    }
}

/// Order `collection` by `key`, returning a new collection.
///
/// The sort is stable in both directions: leads with equal keys keep the order
/// they had in `collection`. Descending order swaps the comparison operands
/// instead of reversing the result, which would reverse ties as well.
pub fn sort(collection: &LeadCollection, key: SortKey, direction: SortDirection) -> LeadCollection {
    match direction {
        SortDirection::Asc => collection.sorted_by(|a, b| key.compare(a, b)),
        SortDirection::Desc => collection.sorted_by(|a, b| key.compare(b, a)),
    }
}
