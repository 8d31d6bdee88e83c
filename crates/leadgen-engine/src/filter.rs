use leadgen_types::{LeadCollection, LeadRecord};

/// Keep the leads whose name, title, company or person location contains
/// `query`, ignoring case.
///
/// A blank query returns the collection as is. A non-blank query is used
/// verbatim, surrounding whitespace included.
pub fn filter(collection: &LeadCollection, query: &str) -> LeadCollection {
    if query.trim().is_empty() {
        return collection.clone();
    }

    let needle = query.to_lowercase();
    collection.retain(|lead| matches(lead, &needle))
}

/// `needle` must already be lowercased.
pub fn matches(lead: &LeadRecord, needle: &str) -> bool {
    searchable_fields(lead)
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn searchable_fields(lead: &LeadRecord) -> [&str; 4] {
    [
        lead.person.name.as_str(),
        lead.person.title.as_str(),
        lead.person.company.as_str(),
        lead.person.location_person.as_str(),
    ]
}
