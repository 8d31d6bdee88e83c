use crate::{Error, Result};
use leadgen_types::{LeadCollection, LeadRecord};
use std::io::Write;

/// Default name for the downloadable lead sheet.
pub const EXPORT_FILE_NAME: &str = "qualified_leads.csv";

pub const EXPORT_COLUMNS: [&str; 10] = [
    "Rank",
    "Score",
    "Name",
    "Title",
    "Company",
    "Funding",
    "Person Location",
    "Company HQ",
    "Email",
    "LinkedIn",
];

/// Serialize leads to a CSV document, or `None` when there is nothing to export.
///
/// Rows follow the order of `collection`, so `Rank` reflects the current view
/// rather than the raw score. Fields holding a comma, quote or line break are
/// quoted with embedded quotes doubled. The last row has no trailing newline.
pub fn serialize(collection: &LeadCollection) -> Result<Option<String>> {
    if collection.is_empty() {
        return Ok(None);
    }

    let mut buffer = Vec::new();
    write_csv(collection, &mut buffer)?;
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }

    String::from_utf8(buffer)
        .map(Some)
        .map_err(|err| Error::Encoding(err.to_string()))
}

/// Stream the header and one row per lead into `writer`. Returns the row count.
pub fn write_csv<W: Write>(collection: &LeadCollection, writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(EXPORT_COLUMNS)?;
    for (index, lead) in collection.iter().enumerate() {
        wtr.write_record(export_row(index + 1, lead))?;
    }

    wtr.flush()?;
    Ok(collection.len())
}

pub fn export_row(rank: usize, lead: &LeadRecord) -> [String; 10] {
    [
        rank.to_string(),
        format_score(lead.score),
        lead.person.name.clone(),
        lead.person.title.clone(),
        lead.person.company.clone(),
        lead.funding_stage().unwrap_or("").to_string(),
        lead.person.location_person.clone(),
        lead.person.location_company.clone(),
        lead.person.email.clone().unwrap_or_default(),
        lead.person.linkedin_url.clone().unwrap_or_default(),
    ]
}

/// Shortest round-trip rendering: whole scores print without a fraction.
pub fn format_score(score: f64) -> String {
    score.to_string()
}
