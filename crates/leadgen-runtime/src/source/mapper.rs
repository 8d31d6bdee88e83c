use super::schema::{LeadWire, ScanEnvelope};
use super::traits::ScanReport;
use crate::{Error, Result};
use leadgen_types::{LeadCollection, LeadRecord};
use serde_json::Value;

/// Parse a JSON array of leads into a validated collection.
pub fn parse_leads(body: &str) -> Result<LeadCollection> {
    let wire: Vec<LeadWire> = serde_json::from_str(body)
        .map_err(|err| Error::DataSource(format!("Malformed lead list: {}", err)))?;
    to_collection(wire)
}

/// Parse a scan response: either the `{message, new_leads, data}` envelope
/// or a bare lead array.
pub fn parse_scan(body: &str) -> Result<ScanReport> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| Error::DataSource(format!("Malformed scan response: {}", err)))?;

    match value {
        Value::Array(_) => {
            let wire: Vec<LeadWire> = serde_json::from_value(value)
                .map_err(|err| Error::DataSource(format!("Malformed lead list: {}", err)))?;
            Ok(ScanReport::from_leads(to_collection(wire)?))
        }
        Value::Object(_) => {
            let envelope: ScanEnvelope = serde_json::from_value(value)
                .map_err(|err| Error::DataSource(format!("Malformed scan response: {}", err)))?;
            let leads = to_collection(envelope.data)?;
            let mut report = ScanReport::from_leads(leads);
            if let Some(message) = envelope.message {
                report.message = message;
            }
            if let Some(new_leads) = envelope.new_leads {
                report.new_leads = new_leads;
            }
            Ok(report)
        }
        other => Err(Error::DataSource(format!(
            "Malformed scan response: expected an object or array, got {}",
            json_kind(&other)
        ))),
    }
}

pub fn to_collection(wire: Vec<LeadWire>) -> Result<LeadCollection> {
    let records = wire
        .into_iter()
        .enumerate()
        .map(|(index, lead)| to_record(index, lead))
        .collect::<Result<Vec<_>>>()?;

    LeadCollection::new(records).map_err(|err| Error::DataSource(err.to_string()))
}

fn to_record(index: usize, wire: LeadWire) -> Result<LeadRecord> {
    let id = wire
        .id
        .or(wire.person.id)
        .ok_or_else(|| Error::DataSource(format!("Lead at index {} has no id", index)))?;

    Ok(LeadRecord {
        id,
        score: wire.score,
        person: wire.person.person,
        person_meta: wire.person_meta,
        company_meta: wire.company_meta,
        rank_reasons: wire.rank_reasons,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
