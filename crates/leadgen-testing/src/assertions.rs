//! Assertions over `--format json` output and exported CSV documents.

use anyhow::{Context, Result};
use serde_json::Value;

fn leads(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["leads"]
        .as_array()
        .context("Expected 'content.leads' array in JSON")
}

/// Assert the table holds exactly `expected` rows.
pub fn assert_lead_count(json: &Value, expected: usize) -> Result<()> {
    let rows = leads(json)?;
    if rows.len() != expected {
        anyhow::bail!("Expected {} leads, got {}", expected, rows.len());
    }
    Ok(())
}

/// Assert rows appear with exactly these ids, in order, ranked 1..=n.
pub fn assert_lead_order(json: &Value, expected_ids: &[&str]) -> Result<()> {
    let rows = leads(json)?;
    let ids: Vec<&str> = rows.iter().filter_map(|r| r["id"].as_str()).collect();
    if ids != expected_ids {
        anyhow::bail!("Expected lead order {:?}, got {:?}", expected_ids, ids);
    }

    for (index, row) in rows.iter().enumerate() {
        let rank = row["rank"].as_u64().context("Row missing rank")?;
        if rank != index as u64 + 1 {
            anyhow::bail!("Row {} has rank {}", index, rank);
        }
    }
    Ok(())
}

/// Assert the stats block (`content` of `leadgen stats --format json`).
pub fn assert_stats(
    json: &Value,
    total: u64,
    high_probability: u64,
    average_score: i64,
) -> Result<()> {
    let content = &json["content"];
    let actual = (
        content["total"].as_u64().context("Missing total")?,
        content["high_probability"]
            .as_u64()
            .context("Missing high_probability")?,
        content["average_score"]
            .as_i64()
            .context("Missing average_score")?,
    );
    if actual != (total, high_probability, average_score) {
        anyhow::bail!(
            "Expected stats ({}, {}, {}), got {:?}",
            total,
            high_probability,
            average_score,
            actual
        );
    }
    Ok(())
}

/// Assert an exported document has a header plus `rows` lines and no trailing newline.
pub fn assert_csv_shape(document: &str, rows: usize) -> Result<()> {
    if document.ends_with('\n') {
        anyhow::bail!("CSV document ends with a newline");
    }
    let header = document.lines().next().context("CSV document is empty")?;
    if !header.starts_with("Rank,Score,Name,Title,Company,Funding,") {
        anyhow::bail!("Unexpected CSV header: {}", header);
    }

    let records = document.lines().filter(|l| !l.is_empty()).count();
    if records != rows + 1 {
        anyhow::bail!("Expected {} data rows, got {}", rows, records - 1);
    }
    Ok(())
}
