use super::mapper::{parse_leads, parse_scan};
use super::traits::{LeadSource, ScanReport};
use crate::{Error, Result};
use leadgen_types::LeadCollection;
use std::path::{Path, PathBuf};

/// Reads leads from JSON files on disk.
///
/// `fetch_leads` reads `leads_path` and keeps the first `limit` entries.
/// `trigger_scan` reads `scan_path` when set, otherwise re-reads the leads file.
#[derive(Debug, Clone)]
pub struct FileSource {
    leads_path: PathBuf,
    scan_path: Option<PathBuf>,
}

impl FileSource {
    pub fn new(leads_path: impl Into<PathBuf>) -> Self {
        Self {
            leads_path: leads_path.into(),
            scan_path: None,
        }
    }

    pub fn with_scan_path(mut self, scan_path: impl Into<PathBuf>) -> Self {
        self.scan_path = Some(scan_path.into());
        self
    }

    fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|err| {
            Error::DataSource(format!("Failed to read {}: {}", path.display(), err))
        })
    }
}

impl LeadSource for FileSource {
    fn id(&self) -> &'static str {
        "file"
    }

    fn fetch_leads(&self, limit: usize) -> Result<LeadCollection> {
        let body = Self::read(&self.leads_path)?;
        Ok(parse_leads(&body)?.truncated(limit))
    }

    fn trigger_scan(&self) -> Result<ScanReport> {
        match &self.scan_path {
            Some(path) => parse_scan(&Self::read(path)?),
            None => {
                let leads = parse_leads(&Self::read(&self.leads_path)?)?;
                Ok(ScanReport::from_leads(leads))
            }
        }
    }
}
