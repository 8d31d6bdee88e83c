use super::traits::{LeadSource, ScanReport};
use crate::Result;
use leadgen_types::LeadCollection;

/// In-memory source serving a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    leads: LeadCollection,
    scan: Option<LeadCollection>,
}

impl StaticSource {
    pub fn new(leads: LeadCollection) -> Self {
        Self { leads, scan: None }
    }

    /// Serve `scan` from `trigger_scan` instead of the base snapshot.
    pub fn with_scan(mut self, scan: LeadCollection) -> Self {
        self.scan = Some(scan);
        self
    }
}

impl LeadSource for StaticSource {
    fn id(&self) -> &'static str {
        "static"
    }

    fn fetch_leads(&self, limit: usize) -> Result<LeadCollection> {
        Ok(self.leads.truncated(limit))
    }

    fn trigger_scan(&self) -> Result<ScanReport> {
        let leads = self.scan.clone().unwrap_or_else(|| self.leads.clone());
        Ok(ScanReport::from_leads(leads))
    }
}
