use crate::Result;
use leadgen_types::LeadCollection;
use std::sync::Arc;

/// Where lead snapshots come from.
///
/// Responsibilities:
/// - Return the most recent leads, at most `limit` of them
/// - Ask the backend for a fresh scan and return the resulting list
///
/// Both calls block. Failures surface as data-source errors and are
/// handled by the board, never by the caller of a derivation.
pub trait LeadSource: Send + Sync {
    /// Short source label used in logs (e.g., "http", "file")
    fn id(&self) -> &'static str;

    /// Fetch the current lead list
    fn fetch_leads(&self, limit: usize) -> Result<LeadCollection>;

    /// Trigger a new scan and return the full resulting list
    fn trigger_scan(&self) -> Result<ScanReport>;
}

impl<S: LeadSource + ?Sized> LeadSource for Arc<S> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn fetch_leads(&self, limit: usize) -> Result<LeadCollection> {
        (**self).fetch_leads(limit)
    }

    fn trigger_scan(&self) -> Result<ScanReport> {
        (**self).trigger_scan()
    }
}

/// Result of a scan request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub message: String,
    pub new_leads: usize,
    pub leads: LeadCollection,
}

impl ScanReport {
    /// Report for sources that can only hand back a plain list.
    pub fn from_leads(leads: LeadCollection) -> Self {
        Self {
            message: "Scan complete".to_string(),
            new_leads: leads.len(),
            leads,
        }
    }
}
