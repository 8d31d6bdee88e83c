//! Scripted data sources and sinks for driving a `LeadBoard` in tests.

use leadgen_runtime::{Error, ExportSink, LeadSource, Result, ScanReport};
use leadgen_types::LeadCollection;
use std::path::PathBuf;
use std::sync::Mutex;

/// Fails the first `failures` calls with a 503, then serves `leads`.
pub struct FlakySource {
    leads: LeadCollection,
    failures_left: Mutex<u32>,
    calls: Mutex<u32>,
}

impl FlakySource {
    pub fn new(leads: LeadCollection, failures: u32) -> Self {
        Self {
            leads,
            failures_left: Mutex::new(failures),
            calls: Mutex::new(0),
        }
    }

    /// Total calls seen, successful or not.
    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn next(&self) -> Result<LeadCollection> {
        *self.calls.lock().unwrap_or_else(|e| e.into_inner()) += 1;

        let mut failures_left = self.failures_left.lock().unwrap_or_else(|e| e.into_inner());
        if *failures_left > 0 {
            *failures_left -= 1;
            return Err(Error::HttpStatus {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        Ok(self.leads.clone())
    }
}

impl LeadSource for FlakySource {
    fn id(&self) -> &'static str {
        "flaky"
    }

    fn fetch_leads(&self, limit: usize) -> Result<LeadCollection> {
        Ok(self.next()?.truncated(limit))
    }

    fn trigger_scan(&self) -> Result<ScanReport> {
        Ok(ScanReport::from_leads(self.next()?))
    }
}

/// Always fails with a malformed-data error.
pub struct BrokenSource;

impl LeadSource for BrokenSource {
    fn id(&self) -> &'static str {
        "broken"
    }

    fn fetch_leads(&self, _limit: usize) -> Result<LeadCollection> {
        Err(Error::DataSource("Malformed lead list: expected value at line 1 column 1".to_string()))
    }

    fn trigger_scan(&self) -> Result<ScanReport> {
        Err(Error::DataSource("Malformed scan response".to_string()))
    }
}

/// Keeps delivered documents in memory.
#[derive(Default)]
pub struct RecordingSink {
    deliveries: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(file_name, document)` pairs in delivery order.
    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.deliveries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ExportSink for RecordingSink {
    fn deliver(&self, file_name: &str, document: &str) -> Result<PathBuf> {
        self.deliveries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((file_name.to_string(), document.to_string()));
        Ok(PathBuf::from("memory").join(file_name))
    }
}
