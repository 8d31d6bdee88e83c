pub mod file;
pub mod http;
pub mod mapper;
pub mod memory;
pub mod schema;
pub mod traits;

pub use file::FileSource;
pub use http::HttpSource;
pub use mapper::{parse_leads, parse_scan};
pub use memory::StaticSource;
pub use traits::{LeadSource, ScanReport};

use crate::Result;
use crate::config::{SourceConfig, expand_tilde};
use std::time::Duration;

/// Build the configured data source.
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn LeadSource>> {
    match config {
        SourceConfig::Http {
            base_url,
            timeout_secs,
        } => Ok(Box::new(HttpSource::new(
            base_url.clone(),
            Duration::from_secs(*timeout_secs),
        )?)),
        SourceConfig::File {
            leads_path,
            scan_path,
        } => {
            let mut source = FileSource::new(expand_tilde(&leads_path.to_string_lossy()));
            if let Some(scan_path) = scan_path {
                source = source.with_scan_path(expand_tilde(&scan_path.to_string_lossy()));
            }
            Ok(Box::new(source))
        }
    }
}
