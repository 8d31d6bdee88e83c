// Runtime layer - data sources, the lead board driver, export delivery and configuration
// Engines stay pure; every side effect of the application lives here

pub mod board;
pub mod config;
pub mod error;
pub mod retry;
pub mod sink;
pub mod source;
pub mod view_model;

pub use board::{
    BoardOptions, ExportOutcome, ExportScope, LeadBoard, LoadOutcome, ScanSummary,
};
pub use config::{Config, ExportConfig, RetryConfig, SourceConfig, resolve_config_path};
pub use error::{Error, Result};
pub use retry::RetryPolicy;
pub use sink::{ExportSink, FileSink};
pub use source::{FileSource, HttpSource, LeadSource, ScanReport, StaticSource};
pub use view_model::{Action, LoadKind, Notice, Snapshot, ViewState, reduce, select_sort_key};

/// Build a board from configuration: configured source plus board options.
pub fn open_board(config: &Config) -> Result<LeadBoard> {
    let source = source::from_config(&config.source)?;
    tracing::debug!(source = source.id(), fetch_limit = config.fetch_limit, "opening lead board");
    Ok(LeadBoard::new(source, BoardOptions::from(config)))
}
