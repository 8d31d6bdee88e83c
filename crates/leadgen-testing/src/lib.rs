//! Testing infrastructure for leadgen integration tests.
//!
//! - `TestWorld`: isolated temp directory plus a configured CLI runner
//! - `fixtures`: lead builders and sample data in the server's wire format
//! - `sources`: scripted data sources and sinks for board tests
//! - `assertions`: checks over JSON output and CSV documents

pub mod assertions;
pub mod fixtures;
pub mod sources;
pub mod world;

pub use fixtures::{LeadBuilder, sample_leads};
pub use world::{CliResult, TestWorld};
