//! # Presentation Layer
//!
//! Same unidirectional flow for every command:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ]
//!                                                        ==(JSON)==> serde_json --> stdout
//!                                                        ==(Text)==> [ View ] --> stdout
//! ```
//!
//! - `view_models/`: raw data, `Serialize`, no formatting. JSON output is the full view model.
//! - `presenters/`: domain state to view models; badges and tips are decided here.
//! - `views/`: `fmt::Display` layouts; colours and truncation via `formatters`.
//! - `renderers/`: picks JSON or text.
//!
//! `ViewMode` controls text density only. JSON ignores it.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, OutputFormat, ViewMode};
