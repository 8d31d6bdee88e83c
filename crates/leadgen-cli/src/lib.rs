mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, ViewArgs, ViewModeArgs};
pub use commands::run;
