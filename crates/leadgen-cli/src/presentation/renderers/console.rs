use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::color_enabled;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusLevel, ViewMode,
};

/// Prints command results to stdout, as pretty JSON or as laid-out text.
pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let color = color_enabled();

        // Minimal output is for pipes: content only
        if self.mode != ViewMode::Minimal
            && let Some(badge) = &result.badge
        {
            if color {
                let label = match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Info => badge.label.bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                };
                println!("{} {}", badge.marker(), label);
            } else {
                println!("{} {}", badge.marker(), badge.label);
            }
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if self.mode != ViewMode::Minimal && !result.suggestions.is_empty() {
            println!();
            println!("Tips:");
            for tip in &result.suggestions {
                match &tip.command {
                    Some(cmd) if color => println!("  - {}: {}", tip.description, cmd.cyan()),
                    Some(cmd) => println!("  - {}: {}", tip.description, cmd),
                    None => println!("  - {}", tip.description),
                }
            }
        }

        Ok(())
    }
}
