use super::{HandlerContext, load_board};
use crate::args::ViewArgs;
use crate::presentation::presenters;
use anyhow::Result;
use leadgen_runtime::{Config, ExportScope, FileSink};
use std::path::PathBuf;

pub fn handle(
    config: &Config,
    view: &ViewArgs,
    scope: ExportScope,
    output_dir: Option<PathBuf>,
    file_name: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(name) = file_name {
        config.export.file_name = name;
    }

    let board = load_board(&config, view)?;
    let sink = FileSink::new(output_dir.unwrap_or_else(|| config.export_directory()));
    let outcome = board.export(scope, &sink)?;

    ctx.render(presenters::present_export(outcome, scope))
}
