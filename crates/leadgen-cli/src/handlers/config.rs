use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use leadgen_runtime::Config;
use std::path::Path;

pub fn init(path: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let created = force || !path.exists();
    if created {
        Config::default()
            .save_to(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        tracing::info!(path = %path.display(), "config written");
    }
    ctx.render(presenters::present_config_init(path, created))
}

pub fn show(path: &Path, effective: Config, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_config(path, effective))
}
