use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::{Context, Result};
use leadgen_runtime::{Config, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(leads_path) = cli.source_file {
        config.use_file_source(leads_path, cli.scan_file);
    } else if let Some(endpoint) = cli.endpoint {
        config.use_endpoint(endpoint);
    }
    tracing::debug!(
        path = %config_path.display(),
        source = ?config.source,
        "configuration resolved"
    );

    match cli.command {
        Commands::List { view, limit, mode } => handlers::list::handle(
            &config,
            &view,
            limit,
            &HandlerContext::new(cli.format, &mode),
        ),

        Commands::Stats => {
            handlers::stats::handle(&config, &HandlerContext::with_default_mode(cli.format))
        }

        Commands::Export {
            view,
            scope,
            output_dir,
            file_name,
        } => handlers::export::handle(
            &config,
            &view,
            scope,
            output_dir,
            file_name,
            &HandlerContext::with_default_mode(cli.format),
        ),

        Commands::Scan { view, mode } => {
            handlers::scan::handle(&config, &view, &HandlerContext::new(cli.format, &mode))
        }

        Commands::Browse => handlers::browse::handle(&config, cli.format),

        Commands::Config { command } => {
            let ctx = HandlerContext::with_default_mode(cli.format);
            match command {
                ConfigCommand::Init { force } => handlers::config::init(&config_path, force, &ctx),
                ConfigCommand::Show => handlers::config::show(&config_path, config, &ctx),
            }
        }
    }
}
