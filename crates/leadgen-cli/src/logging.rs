use crate::args::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG`, when set, wins over `--log-level`.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn directive(level: LogLevel) -> String {
    format!(
        "leadgen={level},leadgen_cli={level},leadgen_runtime={level},leadgen_engine={level},warn"
    )
}
