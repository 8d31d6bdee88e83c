use clap::{Args, Parser, Subcommand, ValueEnum};
use leadgen_engine::{SortDirection, SortKey, SortSpec};
use leadgen_runtime::ExportScope;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leadgen")]
#[command(about = "Search, sort, summarize and export scored outreach leads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $LEADGEN_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Read leads from a local JSON file instead of the configured source
    #[arg(long, global = true, conflicts_with = "endpoint")]
    pub source_file: Option<PathBuf>,

    /// Scan response file used with --source-file
    #[arg(long, global = true, requires = "source_file")]
    pub scan_file: Option<PathBuf>,

    /// Lead server base URL, overriding the configured source
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch leads and print the filtered, sorted table
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        mode: ViewModeArgs,
    },

    /// Print dataset-wide KPIs (total, high probability, average score)
    Stats,

    /// Write the lead table to a CSV file
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Rows to export: the filtered view or the whole snapshot
        #[arg(long, default_value = "visible")]
        scope: ExportScope,

        /// Directory to write into (defaults to the configured export directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// File name (defaults to the configured export file name)
        #[arg(long)]
        file_name: Option<String>,
    },

    /// Ask the source for a fresh scan and print the resulting table
    Scan {
        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        mode: ViewModeArgs,
    },

    /// Interactive session: search, sort, refresh, scan and export from a prompt
    Browse,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

/// Search and ordering shared by table-producing commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Case-insensitive search over name, title, company and location
    #[arg(long, short)]
    pub query: Option<String>,

    /// Column to sort by: score, name, title, company, location
    #[arg(long, short)]
    pub sort: Option<SortKey>,

    /// Sort direction: asc or desc
    #[arg(long, short)]
    pub direction: Option<SortDirection>,
}

impl ViewArgs {
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// A bare `--sort` starts descending, like choosing a new column.
    pub fn sort_spec(&self) -> SortSpec {
        let key = self.sort.unwrap_or_default();
        let direction = self.direction.unwrap_or_default();
        SortSpec::new(key, direction)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, help = "Minimal output (IDs only, for scripting)", group = "view_mode")]
    pub quiet: bool,

    #[arg(
        long,
        help = "Verbose output (reasons, paper, contact details)",
        group = "view_mode"
    )]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
