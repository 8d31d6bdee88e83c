use crate::{Error, Result};
use leadgen_engine::EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Address of the lead server when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Number of most recent leads requested on refresh.
pub const DEFAULT_FETCH_LIMIT: usize = 50;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LEADGEN_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (e.g. ~/.config/leadgen/config.toml)
/// 4. ~/.leadgen/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LEADGEN_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("leadgen").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".leadgen").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    File {
        leads_path: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scan_path: Option<PathBuf>,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Http {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
    /// Where exports land; the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_export_file_name(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_limit: DEFAULT_FETCH_LIMIT,
            source: SourceConfig::default(),
            export: ExportConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Replace the configured source with a local JSON file.
    pub fn use_file_source(&mut self, leads_path: PathBuf, scan_path: Option<PathBuf>) {
        self.source = SourceConfig::File {
            leads_path,
            scan_path,
        };
    }

    /// Replace the configured source with an HTTP endpoint, keeping any configured timeout.
    pub fn use_endpoint(&mut self, base_url: String) {
        let timeout_secs = match &self.source {
            SourceConfig::Http { timeout_secs, .. } => *timeout_secs,
            SourceConfig::File { .. } => default_timeout_secs(),
        };
        self.source = SourceConfig::Http {
            base_url,
            timeout_secs,
        };
    }

    pub fn export_directory(&self) -> PathBuf {
        match &self.export.directory {
            Some(dir) => expand_tilde(&dir.to_string_lossy()),
            None => PathBuf::from("."),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

fn default_fetch_limit() -> usize {
    DEFAULT_FETCH_LIMIT
}

fn default_max_attempts() -> u32 {
    1
}

fn default_backoff_ms() -> u64 {
    250
}
