//! TestWorld pattern for declarative CLI test setup.
//!
//! Each world owns a temp directory holding the config file, lead files and
//! export output, so tests never touch the user's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use leadgen_types::LeadRecord;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{leads_json, scan_json};

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use leadgen_testing::{TestWorld, sample_leads};
///
/// let world = TestWorld::new().with_leads(&sample_leads());
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    config_path: PathBuf,
    leads_path: Option<PathBuf>,
    scan_path: Option<PathBuf>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();

        Self {
            cwd: base_path.clone(),
            config_path: base_path.join("config").join("config.toml"),
            temp_dir,
            leads_path: None,
            scan_path: None,
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the current working directory (exports land here by default).
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Config file passed via `--config` (absent until something writes it).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `leads` as `leads.json` and serve them via `--source-file`.
    pub fn with_leads(mut self, leads: &[LeadRecord]) -> Self {
        let path = self.temp_dir.path().join("leads.json");
        let body = leads_json(leads).expect("Failed to serialize leads");
        std::fs::write(&path, body).expect("Failed to write leads file");
        self.leads_path = Some(path);
        self
    }

    /// Write a raw body as `leads.json`, for malformed-data cases.
    pub fn with_leads_body(mut self, body: &str) -> Self {
        let path = self.temp_dir.path().join("leads.json");
        std::fs::write(&path, body).expect("Failed to write leads file");
        self.leads_path = Some(path);
        self
    }

    /// Write a scan envelope as `scan.json` and pass it via `--scan-file`.
    pub fn with_scan(mut self, message: &str, leads: &[LeadRecord]) -> Self {
        let path = self.temp_dir.path().join("scan.json");
        let body = scan_json(message, leads).expect("Failed to serialize scan");
        std::fs::write(&path, body).expect("Failed to write scan file");
        self.scan_path = Some(path);
        self
    }

    /// Write a config file with the given TOML body.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this world's config, sources, cwd and env.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        if let Some(leads_path) = &self.leads_path {
            cmd.arg("--source-file").arg(leads_path);
        }
        if let Some(scan_path) = &self.scan_path {
            cmd.arg("--scan-file").arg(scan_path);
        }

        cmd.current_dir(&self.cwd)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("LEADGEN_CONFIG");

        cmd
    }

    /// Execute the leadgen binary with `args`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, None)
    }

    /// Execute with `input` piped to stdin (for `browse`).
    ///
    /// Uses `Command::cargo_bin()`, which cargo test makes available for
    /// integration tests of the `leadgen` package.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], input: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("leadgen")
            .map_err(|e| anyhow::anyhow!("Failed to find leadgen binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        if let Some(input) = input {
            cmd.write_stdin(input.to_string());
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON (run with `--format json`).
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
