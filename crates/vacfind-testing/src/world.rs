//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temporary data directory and starts from a clean
//! environment, so a developer's own config or `VACFIND_*` variables never
//! leak into a test.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ISOLATED_VARS: [&str; 3] = ["VACFIND_PATH", "VACFIND_API_URL", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use vacfind_testing::{MockApiServer, TestWorld};
///
/// let server = MockApiServer::json("{}").unwrap();
/// let world = TestWorld::new().with_api_url(&server.base_url());
///
/// let result = world
///     .run(&["search", "--min-temp", "10", "--max-temp", "20", "--month", "May"])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".vacfind");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point the CLI at a lookup service through the environment
    pub fn with_api_url(self, url: &str) -> Self {
        self.with_env("VACFIND_API_URL", url)
    }

    /// Write a config file into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this world's data dir and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        for key in ISOLATED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `vacfind` binary with plain output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format("plain", args)
    }

    /// Run the `vacfind` binary with JSON output.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format("json", args)
    }

    #[allow(deprecated)]
    fn run_with_format(&self, format: &str, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("vacfind")
            .map_err(|e| anyhow::anyhow!("Failed to find vacfind binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.arg("--format").arg(format);
        cmd.args(args);

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

    /// Parse stdout as JSON.
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
