//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing report and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::ReportBuilder;

/// Declarative test environment builder.
///
/// Every command runs with `REPORTCFG_CONFIG` pointing into the temp dir,
/// so the user's real config is never read.
///
/// # Example
/// ```no_run
/// use reportcfg_testing::{ReportBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_report("report.json", &ReportBuilder::process());
///
/// let result = world.run(&["check", "report.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
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
        let config_path = temp_dir.path().join("reportcfg").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root, used as the working directory.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path the CLI resolves its config file to.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Absolute path of a file inside the world.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a report file built from `builder`.
    pub fn with_report(self, name: &str, builder: &ReportBuilder) -> Self {
        std::fs::write(self.path(name), builder.to_json()).expect("Failed to write report");
        self
    }

    /// Write raw file contents, e.g. a hand-written report document.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.path(name), content).expect("Failed to write file");
        self
    }

    /// Write the TOML config file.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Read a file produced by a command.
    pub fn read(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(name))?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("REPORTCFG_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute a command.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built; cargo test does that for the CLI crate's integration tests.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, None)
    }

    /// Execute a command feeding `stdin` to the process.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("reportcfg")
            .map_err(|e| anyhow::anyhow!("Failed to find reportcfg binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        if let Some(input) = stdin {
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
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, `None` when killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
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
