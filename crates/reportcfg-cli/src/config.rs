use anyhow::{Context, Result};
use reportcfg_engine::KnownVariables;
use reportcfg_types::{DecisionVariableRef, ReportSubject, VariableRef};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

pub const CONFIG_ENV: &str = "REPORTCFG_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. REPORTCFG_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.config/reportcfg (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("reportcfg").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home)
            .join(".config")
            .join("reportcfg")
            .join("config.toml"));
    }

    anyhow::bail!("Could not determine config path: no HOME directory or XDG config directory found")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// User settings: defaults for flags and the variables dynamic catalog
/// groups are expanded with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_subject: ReportSubject,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub variables: Vec<VariableRef>,

    #[serde(default)]
    pub decision_inputs: Vec<DecisionVariableRef>,

    #[serde(default)]
    pub decision_outputs: Vec<DecisionVariableRef>,
}

impl Config {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    pub fn known_variables(&self) -> KnownVariables {
        KnownVariables {
            process: self.variables.clone(),
            inputs: self.decision_inputs.clone(),
            outputs: self.decision_outputs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_subject, ReportSubject::Process);
        assert_eq!(config.format, OutputFormat::Plain);
        assert!(config.known_variables().is_empty());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            default_subject: ReportSubject::Decision,
            format: OutputFormat::Json,
            variables: vec![VariableRef::new("amount", "Double")],
            decision_inputs: vec![DecisionVariableRef {
                id: "in1".to_string(),
                name: "Invoice Amount".to_string(),
            }],
            decision_outputs: Vec::new(),
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_partial_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "format = \"json\"\n\n[[variables]]\nname = \"approved\"\ntype = \"Boolean\"\n",
        )?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.format, OutputFormat::Json);
        assert_eq!(loaded.default_subject, ReportSubject::Process);
        assert_eq!(loaded.variables, vec![VariableRef::new("approved", "Boolean")]);
        Ok(())
    }

    #[test]
    fn test_load_malformed_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "format = [")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml")))?;
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
        Ok(())
    }
}
