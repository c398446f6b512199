//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use namewright_llm::ProviderSettings;
use namewright_renamer::RenamerConfig;
use namewright_validator::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = ".namewright";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// LLM backend
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Data file locations
    #[serde(default)]
    pub paths: Paths,

    /// Planner and executor behaviour
    #[serde(default)]
    pub renamer: RenamerConfig,

    /// Rule-independent checks run by `check`
    #[serde(default)]
    pub validator: ValidationConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Shell history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Locations of the rule and credential files.
///
/// Relative paths are resolved against the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paths {
    /// Rule file; `~/.namewright/rules.json` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<PathBuf>,

    /// Credential file; `~/.namewright/api_key` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_file: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding the config, rule and credential files.
    pub fn data_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(DATA_DIR))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    /// Load configuration from `path` (or the default location).
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize the configuration.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check the values that have constraints.
    pub fn validate(&self) -> Result<()> {
        self.renamer.validate().map_err(CliError::Config)?;
        self.validator.validate().map_err(CliError::Config)?;
        if self.provider.timeout_secs == 0 {
            return Err(CliError::Config("provider.timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    /// Resolved rule file path.
    pub fn rules_path(&self) -> Result<PathBuf> {
        resolve(self.paths.rules_file.as_deref(), "rules.json")
    }

    /// Resolved credential file path.
    pub fn credential_path(&self) -> Result<PathBuf> {
        resolve(self.paths.credential_file.as_deref(), "api_key")
    }
}

fn resolve(configured: Option<&Path>, default_name: &str) -> Result<PathBuf> {
    match configured {
        Some(p) if p.is_absolute() => Ok(p.to_path_buf()),
        Some(p) => Ok(Config::data_dir()?.join(p)),
        None => Ok(Config::data_dir()?.join(default_name)),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}
