//! Configuration for planning and executing renames

use serde::{Deserialize, Serialize};

/// Configuration for the planner and batch executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Maximum entries shown by a preview
    pub preview_limit: usize,

    /// Apply plans even when the collaborator returned fewer names than requested
    pub accept_partial: bool,

    /// Undo applied renames, newest first, when a batch fails
    pub rollback_on_error: bool,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            preview_limit: 5,
            accept_partial: false,
            rollback_on_error: false,
        }
    }
}

impl RenamerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.preview_limit == 0 {
            return Err("preview_limit must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
