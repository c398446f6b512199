//! Validator configuration

use namewright_domain::MAX_NAME_LENGTH;
use serde::{Deserialize, Serialize};

/// Configuration for the rule-independent checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Flag regular files without an extension (when the scope includes files)
    #[serde(default = "default_true")]
    pub check_extension: bool,

    /// Flag names longer than `max_name_length`
    #[serde(default = "default_true")]
    pub check_length: bool,

    /// Maximum name length in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Descend into symlinked directories
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_true() -> bool {
    true
}

fn default_max_name_length() -> usize {
    MAX_NAME_LENGTH
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_extension: true,
            check_length: true,
            max_name_length: MAX_NAME_LENGTH,
            follow_symlinks: false,
        }
    }
}

impl ValidationConfig {
    /// Only the user's rules; no extension or length checks
    pub fn rules_only() -> Self {
        Self {
            check_extension: false,
            check_length: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.check_length && self.max_name_length == 0 {
            return Err("max_name_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.check_extension);
        assert!(config.check_length);
        assert_eq!(config.max_name_length, 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rules_only_config() {
        let config = ValidationConfig::rules_only();
        assert!(!config.check_extension);
        assert!(!config.check_length);
    }

    #[test]
    fn test_invalid_length() {
        let config = ValidationConfig {
            max_name_length: 0,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_partial_toml() {
        let config = ValidationConfig::from_toml("check_extension = false").unwrap();
        assert!(!config.check_extension);
        assert!(config.check_length);
        assert_eq!(config.max_name_length, 255);
    }
}
