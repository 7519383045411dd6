//! Application configuration model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_confirm_reset() -> bool {
    true
}

/// Root configuration read from `config.toml`.
///
/// Every field has a default so a missing or partial file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonutConfig {
    /// Directory holding the saved order layout and preferences.
    /// Falls back to the platform config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether resetting to the default order asks for confirmation.
    #[serde(default = "default_confirm_reset")]
    pub confirm_reset: bool,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            log_filter: default_log_filter(),
            confirm_reset: default_confirm_reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DonutConfig = toml::from_str("log_filter = \"debug\"").unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(config.confirm_reset);
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: DonutConfig = toml::from_str("").unwrap();
        assert_eq!(config, DonutConfig::default());
    }
}
