//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` in the Mega Donut config
//! directory (`~/.config/megadonut/config.toml` on Linux).

use std::path::{Path, PathBuf};

use donut_core::config::DonutConfig;
use donut_core::error::Result;

use crate::paths::DonutPaths;
use crate::storage::AtomicFile;

/// Configuration service reading `config.toml`.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicFile,
}

impl ConfigService {
    /// Uses the platform config file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(DonutPaths::config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the configuration. A missing file yields the defaults; a file
    /// that does not parse is an error.
    pub fn load(&self) -> Result<DonutConfig> {
        match self.file.read()? {
            Some(content) => {
                let config: DonutConfig = toml::from_str(&content)?;
                tracing::debug!("[Config] Loaded configuration from {:?}", self.file.path());
                Ok(config)
            }
            None => Ok(DonutConfig::default()),
        }
    }

    /// Writes the configuration back, e.g. to create a template file.
    pub fn save(&self, config: &DonutConfig) -> Result<()> {
        let content = toml::to_string_pretty(config)?;
        self.file.write(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.load().unwrap(), DonutConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "storage_dir = \"/srv/donut\"\nlog_filter = \"donut=debug\"\nconfirm_reset = false\n",
        )
        .unwrap();

        let config = ConfigService::with_path(path).load().unwrap();
        assert_eq!(config.storage_dir, Some(PathBuf::from("/srv/donut")));
        assert_eq!(config.log_filter, "donut=debug");
        assert!(!config.confirm_reset);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "confirm_reset = \"maybe\"").unwrap();

        assert!(ConfigService::with_path(path).load().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let config = DonutConfig {
            confirm_reset: false,
            ..DonutConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }
}
