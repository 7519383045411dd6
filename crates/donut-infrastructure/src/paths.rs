//! Unified path management for Mega Donut files.
//!
//! All paths are resolved via `AppPaths` from the version-migrate crate so
//! every platform (Linux, macOS, Windows) gets its conventional location.

use std::path::{Path, PathBuf};
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for donut_core::DonutError {
    fn from(err: PathError) -> Self {
        donut_core::DonutError::config(err.to_string())
    }
}

/// Unified path management for Mega Donut.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/megadonut/          # Config directory (AppPaths default)
/// ├── config.toml               # Application configuration
/// ├── category_order.json       # Saved category/product order
/// └── preferences.json          # Display preferences
/// ```
///
/// `storage_dir` in `config.toml` relocates the two JSON files.
pub struct DonutPaths;

impl DonutPaths {
    pub const CONFIG_FILENAME: &'static str = "config.toml";
    pub const ORDER_LAYOUT_FILENAME: &'static str = "category_order.json";
    pub const PREFERENCES_FILENAME: &'static str = "preferences.json";

    fn app_paths() -> AppPaths {
        AppPaths::new("megadonut")
    }

    /// Returns the Mega Donut configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/megadonut/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILENAME))
    }

    /// Directory holding the stored records: the override if given, else the
    /// config directory.
    pub fn storage_dir(storage_override: Option<&Path>) -> Result<PathBuf, PathError> {
        match storage_override {
            Some(dir) => Ok(dir.to_path_buf()),
            None => Self::config_dir(),
        }
    }

    /// Returns the path to the saved order layout.
    pub fn order_layout_file(storage_override: Option<&Path>) -> Result<PathBuf, PathError> {
        Ok(Self::storage_dir(storage_override)?.join(Self::ORDER_LAYOUT_FILENAME))
    }

    /// Returns the path to the display preferences.
    pub fn preferences_file(storage_override: Option<&Path>) -> Result<PathBuf, PathError> {
        Ok(Self::storage_dir(storage_override)?.join(Self::PREFERENCES_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = DonutPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("megadonut"));
    }

    #[test]
    fn test_config_file() {
        let config_file = DonutPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = DonutPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_storage_override() {
        let dir = Path::new("/tmp/donut-store");
        assert_eq!(
            DonutPaths::order_layout_file(Some(dir)).unwrap(),
            dir.join("category_order.json")
        );
        assert_eq!(
            DonutPaths::preferences_file(Some(dir)).unwrap(),
            dir.join("preferences.json")
        );
    }

    #[test]
    fn test_default_storage_is_config_dir() {
        let layout_file = DonutPaths::order_layout_file(None).unwrap();
        assert!(layout_file.starts_with(DonutPaths::config_dir().unwrap()));
    }
}
