pub mod config;
pub mod order;
pub mod prefs;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::ValueEnum;

use donut_core::catalog::{CatalogCategory, catalog_from_json};
use donut_core::config::DonutConfig;
use donut_core::ordering::MoveDirection;
use donut_infrastructure::{FileOrderLayoutRepository, FilePreferencesRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Up,
    Down,
    Top,
    Bottom,
}

impl From<DirectionArg> for MoveDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Up => MoveDirection::Up,
            DirectionArg::Down => MoveDirection::Down,
            DirectionArg::Top => MoveDirection::Top,
            DirectionArg::Bottom => MoveDirection::Bottom,
        }
    }
}

/// Resolved settings shared by every command.
pub struct Context {
    pub config: DonutConfig,
    catalog: Option<PathBuf>,
    storage_dir: Option<PathBuf>,
}

impl Context {
    pub fn new(config: DonutConfig, catalog: Option<PathBuf>, storage_dir: Option<PathBuf>) -> Self {
        Self {
            config,
            catalog,
            storage_dir,
        }
    }

    /// `--storage-dir` wins over `storage_dir` in config.toml.
    pub fn storage_dir(&self) -> Option<&Path> {
        self.storage_dir
            .as_deref()
            .or(self.config.storage_dir.as_deref())
    }

    pub fn load_catalog(&self) -> Result<Vec<CatalogCategory>> {
        let path = self
            .catalog
            .as_deref()
            .context("This command needs a catalog: pass --catalog <file>")?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = catalog_from_json(&content)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        Ok(catalog)
    }

    pub fn order_repository(&self) -> Result<Arc<FileOrderLayoutRepository>> {
        Ok(Arc::new(FileOrderLayoutRepository::new(self.storage_dir())?))
    }

    pub fn preferences_repository(&self) -> Result<FilePreferencesRepository> {
        Ok(FilePreferencesRepository::new(self.storage_dir())?)
    }
}
