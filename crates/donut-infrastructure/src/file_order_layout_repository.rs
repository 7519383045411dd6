//! Order layout repository backed by a JSON file.
//!
//! Stores the saved category/product order as versioned JSON.
//! Uses version-migrate for automatic schema migration.
//!
//! File location: `{storage_dir}/category_order.json`

use std::path::{Path, PathBuf};

use donut_core::error::{DonutError, Result};
use donut_core::ordering::{OrderLayout, OrderLayoutRepository};

use crate::dto::OrderLayoutCodec;
use crate::paths::DonutPaths;
use crate::storage::AtomicFile;

/// File-based order layout repository with version migration support.
pub struct FileOrderLayoutRepository {
    file: AtomicFile,
    codec: OrderLayoutCodec,
}

impl FileOrderLayoutRepository {
    /// Creates a repository in the storage directory (config dir by default).
    pub fn new(storage_override: Option<&Path>) -> Result<Self> {
        let path = DonutPaths::order_layout_file(storage_override)?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository with a custom file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
            codec: OrderLayoutCodec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl OrderLayoutRepository for FileOrderLayoutRepository {
    fn save(&self, layout: &OrderLayout) -> Result<()> {
        let serialized = self.codec.encode(layout)?;

        self.file.write(&serialized).map_err(|e| {
            DonutError::storage(format!(
                "Failed to write category order to {:?}: {}",
                self.file.path(),
                e
            ))
        })?;

        tracing::info!(
            "[OrderLayout] Saved {} categories to {:?}",
            layout.categories.len(),
            self.file.path()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<OrderLayout>> {
        let Some(content) = self.file.read()? else {
            return Ok(None);
        };

        let layout = self.codec.decode(&content)?;
        Ok(Some(layout))
    }

    fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::info!("[OrderLayout] Cleared saved order at {:?}", self.file.path());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use donut_core::ordering::{CategoryRank, ProductRank};
    use tempfile::TempDir;

    fn layout() -> OrderLayout {
        OrderLayout {
            categories: vec![CategoryRank {
                category_id: "Donut".to_string(),
                order: 0,
                products: vec![ProductRank {
                    product_id: "p1".to_string(),
                    order: 0,
                }],
            }],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_load_none_when_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileOrderLayoutRepository::with_path(temp_dir.path().join("order.json"));

        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileOrderLayoutRepository::with_path(temp_dir.path().join("order.json"));

        let saved = layout();
        repo.save(&saved).unwrap();

        assert_eq!(repo.load().unwrap(), Some(saved));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileOrderLayoutRepository::with_path(temp_dir.path().join("order.json"));

        repo.save(&layout()).unwrap();
        let empty = OrderLayout {
            categories: vec![],
            timestamp: Utc::now(),
        };
        repo.save(&empty).unwrap();

        assert_eq!(repo.load().unwrap(), Some(empty));
    }

    #[test]
    fn test_clear_removes_record() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileOrderLayoutRepository::with_path(temp_dir.path().join("order.json"));

        repo.save(&layout()).unwrap();
        repo.clear().unwrap();

        assert!(repo.load().unwrap().is_none());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_malformed_record_is_error_and_kept() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("order.json");
        std::fs::write(&path, "{ not json").unwrap();
        let repo = FileOrderLayoutRepository::with_path(path.clone());

        let err = repo.load().unwrap_err();
        assert!(err.is_malformed_record());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_write_failure_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in place of the target file makes the rename fail.
        let path = temp_dir.path().join("order.json");
        std::fs::create_dir_all(path.join("occupied")).unwrap();
        let repo = FileOrderLayoutRepository::with_path(path);

        let err = repo.save(&layout()).unwrap_err();
        assert!(err.is_storage());
    }
}
