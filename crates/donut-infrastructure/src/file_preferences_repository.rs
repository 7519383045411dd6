//! Display preferences repository backed by a JSON file.
//!
//! File location: `{storage_dir}/preferences.json`

use std::path::{Path, PathBuf};

use version_migrate::Migrator;

use donut_core::error::{DonutError, Result};
use donut_core::preferences::{DisplayPreferences, PreferencesRepository};

use crate::dto::{PREFERENCES_ENTITY, create_preferences_migrator};
use crate::paths::DonutPaths;
use crate::storage::AtomicFile;

/// File-based display preferences repository.
///
/// Missing or unreadable files yield the default preferences; the
/// preferences are cosmetic and never block the application.
pub struct FilePreferencesRepository {
    file: AtomicFile,
    migrator: Migrator,
}

impl FilePreferencesRepository {
    pub fn new(storage_override: Option<&Path>) -> Result<Self> {
        let path = DonutPaths::preferences_file(storage_override)?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository with a custom file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
            migrator: create_preferences_migrator(),
        }
    }

    fn decode(&self, content: &str) -> Result<DisplayPreferences> {
        let json_value: serde_json::Value = serde_json::from_str(content)?;
        let preferences: DisplayPreferences = self
            .migrator
            .load_flat_from(PREFERENCES_ENTITY, json_value)?;
        Ok(preferences)
    }
}

impl PreferencesRepository for FilePreferencesRepository {
    fn load(&self) -> Result<DisplayPreferences> {
        let Some(content) = self.file.read()? else {
            return Ok(DisplayPreferences::default());
        };

        let mut preferences = match self.decode(&content) {
            Ok(preferences) => preferences,
            Err(e) => {
                tracing::warn!(
                    "[Preferences] Ignoring unreadable preferences at {:?}: {}",
                    self.file.path(),
                    e
                );
                return Ok(DisplayPreferences::default());
            }
        };
        preferences.normalize_columns();
        Ok(preferences)
    }

    fn save(&self, preferences: &DisplayPreferences) -> Result<()> {
        let serialized = self
            .migrator
            .save_domain_flat(PREFERENCES_ENTITY, preferences.clone())?;

        self.file
            .write(&serialized)
            .map_err(|e| DonutError::storage(format!("Failed to write preferences: {}", e)))
    }
}
