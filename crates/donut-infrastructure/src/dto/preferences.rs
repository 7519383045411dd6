//! Display preferences DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Font size and column order

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use donut_core::preferences::{DisplayPreferences, FontSize};

/// Migrator entity name for display preferences.
pub const PREFERENCES_ENTITY: &str = "display_preferences";

/// Display preferences DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferencesV1_0_0 {
    #[serde(default)]
    pub font_size: FontSize,
    #[serde(default)]
    pub column_order: Vec<String>,
}

impl IntoDomain<DisplayPreferences> for DisplayPreferencesV1_0_0 {
    fn into_domain(self) -> DisplayPreferences {
        DisplayPreferences {
            font_size: self.font_size,
            column_order: self.column_order,
        }
    }
}

impl FromDomain<DisplayPreferences> for DisplayPreferencesV1_0_0 {
    fn from_domain(preferences: DisplayPreferences) -> Self {
        DisplayPreferencesV1_0_0 {
            font_size: preferences.font_size,
            column_order: preferences.column_order,
        }
    }
}

/// Creates a Migrator for DisplayPreferences entities.
pub fn create_preferences_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("display_preferences" => [
        DisplayPreferencesV1_0_0,
        DisplayPreferences
    ], save = true)
    .expect("Failed to create display_preferences migrator")
}
