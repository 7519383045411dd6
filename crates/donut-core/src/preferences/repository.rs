//! Display preferences repository trait.

use super::model::DisplayPreferences;
use crate::error::Result;

/// Repository trait for display preferences persistence.
pub trait PreferencesRepository: Send + Sync {
    /// Loads the preferences. Returns defaults if none exist.
    fn load(&self) -> Result<DisplayPreferences>;

    /// Saves the preferences.
    fn save(&self, preferences: &DisplayPreferences) -> Result<()>;
}
