//! Display preferences for the order tables.
//!
//! Column order and font size chosen by the user, persisted per machine.

mod model;
mod repository;

pub use model::{DEFAULT_COLUMNS, DisplayPreferences, FontSize};
pub use repository::PreferencesRepository;
