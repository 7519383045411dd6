//! Domain layer for the Mega Donut ordering subsystem.
//!
//! Holds the catalog input types, the ordered list engine, the reconciler
//! and the repository traits implemented by `donut-infrastructure`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod ordering;
pub mod preferences;

pub use error::DonutError;
