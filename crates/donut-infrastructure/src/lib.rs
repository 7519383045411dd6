//! Infrastructure layer for Mega Donut.
//!
//! Versioned persistence of the order layout and display preferences,
//! path resolution and configuration loading.

pub mod config_service;
pub mod dto;
pub mod file_order_layout_repository;
pub mod file_preferences_repository;
pub mod memory_order_layout_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_order_layout_repository::FileOrderLayoutRepository;
pub use crate::file_preferences_repository::FilePreferencesRepository;
pub use crate::memory_order_layout_repository::InMemoryOrderLayoutRepository;
