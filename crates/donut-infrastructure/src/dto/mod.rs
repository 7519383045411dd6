//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the stored records. They are
//! private to the infrastructure layer and handle the evolution of the
//! storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//!
//! ### OrderLayout Version History
//! - **1.0.0**: Initial schema (category/product ranks + timestamp)
//!
//! ### DisplayPreferences Version History
//! - **1.0.0**: Initial schema (font size + column order)

mod order_layout;
mod preferences;

pub use order_layout::{
    CategoryRankV1_0_0, ORDER_LAYOUT_ENTITY, OrderLayoutCodec, OrderLayoutV1_0_0,
    ProductRankV1_0_0, create_order_layout_migrator,
};

pub use preferences::{
    DisplayPreferencesV1_0_0, PREFERENCES_ENTITY, create_preferences_migrator,
};
