//! Live catalog input.
//!
//! The catalog is owned by the surrounding application. The ordering
//! subsystem only reads it.

use serde::{Deserialize, Serialize};

/// A product as currently known to the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogProduct {
    /// Opaque product identifier.
    pub id: String,
    /// Display name, free to change without affecting saved order.
    pub name: String,
}

impl CatalogProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A category as currently known to the application.
///
/// The category name doubles as its stable key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogCategory {
    pub name: String,
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
}

impl CatalogCategory {
    pub fn new(name: impl Into<String>, products: Vec<CatalogProduct>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }
}

/// Parses a catalog from its JSON representation:
/// `[{ "name": "...", "products": [{ "id": "...", "name": "..." }] }]`.
pub fn catalog_from_json(content: &str) -> crate::error::Result<Vec<CatalogCategory>> {
    Ok(serde_json::from_str(content)?)
}
