//! Order layout DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema with category/product ranks and save timestamp

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Migrator, Versioned};

use donut_core::error::Result;
use donut_core::ordering::{CategoryRank, OrderLayout, ProductRank};

/// Migrator entity name for the order layout.
pub const ORDER_LAYOUT_ENTITY: &str = "order_layout";

// ============================================================================
// Rank DTOs
// ============================================================================

/// Product rank DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRankV1_0_0 {
    pub product_id: String,
    pub order: u32,
}

/// Category rank DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRankV1_0_0 {
    pub category_id: String,
    pub order: u32,
    #[serde(default)]
    pub products: Vec<ProductRankV1_0_0>,
}

impl From<ProductRank> for ProductRankV1_0_0 {
    fn from(rank: ProductRank) -> Self {
        ProductRankV1_0_0 {
            product_id: rank.product_id,
            order: rank.order,
        }
    }
}

impl From<ProductRankV1_0_0> for ProductRank {
    fn from(dto: ProductRankV1_0_0) -> Self {
        ProductRank {
            product_id: dto.product_id,
            order: dto.order,
        }
    }
}

impl From<CategoryRank> for CategoryRankV1_0_0 {
    fn from(rank: CategoryRank) -> Self {
        CategoryRankV1_0_0 {
            category_id: rank.category_id,
            order: rank.order,
            products: rank.products.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CategoryRankV1_0_0> for CategoryRank {
    fn from(dto: CategoryRankV1_0_0) -> Self {
        CategoryRank {
            category_id: dto.category_id,
            order: dto.order,
            products: dto.products.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// OrderLayout DTOs
// ============================================================================

/// Order layout DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct OrderLayoutV1_0_0 {
    pub categories: Vec<CategoryRankV1_0_0>,
    /// ISO-8601 save time
    pub timestamp: DateTime<Utc>,
}

/// Convert OrderLayoutV1_0_0 DTO to domain model
impl IntoDomain<OrderLayout> for OrderLayoutV1_0_0 {
    fn into_domain(self) -> OrderLayout {
        OrderLayout {
            categories: self.categories.into_iter().map(Into::into).collect(),
            timestamp: self.timestamp,
        }
    }
}

/// Convert domain model to OrderLayoutV1_0_0 DTO (for version-migrate save support)
impl FromDomain<OrderLayout> for OrderLayoutV1_0_0 {
    fn from_domain(layout: OrderLayout) -> Self {
        OrderLayoutV1_0_0 {
            categories: layout.categories.into_iter().map(Into::into).collect(),
            timestamp: layout.timestamp,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for OrderLayout entities.
pub fn create_order_layout_migrator() -> Migrator {
    version_migrate::migrator!("order_layout" => [
        OrderLayoutV1_0_0,
        OrderLayout
    ], save = true)
    .expect("Failed to create order_layout migrator")
}

/// Encodes and decodes the persisted order layout record.
///
/// The record is flat versioned JSON:
/// `{"version":"1.0.0","categories":[...],"timestamp":"..."}`.
pub struct OrderLayoutCodec {
    migrator: Migrator,
}

impl OrderLayoutCodec {
    pub fn new() -> Self {
        Self {
            migrator: create_order_layout_migrator(),
        }
    }

    pub fn encode(&self, layout: &OrderLayout) -> Result<String> {
        Ok(self
            .migrator
            .save_domain_flat(ORDER_LAYOUT_ENTITY, layout.clone())?)
    }

    /// Parses a stored record, migrating older versions to the latest.
    pub fn decode(&self, content: &str) -> Result<OrderLayout> {
        let json_value: serde_json::Value = serde_json::from_str(content)?;

        let layout: OrderLayout = self
            .migrator
            .load_flat_from(ORDER_LAYOUT_ENTITY, json_value)?;

        Ok(layout)
    }
}

impl Default for OrderLayoutCodec {
    fn default() -> Self {
        Self::new()
    }
}
