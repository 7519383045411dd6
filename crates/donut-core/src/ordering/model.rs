//! Ordering domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rank given to categories and products that have no saved position.
///
/// Larger than any rank a saved layout of realistic size produces, so unranked
/// entries sort after ranked ones. Ties between unranked entries keep catalog
/// order.
pub const UNRANKED: u32 = 999;

/// A product inside an [`OrderedCategory`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderedProduct {
    /// Unique within the parent category.
    pub product_id: String,
    pub name: String,
    pub order: u32,
}

/// A category with its products, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderedCategory {
    /// Category name; unique within the collection.
    pub category_id: String,
    pub name: String,
    pub order: u32,
    pub is_expanded: bool,
    pub products: Vec<OrderedProduct>,
}

impl OrderedCategory {
    pub(crate) fn product_index(&self, product_id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.product_id == product_id)
    }
}

/// Saved rank of a single product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRank {
    pub product_id: String,
    pub order: u32,
}

/// Saved rank of a category and of its products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRank {
    pub category_id: String,
    pub order: u32,
    #[serde(default)]
    pub products: Vec<ProductRank>,
}

impl CategoryRank {
    pub fn product_order(&self, product_id: &str) -> Option<u32> {
        self.products
            .iter()
            .find(|p| p.product_id == product_id)
            .map(|p| p.order)
    }
}

/// The durable record of a customised order.
///
/// Only identifiers and ranks are kept. Display names are re-read from the
/// live catalog on every load so renames never invalidate a saved order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLayout {
    pub categories: Vec<CategoryRank>,
    /// When the layout was saved.
    pub timestamp: DateTime<Utc>,
}

impl OrderLayout {
    /// Builds a layout from an ordered collection, stamped with `timestamp`.
    pub fn from_categories(categories: &[OrderedCategory], timestamp: DateTime<Utc>) -> Self {
        Self {
            categories: categories
                .iter()
                .map(|category| CategoryRank {
                    category_id: category.category_id.clone(),
                    order: category.order,
                    products: category
                        .products
                        .iter()
                        .map(|product| ProductRank {
                            product_id: product.product_id.clone(),
                            order: product.order,
                        })
                        .collect(),
                })
                .collect(),
            timestamp,
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&CategoryRank> {
        self.categories
            .iter()
            .find(|c| c.category_id == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, order: u32, products: &[(&str, u32)]) -> OrderedCategory {
        OrderedCategory {
            category_id: id.to_string(),
            name: id.to_string(),
            order,
            is_expanded: true,
            products: products
                .iter()
                .map(|(pid, order)| OrderedProduct {
                    product_id: pid.to_string(),
                    name: format!("name-{pid}"),
                    order: *order,
                })
                .collect(),
        }
    }

    #[test]
    fn test_layout_keeps_ids_and_ranks_only() {
        let categories = vec![
            category("Pizza", 0, &[("p3", 0)]),
            category("Donut", 1, &[("p1", 0), ("p2", 1)]),
        ];
        let layout = OrderLayout::from_categories(&categories, Utc::now());

        assert_eq!(layout.categories.len(), 2);
        assert_eq!(layout.categories[0].category_id, "Pizza");
        assert_eq!(layout.category("Donut").unwrap().product_order("p2"), Some(1));
        assert_eq!(layout.category("Donut").unwrap().product_order("p9"), None);

        let json = serde_json::to_string(&layout).unwrap();
        assert!(!json.contains("name-p1"));
        assert!(!json.contains("isExpanded"));
    }
}
