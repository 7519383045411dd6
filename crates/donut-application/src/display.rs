//! Catalog re-sorting for read-only views.

use donut_core::catalog::{CatalogCategory, CatalogProduct};
use donut_core::ordering::{OrderLayoutRepository, reconcile};

use crate::order_manager::load_layout;

/// Returns `catalog` sorted by the saved order layout.
///
/// Views call this on startup and after an `OrderLayoutChanged`
/// notification. Without a usable saved layout the catalog order is kept.
/// Either way, repeated category names and repeated product ids within a
/// category are dropped (first entry wins).
pub fn apply_saved_order(
    catalog: &[CatalogCategory],
    repository: &dyn OrderLayoutRepository,
) -> Vec<CatalogCategory> {
    let layout = load_layout(repository);
    reconcile(catalog, layout.as_ref())
        .into_iter()
        .map(|category| CatalogCategory {
            name: category.name,
            products: category
                .products
                .into_iter()
                .map(|product| CatalogProduct {
                    id: product.product_id,
                    name: product.name,
                })
                .collect(),
        })
        .collect()
}
