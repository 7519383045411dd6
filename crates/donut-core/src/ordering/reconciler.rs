//! Rebuilds the ordered collection from the live catalog and a saved layout.

use std::collections::HashSet;

use super::engine::OrderingEngine;
use super::model::{CategoryRank, OrderLayout, OrderedCategory, OrderedProduct, UNRANKED};
use crate::catalog::{CatalogCategory, CatalogProduct};

/// Positional products, in catalog order. Duplicate ids keep the first entry.
fn positional_products(category: &CatalogCategory) -> Vec<OrderedProduct> {
    let mut seen = HashSet::new();
    category
        .products
        .iter()
        .filter(|product| {
            let fresh = seen.insert(product.id.as_str());
            if !fresh {
                tracing::warn!(
                    "Duplicate product id '{}' in category '{}' ignored",
                    product.id,
                    category.name
                );
            }
            fresh
        })
        .enumerate()
        .map(|(index, product)| ordered_product(product, index as u32))
        .collect()
}

fn ordered_product(product: &CatalogProduct, order: u32) -> OrderedProduct {
    OrderedProduct {
        product_id: product.id.clone(),
        name: product.name.clone(),
        order,
    }
}

/// Products ranked by the saved layout; unsaved products go last.
fn ranked_products(category: &CatalogCategory, rank: &CategoryRank) -> Vec<OrderedProduct> {
    let mut products: Vec<OrderedProduct> = positional_products(category)
        .into_iter()
        .map(|mut product| {
            product.order = rank.product_order(&product.product_id).unwrap_or(UNRANKED);
            product
        })
        .collect();
    // Stable: equal ranks keep catalog order.
    products.sort_by_key(|p| p.order);
    products
}

/// Catalog categories with duplicate names removed (first one wins).
fn unique_categories(catalog: &[CatalogCategory]) -> impl Iterator<Item = &CatalogCategory> {
    let mut seen = HashSet::new();
    catalog.iter().filter(move |category| {
        let fresh = seen.insert(category.name.as_str());
        if !fresh {
            tracing::warn!("Duplicate category '{}' ignored", category.name);
        }
        fresh
    })
}

/// The default order: catalog order for categories and products, all collapsed.
pub fn default_order(catalog: &[CatalogCategory]) -> Vec<OrderedCategory> {
    let categories = unique_categories(catalog)
        .enumerate()
        .map(|(index, category)| OrderedCategory {
            category_id: category.name.clone(),
            name: category.name.clone(),
            order: index as u32,
            is_expanded: false,
            products: positional_products(category),
        })
        .collect();
    OrderingEngine::new(categories).into_categories()
}

/// Merges a saved layout into the live catalog.
///
/// Catalog entries missing from the layout are ranked [`UNRANKED`] and land
/// after every ranked sibling, in catalog order. Layout entries missing from
/// the catalog are dropped. The result is re-indexed to `0..N-1` at both
/// levels. Without a layout this is [`default_order`].
pub fn reconcile(catalog: &[CatalogCategory], layout: Option<&OrderLayout>) -> Vec<OrderedCategory> {
    let Some(layout) = layout else {
        return default_order(catalog);
    };

    let mut categories: Vec<OrderedCategory> = unique_categories(catalog)
        .map(|category| match layout.category(&category.name) {
            Some(rank) => OrderedCategory {
                category_id: category.name.clone(),
                name: category.name.clone(),
                order: rank.order,
                is_expanded: false,
                products: ranked_products(category, rank),
            },
            None => OrderedCategory {
                category_id: category.name.clone(),
                name: category.name.clone(),
                order: UNRANKED,
                is_expanded: false,
                products: positional_products(category),
            },
        })
        .collect();

    let stale = layout
        .categories
        .iter()
        .filter(|rank| !catalog.iter().any(|c| c.name == rank.category_id))
        .count();
    if stale > 0 {
        tracing::debug!("Dropped {} saved categories no longer in the catalog", stale);
    }

    categories.sort_by_key(|c| c.order);
    OrderingEngine::new(categories).into_categories()
}
