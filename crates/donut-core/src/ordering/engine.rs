//! In-memory ordered list engine.
//!
//! Holds the categories (and their products) while the ordering manager is
//! open. Every mutation re-indexes the affected siblings so their `order`
//! values are exactly `0..N-1` in array order. Unknown ids are no-ops.

use chrono::{DateTime, Utc};

use super::model::{OrderLayout, OrderedCategory, OrderedProduct};

/// Manual move applied to a category or product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Top,
    Bottom,
}

trait Ranked {
    fn set_order(&mut self, order: u32);
}

impl Ranked for OrderedCategory {
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Ranked for OrderedProduct {
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

fn reindex<T: Ranked>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32);
    }
}

/// Moves the entry at `index` and re-indexes. Returns false when the move
/// would leave the sequence unchanged.
fn apply_move<T: Ranked>(items: &mut Vec<T>, index: usize, direction: MoveDirection) -> bool {
    let last = items.len().saturating_sub(1);
    match direction {
        MoveDirection::Up if index > 0 => items.swap(index, index - 1),
        MoveDirection::Down if index < last => items.swap(index, index + 1),
        MoveDirection::Top if index > 0 => {
            let item = items.remove(index);
            items.insert(0, item);
        }
        MoveDirection::Bottom if index < last => {
            let item = items.remove(index);
            items.push(item);
        }
        _ => return false,
    }
    reindex(items);
    true
}

/// Ordered list of categories with manual reordering operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingEngine {
    categories: Vec<OrderedCategory>,
}

impl OrderingEngine {
    /// Takes ownership of `categories` in their current array order.
    ///
    /// Ranks are normalised to array position on construction.
    pub fn new(mut categories: Vec<OrderedCategory>) -> Self {
        reindex(&mut categories);
        for category in &mut categories {
            reindex(&mut category.products);
        }
        Self { categories }
    }

    pub fn categories(&self) -> &[OrderedCategory] {
        &self.categories
    }

    pub fn into_categories(self) -> Vec<OrderedCategory> {
        self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&OrderedCategory> {
        self.categories
            .iter()
            .find(|c| c.category_id == category_id)
    }

    fn category_index(&self, category_id: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c.category_id == category_id)
    }

    /// Moves a category one step or to either end.
    pub fn move_category(&mut self, category_id: &str, direction: MoveDirection) -> bool {
        match self.category_index(category_id) {
            Some(index) => apply_move(&mut self.categories, index, direction),
            None => false,
        }
    }

    pub fn move_category_up(&mut self, category_id: &str) -> bool {
        self.move_category(category_id, MoveDirection::Up)
    }

    pub fn move_category_down(&mut self, category_id: &str) -> bool {
        self.move_category(category_id, MoveDirection::Down)
    }

    pub fn move_category_to_top(&mut self, category_id: &str) -> bool {
        self.move_category(category_id, MoveDirection::Top)
    }

    pub fn move_category_to_bottom(&mut self, category_id: &str) -> bool {
        self.move_category(category_id, MoveDirection::Bottom)
    }

    /// Moves a product within its own category. Other categories are untouched.
    pub fn move_product(
        &mut self,
        category_id: &str,
        product_id: &str,
        direction: MoveDirection,
    ) -> bool {
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|c| c.category_id == category_id)
        else {
            return false;
        };
        match category.product_index(product_id) {
            Some(index) => apply_move(&mut category.products, index, direction),
            None => false,
        }
    }

    pub fn move_product_up(&mut self, category_id: &str, product_id: &str) -> bool {
        self.move_product(category_id, product_id, MoveDirection::Up)
    }

    pub fn move_product_down(&mut self, category_id: &str, product_id: &str) -> bool {
        self.move_product(category_id, product_id, MoveDirection::Down)
    }

    pub fn move_product_to_top(&mut self, category_id: &str, product_id: &str) -> bool {
        self.move_product(category_id, product_id, MoveDirection::Top)
    }

    pub fn move_product_to_bottom(&mut self, category_id: &str, product_id: &str) -> bool {
        self.move_product(category_id, product_id, MoveDirection::Bottom)
    }

    /// Drops `dragged_id` onto `target_id`: the dragged category is removed
    /// and reinserted at the index the target held before the removal.
    ///
    /// Only categories can be dragged.
    pub fn drag_category(&mut self, dragged_id: &str, target_id: &str) -> bool {
        if dragged_id == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (
            self.category_index(dragged_id),
            self.category_index(target_id),
        ) else {
            return false;
        };

        let dragged = self.categories.remove(from);
        self.categories.insert(to, dragged);
        reindex(&mut self.categories);
        true
    }

    /// Flips the expanded flag of one category.
    pub fn toggle_expand(&mut self, category_id: &str) -> bool {
        match self
            .categories
            .iter_mut()
            .find(|c| c.category_id == category_id)
        {
            Some(category) => {
                category.is_expanded = !category.is_expanded;
                true
            }
            None => false,
        }
    }

    /// Captures the current order as a persistable layout.
    pub fn snapshot(&self, timestamp: DateTime<Utc>) -> OrderLayout {
        OrderLayout::from_categories(&self.categories, timestamp)
    }
}
