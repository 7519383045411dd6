//! Category order manager.
//!
//! Owns the ordering engine for the lifetime of one editing session and
//! coordinates it with the saved layout and the change notification channel.
//!
//! Lifecycle: `Closed → Loading → Ready → Closed`. `Loading` only exists for
//! the duration of [`CategoryOrderManager::open`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;

use donut_core::catalog::CatalogCategory;
use donut_core::error::{DonutError, Result};
use donut_core::ordering::{
    MoveDirection, OrderLayout, OrderLayoutRepository, OrderedCategory, OrderingEngine,
    default_order, reconcile,
};

const NOTIFY_CAPACITY: usize = 16;

/// Broadcast after the saved order changed, so other views can re-sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLayoutChanged;

/// Lifecycle state of the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    Closed,
    Loading,
    Ready,
}

/// A user action coming from a click or drop handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    MoveCategory {
        category_id: String,
        direction: MoveDirection,
    },
    MoveProduct {
        category_id: String,
        product_id: String,
        direction: MoveDirection,
    },
    DragCategory {
        dragged_id: String,
        target_id: String,
    },
    ToggleExpand {
        category_id: String,
    },
}

/// Asked before the saved order is discarded.
pub trait ResetConfirmation {
    fn confirm_reset(&self) -> bool;
}

impl<F> ResetConfirmation for F
where
    F: Fn() -> bool,
{
    fn confirm_reset(&self) -> bool {
        self()
    }
}

/// Interaction surface for reordering categories and products.
///
/// One editing session at a time: `open` builds a fresh engine from the live
/// catalog and the saved layout, `save`/`cancel` drop it again.
pub struct CategoryOrderManager {
    repository: Arc<dyn OrderLayoutRepository>,
    notifier: broadcast::Sender<OrderLayoutChanged>,
    state: ManagerState,
    /// Catalog snapshot taken at open, used by reset.
    catalog: Vec<CatalogCategory>,
    engine: Option<OrderingEngine>,
}

impl CategoryOrderManager {
    pub fn new(repository: Arc<dyn OrderLayoutRepository>) -> Self {
        let (notifier, _) = broadcast::channel(NOTIFY_CAPACITY);
        Self {
            repository,
            notifier,
            state: ManagerState::Closed,
            catalog: Vec::new(),
            engine: None,
        }
    }

    /// Receives a notification after every successful save or reset.
    pub fn subscribe(&self) -> broadcast::Receiver<OrderLayoutChanged> {
        self.notifier.subscribe()
    }

    pub fn state(&self) -> ManagerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ManagerState::Ready
    }

    /// Opens an editing session for `catalog`.
    ///
    /// An unreadable saved layout is logged and replaced by the default
    /// order; the record itself is left untouched. Opening while already
    /// open discards the unsaved session first.
    pub fn open(&mut self, catalog: Vec<CatalogCategory>) -> &OrderingEngine {
        if self.engine.is_some() {
            tracing::debug!("[OrderManager] Reopening, discarding unsaved changes");
        }
        self.state = ManagerState::Loading;

        let layout = load_layout(self.repository.as_ref());
        let categories = reconcile(&catalog, layout.as_ref());
        tracing::debug!(
            "[OrderManager] Opened with {} categories (saved layout: {})",
            categories.len(),
            layout.is_some()
        );

        self.catalog = catalog;
        self.state = ManagerState::Ready;
        self.engine.insert(OrderingEngine::new(categories))
    }

    /// Current categories, `None` while closed.
    pub fn categories(&self) -> Option<&[OrderedCategory]> {
        self.engine.as_ref().map(OrderingEngine::categories)
    }

    pub fn engine(&self) -> Result<&OrderingEngine> {
        self.engine
            .as_ref()
            .ok_or_else(|| DonutError::invalid_state("Category order manager is closed"))
    }

    pub fn engine_mut(&mut self) -> Result<&mut OrderingEngine> {
        self.engine
            .as_mut()
            .ok_or_else(|| DonutError::invalid_state("Category order manager is closed"))
    }

    /// Applies one user action. Returns whether the order changed.
    pub fn apply(&mut self, action: &OrderAction) -> Result<bool> {
        let engine = self.engine_mut()?;
        let changed = match action {
            OrderAction::MoveCategory {
                category_id,
                direction,
            } => engine.move_category(category_id, *direction),
            OrderAction::MoveProduct {
                category_id,
                product_id,
                direction,
            } => engine.move_product(category_id, product_id, *direction),
            OrderAction::DragCategory {
                dragged_id,
                target_id,
            } => engine.drag_category(dragged_id, target_id),
            OrderAction::ToggleExpand { category_id } => engine.toggle_expand(category_id),
        };
        if !changed {
            tracing::debug!("[OrderManager] No-op action: {:?}", action);
        }
        Ok(changed)
    }

    /// Persists the current order, closes the session and notifies listeners.
    ///
    /// On failure the session stays open with its state intact so the user
    /// can retry.
    pub fn save(&mut self) -> Result<OrderLayout> {
        let layout = self.engine()?.snapshot(Utc::now());

        if let Err(e) = self.repository.save(&layout) {
            tracing::error!("[OrderManager] Failed to save category order: {}", e);
            return Err(e);
        }

        tracing::info!(
            "[OrderManager] Saved order of {} categories",
            layout.categories.len()
        );
        self.close();
        self.notify();
        Ok(layout)
    }

    /// Discards the saved order and rebuilds the default order.
    ///
    /// Returns `Ok(false)` without touching anything when the confirmation
    /// is declined. The session stays open either way.
    pub fn reset_to_default(&mut self, confirmation: &dyn ResetConfirmation) -> Result<bool> {
        self.engine()?;
        if !confirmation.confirm_reset() {
            tracing::debug!("[OrderManager] Reset declined");
            return Ok(false);
        }

        self.repository.clear()?;
        self.engine = Some(OrderingEngine::new(default_order(&self.catalog)));
        tracing::info!("[OrderManager] Category order reset to default");
        self.notify();
        Ok(true)
    }

    /// Closes without saving. The saved layout is not touched.
    pub fn cancel(&mut self) {
        if self.engine.is_some() {
            tracing::debug!("[OrderManager] Closed without saving");
        }
        self.close();
    }

    fn close(&mut self) {
        self.engine = None;
        self.catalog.clear();
        self.state = ManagerState::Closed;
    }

    fn notify(&self) {
        // Err only means nobody is listening.
        if self.notifier.send(OrderLayoutChanged).is_err() {
            tracing::debug!("[OrderManager] No listeners for order change");
        }
    }
}

/// Loads the saved layout, treating any failure as "nothing saved".
pub(crate) fn load_layout(repository: &dyn OrderLayoutRepository) -> Option<OrderLayout> {
    match repository.load() {
        Ok(layout) => layout,
        Err(e) => {
            tracing::warn!(
                "[OrderManager] Saved category order unusable, using default order: {}",
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use donut_core::catalog::CatalogProduct;
    use donut_infrastructure::InMemoryOrderLayoutRepository;

    fn catalog() -> Vec<CatalogCategory> {
        vec![
            CatalogCategory::new(
                "Donut",
                vec![
                    CatalogProduct::new("P1", "Glazed"),
                    CatalogProduct::new("P2", "Chocolate"),
                ],
            ),
            CatalogCategory::new("Pizza", vec![CatalogProduct::new("P3", "Margherita")]),
        ]
    }

    fn manager() -> (Arc<InMemoryOrderLayoutRepository>, CategoryOrderManager) {
        let repo = Arc::new(InMemoryOrderLayoutRepository::new());
        let manager = CategoryOrderManager::new(repo.clone());
        (repo, manager)
    }

    fn ids(manager: &CategoryOrderManager) -> Vec<String> {
        manager
            .categories()
            .unwrap()
            .iter()
            .map(|c| c.category_id.clone())
            .collect()
    }

    #[test]
    fn test_lifecycle_states() {
        let (_repo, mut manager) = manager();
        assert_eq!(manager.state(), ManagerState::Closed);
        assert!(manager.categories().is_none());

        manager.open(catalog());
        assert_eq!(manager.state(), ManagerState::Ready);

        manager.cancel();
        assert_eq!(manager.state(), ManagerState::Closed);
        assert!(manager.engine().is_err());
    }

    #[test]
    fn test_actions_require_open_manager() {
        let (_repo, mut manager) = manager();
        let action = OrderAction::ToggleExpand {
            category_id: "Donut".to_string(),
        };

        let err = manager.apply(&action).unwrap_err();
        assert!(matches!(err, DonutError::InvalidState(_)));
        assert!(manager.save().is_err());
        assert!(manager.reset_to_default(&|| true).is_err());
    }

    #[test]
    fn test_save_persists_closes_and_notifies() {
        let (repo, mut manager) = manager();
        let mut listener = manager.subscribe();

        manager.open(catalog());
        manager
            .apply(&OrderAction::MoveCategory {
                category_id: "Pizza".to_string(),
                direction: MoveDirection::Top,
            })
            .unwrap();
        let layout = manager.save().unwrap();

        assert_eq!(layout.categories[0].category_id, "Pizza");
        assert_eq!(manager.state(), ManagerState::Closed);
        assert_eq!(repo.load().unwrap(), Some(layout));
        assert_eq!(listener.try_recv().unwrap(), OrderLayoutChanged);
    }

    #[test]
    fn test_failed_save_keeps_session_open() {
        let (repo, mut manager) = manager();
        let mut listener = manager.subscribe();
        manager.open(catalog());
        manager.engine_mut().unwrap().move_category_down("Donut");

        repo.reject_writes(true);
        let err = manager.save().unwrap_err();
        assert!(err.is_storage());
        assert!(manager.is_open());
        assert_eq!(ids(&manager), vec!["Pizza", "Donut"]);
        assert!(listener.try_recv().is_err());

        repo.reject_writes(false);
        manager.save().unwrap();
        assert!(repo.load().unwrap().is_some());
    }

    #[test]
    fn test_cancel_does_not_touch_saved_order() {
        let (repo, mut manager) = manager();
        manager.open(catalog());
        manager.engine_mut().unwrap().move_category_down("Donut");
        manager.save().unwrap();
        let saved = repo.raw_record().unwrap();

        manager.open(catalog());
        manager.engine_mut().unwrap().move_category_down("Pizza");
        manager.cancel();

        assert_eq!(repo.raw_record().unwrap(), saved);
        manager.open(catalog());
        assert_eq!(ids(&manager), vec!["Pizza", "Donut"]);
    }

    #[test]
    fn test_reopen_starts_fresh() {
        let (_repo, mut manager) = manager();
        manager.open(catalog());
        manager.engine_mut().unwrap().toggle_expand("Donut");
        manager.engine_mut().unwrap().move_category_down("Donut");

        let engine = manager.open(catalog());
        assert_eq!(engine.categories()[0].category_id, "Donut");
        assert!(!engine.categories()[0].is_expanded);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let (repo, mut manager) = manager();
        manager.open(catalog());
        manager.engine_mut().unwrap().move_category_down("Donut");
        manager.save().unwrap();

        manager.open(catalog());
        assert!(!manager.reset_to_default(&|| false).unwrap());
        assert!(repo.raw_record().unwrap().is_some());
        assert_eq!(ids(&manager), vec!["Pizza", "Donut"]);
    }

    #[test]
    fn test_reset_clears_and_rebuilds_default() {
        let (repo, mut manager) = manager();
        manager.open(catalog());
        manager.engine_mut().unwrap().move_category_down("Donut");
        manager.engine_mut().unwrap().move_product_down("Donut", "P1");
        manager.save().unwrap();

        manager.open(catalog());
        let mut listener = manager.subscribe();
        assert!(manager.reset_to_default(&|| true).unwrap());
        let first = manager.categories().unwrap().to_vec();
        assert!(manager.reset_to_default(&|| true).unwrap());
        let second = manager.categories().unwrap().to_vec();

        assert!(repo.raw_record().unwrap().is_none());
        assert!(manager.is_open());
        assert_eq!(first, second);
        assert_eq!(first, default_order(&catalog()));
        assert_eq!(listener.try_recv().unwrap(), OrderLayoutChanged);
    }

    #[test]
    fn test_malformed_record_falls_back_to_default() {
        let repo = Arc::new(InMemoryOrderLayoutRepository::with_record("{\"version\":"));
        let mut manager = CategoryOrderManager::new(repo.clone());

        manager.open(catalog());

        assert_eq!(manager.categories().unwrap(), default_order(&catalog()).as_slice());
        assert_eq!(
            repo.raw_record().unwrap().as_deref(),
            Some("{\"version\":")
        );
    }

    #[test]
    fn test_noop_action_reports_unchanged() {
        let (_repo, mut manager) = manager();
        manager.open(catalog());

        let changed = manager
            .apply(&OrderAction::DragCategory {
                dragged_id: "Donut".to_string(),
                target_id: "Donut".to_string(),
            })
            .unwrap();
        assert!(!changed);
    }
}
