//! Category and product ordering.
//!
//! The ordering subsystem keeps a two-level hierarchy (categories containing
//! products) in a user-defined order and persists only ids and ranks.

mod engine;
mod model;
mod reconciler;
mod repository;

pub use engine::{MoveDirection, OrderingEngine};
pub use model::{
    CategoryRank, OrderLayout, OrderedCategory, OrderedProduct, ProductRank, UNRANKED,
};
pub use reconciler::{default_order, reconcile};
pub use repository::OrderLayoutRepository;
