//! Application layer for Mega Donut category ordering.
//!
//! Coordinates the ordering engine from `donut-core` with an injected
//! order layout repository and notifies other views when the saved order
//! changes.

pub mod display;
pub mod order_manager;

pub use display::apply_saved_order;
pub use order_manager::{
    CategoryOrderManager, ManagerState, OrderAction, OrderLayoutChanged, ResetConfirmation,
};
