//! Order layout repository trait.

use super::model::OrderLayout;
use crate::error::Result;

/// Storage for the single saved order layout.
///
/// Implementations keep exactly one record under a fixed key. `save`
/// overwrites it wholesale and `clear` removes it.
pub trait OrderLayoutRepository: Send + Sync {
    /// Replaces the stored layout.
    fn save(&self, layout: &OrderLayout) -> Result<()>;

    /// Returns the stored layout, `Ok(None)` when nothing was saved.
    ///
    /// Unreadable content is an error; the record is left in place.
    fn load(&self) -> Result<Option<OrderLayout>>;

    /// Removes the stored layout. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}
