//! In-memory order layout repository.
//!
//! Keeps the encoded record in memory, in the same versioned JSON format as
//! the file repository. Used by tests and by callers that must not touch
//! the disk.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use donut_core::error::{DonutError, Result};
use donut_core::ordering::{OrderLayout, OrderLayoutRepository};

use crate::dto::OrderLayoutCodec;

#[derive(Default)]
pub struct InMemoryOrderLayoutRepository {
    record: Mutex<Option<String>>,
    codec: OrderLayoutCodec,
    reject_writes: AtomicBool,
}

impl InMemoryOrderLayoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` as the stored record, whatever it contains.
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
            ..Self::default()
        }
    }

    /// Makes subsequent `save` calls fail like a full store would.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// The stored record as written.
    pub fn raw_record(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.record
            .lock()
            .map_err(|e| DonutError::internal(format!("Order layout store poisoned: {}", e)))
    }
}

impl OrderLayoutRepository for InMemoryOrderLayoutRepository {
    fn save(&self, layout: &OrderLayout) -> Result<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(DonutError::storage("Store quota exceeded"));
        }
        let serialized = self.codec.encode(layout)?;
        *self.lock()? = Some(serialized);
        Ok(())
    }

    fn load(&self) -> Result<Option<OrderLayout>> {
        let record = self.lock()?.clone();
        record
            .map(|content| self.codec.decode(&content))
            .transpose()
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
