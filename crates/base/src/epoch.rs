use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// A shared generation counter for cooperative cancellation.
///
/// Work scheduled on behalf of some owner is stamped with the epoch it was
/// created in. When the owner calls `advance()`, every stamped task notices
/// on its next check that its epoch is stale and does nothing.
#[derive(Clone, Debug)]
pub struct Epoch {
    value: Arc<AtomicU64>,
}

impl Default for Epoch {
    fn default() -> Self {
        Self::new()
    }
}

impl Epoch {
    pub fn new() -> Self {
        Self {
            value: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Get the current epoch value.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }

    /// Advance to the next epoch. Returns the new epoch value.
    pub fn advance(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Check if the given epoch is still current.
    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.current()
    }
}
