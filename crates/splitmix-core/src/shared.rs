//! Convenience handle owning one generator.
//!
//! [`SplitMix64`] itself has no locking; pass it by `&mut` and keep one per stream. `SharedRng`
//! is for callers that want a single instance reachable from several places (a game session
//! object, several systems on different threads). It is a value you construct and hand out, never
//! an implicit global.
//!
//! Each draw locks once. Draws from different clones interleave in lock order, so a multi-draw
//! operation that must be contiguous in the stream (a full dice roll, say) goes through
//! [`SharedRng::with`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::rng::{DeterministicRng, SplitMix64};

#[derive(Debug, Clone, Default)]
pub struct SharedRng {
    inner: Arc<Mutex<SplitMix64>>,
}

impl SharedRng {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SplitMix64::new(seed))
    }

    pub fn from_rng(rng: SplitMix64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    pub fn with<T>(&self, f: impl FnOnce(&mut SplitMix64) -> T) -> T {
        f(&mut self.lock())
    }

    pub fn seed(&self, seed: u64) {
        self.lock().seed(seed);
    }

    pub fn get_state(&self) -> u64 {
        self.lock().get_state()
    }

    /// Copy of the generator as it is now.
    pub fn snapshot(&self) -> SplitMix64 {
        *self.lock()
    }

    // The guarded value is a plain word that is valid in every state, so a panic while holding the
    // lock cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, SplitMix64> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeterministicRng for SharedRng {
    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }
}
