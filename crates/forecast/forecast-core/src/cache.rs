//! In-memory forecast cache
//!
//! Bounded map with first-in-first-out eviction. Shared between callers via
//! `Arc`, injected into [`ForecastEngine`](crate::ForecastEngine).

use forecast_spi::{CacheKey, ForecastCache, ForecastResult};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// Default number of retained forecasts
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Default)]
struct CacheState {
    entries: HashMap<CacheKey, ForecastResult>,
    order: VecDeque<CacheKey>,
}

/// Mutex-guarded forecast cache with FIFO eviction
pub struct InMemoryForecastCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl InMemoryForecastCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // A panic elsewhere cannot leave the map half-written
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InMemoryForecastCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ForecastCache for InMemoryForecastCache {
    fn get(&self, key: &CacheKey) -> Option<ForecastResult> {
        self.lock().entries.get(key).cloned()
    }

    fn put(&self, key: CacheKey, result: ForecastResult) {
        let mut state = self.lock();
        if state.entries.insert(key.clone(), result).is_some() {
            return;
        }
        state.order.push_back(key);
        while state.order.len() > self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
            }
        }
    }

    fn len(&self) -> usize {
        self.lock().entries.len()
    }
}
