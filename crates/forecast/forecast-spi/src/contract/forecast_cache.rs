//! Trait for forecast result caching

use crate::model::{CacheKey, ForecastResult};

/// Storage for previously computed forecasts
///
/// Implementations are injected into the engine, which stays a pure function
/// of its inputs: a hit must return exactly what a miss would compute.
pub trait ForecastCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<ForecastResult>;

    fn put(&self, key: CacheKey, result: ForecastResult);

    /// Number of cached entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
