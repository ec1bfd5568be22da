//! Cache key model

use crate::model::EngineConfig;

/// Exact identity of a forecast request
///
/// Values are keyed by their bit patterns, so two requests share a key only
/// when they would produce bit-identical results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    values: Vec<u64>,
    horizon: usize,
    config: Vec<u64>,
}

impl CacheKey {
    pub fn new(values: &[f64], horizon: usize, config: &EngineConfig) -> Self {
        Self {
            values: values.iter().map(|v| v.to_bits()).collect(),
            horizon,
            config: config.fingerprint(),
        }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }
}
