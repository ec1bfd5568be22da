//! Fluent engine construction

use forecast_core::ForecastEngine;
use forecast_spi::{ConfidenceConfig, EngineConfig, ForecastCache, IntervalWidening, Result};
use std::sync::Arc;

/// Builder for [`ForecastEngine`]
///
/// ```rust
/// use forecast_api::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .seasonal_threshold(36)
///     .confidence_level(0.90)
///     .build()
///     .unwrap();
/// assert_eq!(engine.config().seasonal_threshold, 36);
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    cache: Option<Arc<dyn ForecastCache>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    pub fn period(mut self, period: usize) -> Self {
        self.config.period = period;
        self
    }

    pub fn seasonal_threshold(mut self, months: usize) -> Self {
        self.config.seasonal_threshold = months;
        self
    }

    pub fn trend_window(mut self, window: usize) -> Self {
        self.config.trend_window = window;
        self
    }

    pub fn recency_decay(mut self, decay: f64) -> Self {
        self.config.recency_decay = decay;
        self
    }

    pub fn max_horizon(mut self, months: usize) -> Self {
        self.config.max_horizon = months;
        self
    }

    /// Holt level and trend smoothing constants
    pub fn smoothing(mut self, alpha: f64, beta: f64) -> Self {
        self.config.alpha = alpha;
        self.config.beta = beta;
        self
    }

    pub fn confidence_level(mut self, level: f64) -> Self {
        self.config.confidence.level = level;
        self
    }

    pub fn widening(mut self, widening: IntervalWidening) -> Self {
        self.config.confidence.widening = widening;
        self
    }

    pub fn confidence(mut self, confidence: ConfidenceConfig) -> Self {
        self.config.confidence = confidence;
        self
    }

    pub fn cache(mut self, cache: Arc<dyn ForecastCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Validate the configuration and build the engine
    pub fn build(self) -> Result<ForecastEngine> {
        let engine = ForecastEngine::new(self.config)?;
        Ok(match self.cache {
            Some(cache) => engine.with_cache(cache),
            None => engine,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::InMemoryForecastCache;
    use forecast_spi::ForecastError;

    #[test]
    fn test_default_build() {
        let engine = EngineBuilder::new().build().unwrap();
        assert_eq!(engine.config(), &EngineConfig::default());
    }

    #[test]
    fn test_setters() {
        let engine = EngineBuilder::new()
            .period(4)
            .seasonal_threshold(8)
            .trend_window(6)
            .recency_decay(0.8)
            .max_horizon(24)
            .smoothing(0.5, 0.2)
            .confidence_level(0.99)
            .widening(IntervalWidening::SqrtHorizon)
            .build()
            .unwrap();

        let config = engine.config();
        assert_eq!(config.period, 4);
        assert_eq!(config.seasonal_threshold, 8);
        assert_eq!(config.trend_window, 6);
        assert_eq!(config.recency_decay, 0.8);
        assert_eq!(config.max_horizon, 24);
        assert_eq!((config.alpha, config.beta), (0.5, 0.2));
        assert_eq!(config.confidence.level, 0.99);
        assert_eq!(config.confidence.widening, IntervalWidening::SqrtHorizon);
    }

    #[test]
    fn test_invalid_values_fail_build() {
        let err = EngineBuilder::new().smoothing(0.3, 2.0).build();
        assert!(matches!(err, Err(ForecastError::InvalidParameter { .. })));

        let err = EngineBuilder::new().period(0).build();
        assert!(matches!(err, Err(ForecastError::InvalidPeriod(_))));
    }

    #[test]
    fn test_cache_is_attached() {
        let cache = Arc::new(InMemoryForecastCache::new(4));
        let engine = EngineBuilder::new().cache(cache.clone()).build().unwrap();
        engine.forecast_values(&[1.0, 2.0, 3.0], 2).unwrap();
        assert_eq!(cache.len(), 1);
    }
}
