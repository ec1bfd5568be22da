//! Forecast Core
//!
//! Core implementations for the monthly forecasting engine: additive
//! decomposition, recency-weighted trend extrapolation, seasonal
//! re-application, residual-based confidence bands, Holt's linear smoothing
//! for short histories, and the orchestrating [`ForecastEngine`].

pub mod cache;
pub mod confidence;
pub mod decomposition;
pub mod engine;
pub mod seasonality;
pub mod smoothing;
pub mod stats;
pub mod trend;

// Re-export SPI types for implementations
pub use forecast_spi::{
    CacheKey, ConfidenceBand, ConfidenceConfig, ConfidenceInterval, ConfidenceIntervalComputer,
    DecompositionResult, Decomposer, EngineConfig, FallbackForecaster, ForecastCache,
    ForecastError, ForecastMetadata, ForecastMethod, ForecastResult, IntervalWidening,
    MonthlyObservation, NumericWarning, Result, SmoothedForecast, TrendEstimator, TrendFit,
};

// Re-export main types
pub use cache::InMemoryForecastCache;
pub use confidence::{ForecastWithConfidence, ResidualIntervalComputer};
pub use decomposition::{decompose_additive, AdditiveDecomposer};
pub use engine::{forecast, ForecastEngine};
pub use seasonality::apply_seasonality;
pub use smoothing::{holt_linear, HoltSmoother};
pub use trend::{forecast_trend, WeightedTrendEstimator};
