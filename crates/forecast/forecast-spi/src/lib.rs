//! Forecast Service Provider Interface
//!
//! Defines the data model, error taxonomy and extension traits shared by the
//! monthly forecasting engine: decomposition, trend estimation, confidence
//! bands, the short-history fallback and result caching.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{
    ConfidenceIntervalComputer, Decomposer, FallbackForecaster, ForecastCache, TrendEstimator,
};
pub use error::{ForecastError, Result};
pub use model::{
    CacheKey, ConfidenceBand, ConfidenceConfig, ConfidenceInterval, DecompositionResult,
    EngineConfig, ForecastMetadata, ForecastMethod, ForecastResult, IntervalWidening,
    MonthlyObservation, NumericWarning, SmoothedForecast, TrendFit,
};
