//! Forecast Consumer API
//!
//! Consumer configuration and builder APIs for the monthly forecast engine.
//!
//! This crate provides:
//! - [`EngineBuilder`] for assembling a configured [`ForecastEngine`]
//! - Month-key parsing, monthly aggregation of dated records and horizon labels
//! - Re-exports from SPI and core for convenience

pub mod builder;
pub mod months;

pub use builder::EngineBuilder;
pub use months::{aggregate_monthly, horizon_labels, DatedValue, MonthKey};

// Re-export from core
pub use forecast_core::{
    apply_seasonality, cache, confidence, decompose_additive, decomposition, engine, forecast,
    forecast_trend, holt_linear, seasonality, smoothing, stats, trend, AdditiveDecomposer,
    ForecastEngine, ForecastWithConfidence, HoltSmoother, InMemoryForecastCache,
    ResidualIntervalComputer, WeightedTrendEstimator,
};

// Re-export types and traits from SPI
pub use forecast_spi::{
    CacheKey, ConfidenceBand, ConfidenceConfig, ConfidenceInterval, ConfidenceIntervalComputer,
    DecompositionResult, Decomposer, EngineConfig, FallbackForecaster, ForecastCache,
    ForecastError, ForecastMetadata, ForecastMethod, ForecastResult, IntervalWidening,
    MonthlyObservation, NumericWarning, Result, SmoothedForecast, TrendEstimator, TrendFit,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{aggregate_monthly, horizon_labels, DatedValue, EngineBuilder, MonthKey};
    pub use forecast_core::{forecast, ForecastEngine, InMemoryForecastCache};
    pub use forecast_spi::{
        EngineConfig, ForecastError, ForecastMethod, ForecastResult, IntervalWidening,
        MonthlyObservation, NumericWarning, Result,
    };
}
