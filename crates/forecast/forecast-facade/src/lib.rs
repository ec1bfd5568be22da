//! Forecast Facade
//!
//! High-level API for monthly sustainability-metric forecasting. Re-exports
//! all public types from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{
    cache, confidence, decomposition, engine, seasonality, smoothing, stats, trend,
};

// Re-export engine entry points at root
pub use forecast_core::engine::{forecast, ForecastEngine};

// Re-export SPI traits
pub use forecast_spi::{
    ConfidenceIntervalComputer, Decomposer, FallbackForecaster, ForecastCache, TrendEstimator,
};
