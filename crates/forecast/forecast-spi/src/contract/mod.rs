//! Contract module containing trait definitions for forecast operations

mod confidence_interval_computer;
mod decomposer;
mod fallback_forecaster;
mod forecast_cache;
mod trend_estimator;

pub use confidence_interval_computer::ConfidenceIntervalComputer;
pub use decomposer::Decomposer;
pub use fallback_forecaster::FallbackForecaster;
pub use forecast_cache::ForecastCache;
pub use trend_estimator::TrendEstimator;
