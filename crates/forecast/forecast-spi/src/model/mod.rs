//! Model module containing data structures

mod cache_key;
mod confidence_interval;
mod decomposition_result;
mod engine_config;
mod forecast_result;
mod observation;
mod smoothed_forecast;
mod trend_fit;

pub use cache_key::CacheKey;
pub use confidence_interval::ConfidenceInterval;
pub use decomposition_result::DecompositionResult;
pub use engine_config::{ConfidenceConfig, EngineConfig, IntervalWidening};
pub use forecast_result::{
    ConfidenceBand, ForecastMetadata, ForecastMethod, ForecastResult, NumericWarning,
};
pub use observation::MonthlyObservation;
pub use smoothed_forecast::SmoothedForecast;
pub use trend_fit::TrendFit;
