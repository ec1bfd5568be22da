//! Trait for the short-history forecasting path

use crate::model::SmoothedForecast;

/// Forecaster used when history is too short to decompose
pub trait FallbackForecaster: Send + Sync {
    /// Forecast `steps` values after `data`
    fn smooth(&self, data: &[f64], steps: usize) -> SmoothedForecast;

    /// Name of this method
    fn name(&self) -> &str;
}
