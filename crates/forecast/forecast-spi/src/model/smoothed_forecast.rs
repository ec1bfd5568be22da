//! Exponential smoothing output model

/// Output of a [`FallbackForecaster`](crate::FallbackForecaster)
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedForecast {
    /// Point forecasts, floored at zero
    pub forecast: Vec<f64>,
    /// One-step-ahead residuals used as the variance sample
    pub residuals: Vec<f64>,
    /// Final smoothed level
    pub level: f64,
    /// Final smoothed trend (change per month)
    pub trend: f64,
}
