//! Forecast result model
//!
//! The JSON shape matches what dashboard widgets consume:
//! `{ forecasted, confidence: { lower, upper }, method, metadata }`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy that produced a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForecastMethod {
    /// Trend + seasonal decomposition with weighted trend extrapolation
    SeasonalDecomposition,
    /// Holt's linear exponential smoothing for short histories
    ExponentialSmoothing,
}

impl ForecastMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SeasonalDecomposition => "seasonal-decomposition",
            Self::ExponentialSmoothing => "exponential-smoothing",
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-fatal numeric conditions met while forecasting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericWarning {
    /// Regression denominator was ~0; slope forced to zero
    SingularRegression,
    /// Residual variance was zero; band collapsed onto the forecast
    ZeroVariance,
    /// Only one observation; trend seeded at zero
    SingleObservation,
    /// An intermediate left the f64 range; affected outputs were saturated
    Overflow,
}

/// Symmetric band around the point forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Descriptive statistics that accompany a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetadata {
    /// Monthly change of the extrapolated trend
    pub trend_slope: f64,
    /// Share of detrended variance explained by seasonality, in `[0, 1]`
    pub seasonal_strength: f64,
    /// Residual standard deviation
    pub volatility: f64,
    /// Goodness of fit of trend + seasonal against history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r2: Option<f64>,
    pub historical_mean: f64,
    pub historical_std: f64,
    pub data_points: usize,
    pub horizon: usize,
    /// Seasonal cycle length, when decomposition was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<NumericWarning>,
}

/// Complete forecast returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecasted: Vec<f64>,
    pub confidence: ConfidenceBand,
    pub method: ForecastMethod,
    pub metadata: ForecastMetadata,
}

impl ForecastResult {
    /// Number of forecast steps
    pub fn horizon(&self) -> usize {
        self.forecasted.len()
    }

    pub fn has_warning(&self, warning: NumericWarning) -> bool {
        self.metadata.warnings.contains(&warning)
    }
}
