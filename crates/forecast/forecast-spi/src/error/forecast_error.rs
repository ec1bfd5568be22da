//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations
///
/// Only unusable input is an error. Numeric degeneracy (flat regressions,
/// zero residual variance) is reported through
/// [`NumericWarning`](crate::NumericWarning) in the result metadata instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Input series contains NaN or an infinity
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Invalid period for seasonality
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Month key not in `YYYY-MM` form
    #[error("Invalid period key: {0}")]
    InvalidPeriodKey(String),
}

impl ForecastError {
    /// Shorthand for [`ForecastError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
