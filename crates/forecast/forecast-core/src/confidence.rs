//! Confidence interval implementations
//!
//! Bands are `forecast ± z·se` with `se` taken from the population standard
//! deviation of a residual sample. The lower bound is clamped at zero.
//!
//! With [`IntervalWidening::Fixed`] every step gets the same `se`, which
//! treats residuals as homoscedastic and ignores compounding uncertainty.
//! [`IntervalWidening::SqrtHorizon`] scales `se` by `sqrt(h)` instead.

use crate::stats::std_dev;
use forecast_spi::{ConfidenceInterval, ConfidenceIntervalComputer, IntervalWidening};
use serde::{Deserialize, Serialize};

/// Forecast with confidence intervals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastWithConfidence {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

impl ForecastWithConfidence {
    /// Create from point forecast and per-step standard errors
    pub fn from_standard_errors(
        forecast: Vec<f64>,
        std_errors: &[f64],
        confidence_level: f64,
    ) -> Self {
        let z = z_score(confidence_level);

        let lower = forecast
            .iter()
            .zip(std_errors.iter())
            .map(|(&f, &se)| (f - z * se).max(0.0))
            .collect();

        let upper = forecast
            .iter()
            .zip(std_errors.iter())
            .map(|(&f, &se)| f + z * se)
            .collect();

        Self {
            forecast,
            lower,
            upper,
            confidence_level,
        }
    }

    /// Create confidence intervals based on historical residuals
    pub fn from_residuals(
        forecast: Vec<f64>,
        residuals: &[f64],
        confidence_level: f64,
        widening: IntervalWidening,
    ) -> Self {
        let std_errors = standard_errors(std_dev(residuals), forecast.len(), widening);
        Self::from_standard_errors(forecast, &std_errors, confidence_level)
    }
}

/// Per-step standard errors for a horizon of `steps`
pub fn standard_errors(std_dev: f64, steps: usize, widening: IntervalWidening) -> Vec<f64> {
    (0..steps)
        .map(|h| match widening {
            IntervalWidening::Fixed => std_dev,
            IntervalWidening::SqrtHorizon => std_dev * ((h + 1) as f64).sqrt(),
        })
        .collect()
}

/// Residual-based confidence interval computer
#[derive(Debug, Clone, Default)]
pub struct ResidualIntervalComputer {
    widening: IntervalWidening,
}

impl ResidualIntervalComputer {
    pub fn new(widening: IntervalWidening) -> Self {
        Self { widening }
    }

    pub fn widening(&self) -> IntervalWidening {
        self.widening
    }
}

impl ConfidenceIntervalComputer for ResidualIntervalComputer {
    fn compute(
        &self,
        forecast: &[f64],
        residuals: &[f64],
        confidence_level: f64,
    ) -> ConfidenceInterval {
        let sd = std_dev(residuals);
        let result = ForecastWithConfidence::from_residuals(
            forecast.to_vec(),
            residuals,
            confidence_level,
            self.widening,
        );
        ConfidenceInterval {
            forecast: result.forecast,
            lower: result.lower,
            upper: result.upper,
            confidence_level: result.confidence_level,
            residual_std_dev: sd,
        }
    }
}

/// Get z-score for a given confidence level
pub fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96, // default to 95%
    }
}
