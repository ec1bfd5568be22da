//! Holt's linear exponential smoothing
//!
//! Level + trend, no seasonality. Used for histories too short to decompose.
//!
//! ```text
//! Level:    L_t = α·y_t + (1 − α)(L_{t−1} + T_{t−1})
//! Trend:    T_t = β(L_t − L_{t−1}) + (1 − β)T_{t−1}
//! Forecast: F_{n+h} = max(0, L_n + h·T_n)
//! ```
//!
//! Seeds are `L = y_0` and `T = y_1 − y_0` (0 for a single observation).

use forecast_spi::{FallbackForecaster, ForecastError, Result, SmoothedForecast};
use serde::{Deserialize, Serialize};

/// Default level smoothing constant
pub const DEFAULT_ALPHA: f64 = 0.3;
/// Default trend smoothing constant
pub const DEFAULT_BETA: f64 = 0.1;

/// Holt's linear trend smoother
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoltSmoother {
    /// Level smoothing parameter
    alpha: f64,
    /// Trend smoothing parameter
    beta: f64,
}

impl HoltSmoother {
    /// Create a new Holt smoother
    ///
    /// # Arguments
    ///
    /// * `alpha` - Level smoothing (0 < alpha < 1)
    /// * `beta` - Trend smoothing (0 < beta < 1)
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !(0.0 < alpha && alpha < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "alpha",
                "must be between 0 and 1 (exclusive)",
            ));
        }
        if !(0.0 < beta && beta < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "beta",
                "must be between 0 and 1 (exclusive)",
            ));
        }
        Ok(Self { alpha, beta })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Default for HoltSmoother {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
        }
    }
}

impl FallbackForecaster for HoltSmoother {
    fn smooth(&self, data: &[f64], steps: usize) -> SmoothedForecast {
        holt_linear(data, steps, self.alpha, self.beta)
    }

    fn name(&self) -> &str {
        "holt-linear"
    }
}

/// Run Holt's method over `data` and forecast `steps` months
///
/// Residuals are one-step-ahead errors `y_t − (y_{t−1} + T)` where `T` is the
/// trend before the update at `t`.
pub fn holt_linear(data: &[f64], steps: usize, alpha: f64, beta: f64) -> SmoothedForecast {
    let Some(&first) = data.first() else {
        return SmoothedForecast {
            forecast: vec![0.0; steps],
            residuals: Vec::new(),
            level: 0.0,
            trend: 0.0,
        };
    };

    let mut level = first;
    let mut trend = data.get(1).map_or(0.0, |&second| second - first);
    let mut residuals = Vec::with_capacity(data.len().saturating_sub(1));

    for pair in data.windows(2) {
        let (previous, value) = (pair[0], pair[1]);
        residuals.push(value - (previous + trend));

        let prev_level = level;
        level = alpha * value + (1.0 - alpha) * (level + trend);
        trend = beta * (level - prev_level) + (1.0 - beta) * trend;
    }

    let forecast = (1..=steps)
        .map(|h| (level + h as f64 * trend).max(0.0))
        .collect();

    SmoothedForecast {
        forecast,
        residuals,
        level,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_computed_states() {
        let result = holt_linear(&[50.0, 55.0, 52.0, 58.0, 60.0], 2, 0.3, 0.1);

        assert!((result.level - 63.97684).abs() < 1e-9);
        assert!((result.trend - 4.458764).abs() < 1e-9);
        assert!((result.forecast[0] - (63.97684 + 4.458764)).abs() < 1e-9);
        assert!((result.forecast[1] - (63.97684 + 2.0 * 4.458764)).abs() < 1e-9);
        assert_eq!(result.residuals.len(), 4);
        // y_1 - (y_0 + 5)
        assert!(result.residuals[0].abs() < 1e-12);
    }

    #[test]
    fn test_linear_data_is_tracked() {
        let data: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let result = holt_linear(&data, 3, 0.3, 0.1);

        assert!((result.trend - 2.0).abs() < 1e-9);
        assert!((result.forecast[0] - 30.0).abs() < 1e-9);
        assert!(result.residuals.iter().all(|r| r.abs() < 1e-9));
    }

    #[test]
    fn test_single_observation() {
        let result = holt_linear(&[42.0], 3, 0.3, 0.1);
        assert_eq!(result.trend, 0.0);
        assert_eq!(result.forecast, vec![42.0, 42.0, 42.0]);
        assert!(result.residuals.is_empty());
    }

    #[test]
    fn test_declining_series_floors_at_zero() {
        let result = holt_linear(&[30.0, 20.0, 10.0], 5, 0.3, 0.1);
        assert!(result.trend < 0.0);
        assert!(result.forecast.iter().all(|&f| f >= 0.0));
        assert_eq!(*result.forecast.last().unwrap(), 0.0);
    }

    #[test]
    fn test_empty_input() {
        let result = holt_linear(&[], 2, 0.3, 0.1);
        assert_eq!(result.forecast, vec![0.0, 0.0]);
    }

    #[test]
    fn test_parameter_validation() {
        assert!(HoltSmoother::new(0.3, 0.1).is_ok());
        assert!(HoltSmoother::new(0.0, 0.1).is_err());
        assert!(HoltSmoother::new(0.3, 1.0).is_err());

        let smoother = HoltSmoother::default();
        assert_eq!(smoother.alpha(), DEFAULT_ALPHA);
        assert_eq!(smoother.beta(), DEFAULT_BETA);
        assert_eq!(smoother.name(), "holt-linear");
    }
}
