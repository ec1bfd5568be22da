//! Confidence interval model

/// Interval produced by a [`ConfidenceIntervalComputer`](crate::ConfidenceIntervalComputer)
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceInterval {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Standard deviation of the residual sample the band was derived from
    pub residual_std_dev: f64,
}

impl ConfidenceInterval {
    /// Number of forecast steps covered
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Band width at step `i`
    pub fn width(&self, i: usize) -> f64 {
        self.upper[i] - self.lower[i]
    }

    /// Whether every point forecast lies inside its band
    pub fn contains_forecast(&self) -> bool {
        self.forecast
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(f, (l, u))| l <= f && f <= u)
    }
}
