//! Trend extrapolation
//!
//! Fits a line to the most recent trend points with exponential recency
//! weighting: in a window of `w` points, point `j` gets weight
//! `decay^(w - 1 - j)`, so the newest point weighs 1. The line is then
//! extended strictly past the window.

use crate::stats::weighted_linear_fit;
use forecast_spi::{TrendEstimator, TrendFit};

/// Recency-weighted least-squares trend estimator
#[derive(Debug, Clone)]
pub struct WeightedTrendEstimator {
    window: usize,
    decay: f64,
}

impl WeightedTrendEstimator {
    pub fn new(window: usize, decay: f64) -> Self {
        Self { window, decay }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }
}

impl Default for WeightedTrendEstimator {
    fn default() -> Self {
        Self::new(12, 0.9)
    }
}

impl TrendEstimator for WeightedTrendEstimator {
    fn fit_trend(&self, trend: &[f64], steps: usize) -> TrendFit {
        forecast_trend(trend, steps, self.window, self.decay)
    }
}

/// Extrapolate `steps` values past the last `window` points of `trend`
pub fn forecast_trend(trend: &[f64], steps: usize, window: usize, decay: f64) -> TrendFit {
    let start = trend.len().saturating_sub(window.max(1));
    let recent = &trend[start..];
    let w = recent.len();

    let xs: Vec<f64> = (0..w).map(|j| j as f64).collect();
    let ws = recency_weights(w, decay);
    let fit = weighted_linear_fit(&xs, recent, &ws);

    let forecast = (0..steps).map(|i| fit.at((w + i) as f64)).collect();

    TrendFit {
        slope: fit.slope,
        intercept: fit.intercept,
        forecast,
        degenerate: fit.degenerate,
    }
}

/// Exponentially decaying weights, oldest first, newest = 1
pub fn recency_weights(len: usize, decay: f64) -> Vec<f64> {
    (0..len)
        .map(|j| decay.powi((len - 1 - j) as i32))
        .collect()
}
