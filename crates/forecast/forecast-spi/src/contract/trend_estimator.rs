//! Trait for trend extrapolation

use crate::model::TrendFit;

/// Fits a trend component and extends it past the observed range
pub trait TrendEstimator: Send + Sync {
    /// Extrapolate `steps` values beyond the end of `trend`
    fn fit_trend(&self, trend: &[f64], steps: usize) -> TrendFit;
}
