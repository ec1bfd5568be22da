//! Trend extrapolation model

/// Weighted linear fit of a trend component and its extrapolation
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit {
    /// Change per month
    pub slope: f64,
    /// Fitted value at the first point of the regression window
    pub intercept: f64,
    /// Extrapolated trend values, one per forecast step
    pub forecast: Vec<f64>,
    /// Regression denominator was ~0 and the slope was forced to zero
    pub degenerate: bool,
}
