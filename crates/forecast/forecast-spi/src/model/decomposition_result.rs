//! Decomposition result model

/// Result of additive time series decomposition
///
/// `trend` and `residual` are aligned index-for-index with the input series.
/// `seasonal` holds one mean-centred offset per position in the cycle, so the
/// series is reconstructed as `trend[i] + seasonal[i % period] + residual[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionResult {
    /// Trend component
    pub trend: Vec<f64>,
    /// Seasonal offsets, one per cycle position
    pub seasonal: Vec<f64>,
    /// Residual component
    pub residual: Vec<f64>,
}

impl DecompositionResult {
    /// Length of the seasonal cycle
    pub fn period(&self) -> usize {
        self.seasonal.len()
    }

    /// Seasonal offset for series index `i`, continuing the cycle past the end
    pub fn seasonal_at(&self, i: usize) -> f64 {
        if self.seasonal.is_empty() {
            0.0
        } else {
            self.seasonal[i % self.seasonal.len()]
        }
    }

    /// Seasonal component expanded to series length
    pub fn seasonal_series(&self) -> Vec<f64> {
        (0..self.trend.len()).map(|i| self.seasonal_at(i)).collect()
    }

    /// In-sample model values, `trend + seasonal`
    pub fn fitted(&self) -> Vec<f64> {
        self.trend
            .iter()
            .enumerate()
            .map(|(i, t)| t + self.seasonal_at(i))
            .collect()
    }
}
