//! Time series decomposition
//!
//! Additive decomposition `Y = T + S + R` of a monthly series:
//!
//! - **Trend**: centred moving average over one full cycle. Even periods use
//!   the classic 2×m average (`period + 1` points, half weight at both ends)
//!   so the window stays centred; odd periods use a plain symmetric window.
//!   The first and last `period / 2` points have no full window and are
//!   filled from a least-squares line through the interior trend.
//! - **Seasonal**: detrended values averaged per cycle position, then
//!   re-centred so the offsets have zero mean.
//! - **Residual**: whatever remains, so the identity holds exactly.

use crate::stats::{linear_fit, mean};
use forecast_spi::{DecompositionResult, Decomposer};

/// Additive decomposition: Y = T + S + R
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdditiveDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(&self, data: &[f64], period: usize) -> DecompositionResult {
        decompose_additive(data, period)
    }
}

/// Perform additive decomposition
///
/// Never fails: short or degenerate input yields best-effort components of
/// the right length with no NaN in them.
pub fn decompose_additive(data: &[f64], period: usize) -> DecompositionResult {
    if period == 0 {
        return DecompositionResult {
            trend: data.to_vec(),
            seasonal: Vec::new(),
            residual: vec![0.0; data.len()],
        };
    }

    let trend = centered_trend(data, period);
    let detrended: Vec<f64> = data.iter().zip(&trend).map(|(d, t)| d - t).collect();
    let seasonal = seasonal_offsets(&detrended, period);

    let residual = data
        .iter()
        .zip(&trend)
        .enumerate()
        .map(|(i, (d, t))| d - t - seasonal[i % period])
        .collect();

    DecompositionResult {
        trend,
        seasonal,
        residual,
    }
}

/// Centred moving average with regression-filled edges
pub fn centered_trend(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    let half = period / 2;
    let mut trend = vec![0.0; n];

    // Interior points with a full window: half..n-half
    let interior = if n > 2 * half { half..n - half } else { 0..0 };
    for i in interior.clone() {
        trend[i] = window_average(&data[i - half..=i + half], period);
    }

    match interior.len() {
        0 => trend.fill(mean(data)),
        1 => {
            let value = trend[interior.start];
            trend.fill(value);
        }
        _ => {
            let xs: Vec<f64> = interior.clone().map(|i| i as f64).collect();
            let fit = linear_fit(&xs, &trend[interior.clone()]);
            for i in (0..interior.start).chain(interior.end..n) {
                trend[i] = fit.at(i as f64);
            }
        }
    }

    trend
}

/// One centred moving-average value; half weights at both ends for even periods
fn window_average(window: &[f64], period: usize) -> f64 {
    let weighted_sum = |scale: f64| -> f64 {
        if period % 2 == 0 {
            let inner: f64 = window[1..period].iter().map(|v| v / scale).sum();
            inner + 0.5 * (window[0] / scale + window[period] / scale)
        } else {
            window.iter().map(|v| v / scale).sum()
        }
    };

    let p = period as f64;
    let plain = weighted_sum(1.0) / p;
    if plain.is_finite() {
        return plain;
    }
    // Sum overflowed: divide each term first
    weighted_sum(p)
}

/// Mean-centred per-position averages of a detrended series
pub fn seasonal_offsets(detrended: &[f64], period: usize) -> Vec<f64> {
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, &v) in detrended.iter().enumerate() {
        sums[i % period] += v;
        counts[i % period] += 1;
    }

    let mut averages: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(&s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
        .collect();

    if averages.iter().any(|a| !a.is_finite()) {
        averages = vec![0.0; period];
        for (i, &v) in detrended.iter().enumerate() {
            averages[i % period] += v / counts[i % period] as f64;
        }
    }

    let grand_mean = mean(&averages);
    averages.iter().map(|a| a - grand_mean).collect()
}
