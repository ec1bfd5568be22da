//! Seasonal re-application
//!
//! Continues the seasonal cycle from where the history stopped and adds it
//! onto an extrapolated trend.

/// Add seasonal offsets to a trend forecast and floor at zero
///
/// Step `i` uses `seasonal[(series_len + i) % period]`. Negative quantities of
/// energy, water, waste or emissions are meaningless, so they clamp to 0.
pub fn apply_seasonality(trend_forecast: &[f64], seasonal: &[f64], series_len: usize) -> Vec<f64> {
    let period = seasonal.len();
    trend_forecast
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let offset = if period == 0 {
                0.0
            } else {
                seasonal[(series_len + i) % period]
            };
            (t + offset).max(0.0)
        })
        .collect()
}

/// Seasonal offset per cycle position expanded to `len` points
pub fn expand_seasonal(seasonal: &[f64], len: usize) -> Vec<f64> {
    if seasonal.is_empty() {
        return vec![0.0; len];
    }
    (0..len).map(|i| seasonal[i % seasonal.len()]).collect()
}
