//! Descriptive statistics and least-squares helpers

/// Relative size below which a regression denominator counts as zero
const SINGULAR_EPSILON: f64 = 1e-12;

/// Arithmetic mean, 0 for an empty slice
///
/// Falls back to summing `x / n` when the plain sum leaves the f64 range.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let total: f64 = data.iter().sum();
    if total.is_finite() {
        return total / n;
    }
    data.iter().map(|x| x / n).sum()
}

/// Population variance (divides by N), 0 for an empty slice
///
/// Squared deviations are rescaled by `max |x|` when they overflow. The
/// result itself can still be `inf` when the true variance exceeds `f64::MAX`;
/// [`std_dev`] stays finite in that case.
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let plain = mean_squared_deviation(data);
    if plain.is_finite() {
        return plain;
    }
    let scale = max_abs(data);
    scaled_variance(data, scale) * scale * scale
}

/// Population standard deviation
pub fn std_dev(data: &[f64]) -> f64 {
    let v = variance(data);
    if v.is_finite() {
        return v.sqrt();
    }
    let scale = max_abs(data);
    scaled_variance(data, scale).sqrt() * scale
}

/// Largest magnitude in `data`
pub fn max_abs(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
}

fn mean_squared_deviation(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}

fn scaled_variance(data: &[f64], scale: f64) -> f64 {
    let scaled: Vec<f64> = data.iter().map(|x| x / scale).collect();
    mean_squared_deviation(&scaled)
}

/// Straight line fitted by (weighted) least squares
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Denominator was ~0; slope forced to zero and intercept is the weighted mean
    pub degenerate: bool,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Weighted least-squares line through `(xs[i], ys[i])` with weights `ws[i]`
///
/// Uses the weighted normal equations
/// `slope = (ΣW·ΣXY − ΣX·ΣY) / (ΣW·ΣX² − (ΣX)²)` and
/// `intercept = (ΣY − slope·ΣX) / ΣW`, where every sum is weighted. When the
/// sums overflow, `ys` is divided by its largest magnitude and the
/// coefficients are scaled back.
pub fn weighted_linear_fit(xs: &[f64], ys: &[f64], ws: &[f64]) -> LinearFit {
    let fit = normal_equations(xs, ys, ws);
    if fit.slope.is_finite() && fit.intercept.is_finite() {
        return fit;
    }

    let scale = max_abs(ys);
    let scaled: Vec<f64> = ys.iter().map(|y| y / scale).collect();
    let fit = normal_equations(xs, &scaled, ws);
    LinearFit {
        slope: fit.slope * scale,
        intercept: fit.intercept * scale,
        degenerate: fit.degenerate,
    }
}

fn normal_equations(xs: &[f64], ys: &[f64], ws: &[f64]) -> LinearFit {
    let (mut sw, mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for ((&x, &y), &w) in xs.iter().zip(ys).zip(ws) {
        sw += w;
        sx += w * x;
        sy += w * y;
        sxx += w * x * x;
        sxy += w * x * y;
    }

    if sw <= 0.0 {
        return LinearFit {
            slope: 0.0,
            intercept: 0.0,
            degenerate: true,
        };
    }

    let denominator = sw * sxx - sx * sx;
    if denominator.abs() <= SINGULAR_EPSILON * (sw * sxx).abs().max(1.0) {
        return LinearFit {
            slope: 0.0,
            intercept: sy / sw,
            degenerate: true,
        };
    }

    let slope = (sw * sxy - sx * sy) / denominator;
    LinearFit {
        slope,
        intercept: (sy - slope * sx) / sw,
        degenerate: false,
    }
}

/// Ordinary least squares, all weights equal
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> LinearFit {
    let ws = vec![1.0; xs.len().min(ys.len())];
    weighted_linear_fit(xs, ys, &ws)
}

/// Coefficient of determination `1 − SSres/SStot`
///
/// A flat history is explained perfectly when the fit is exact and not at
/// all otherwise.
pub fn r_squared(actual: &[f64], fitted: &[f64]) -> f64 {
    let (mut ss_tot, mut ss_res) = sums_of_squares(actual, fitted, 1.0);
    if !(ss_tot.is_finite() && ss_res.is_finite()) {
        let scale = max_abs(actual).max(max_abs(fitted));
        (ss_tot, ss_res) = sums_of_squares(actual, fitted, scale);
    }

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

fn sums_of_squares(actual: &[f64], fitted: &[f64], scale: f64) -> (f64, f64) {
    let m = mean(actual) / scale;
    let ss_tot = actual.iter().map(|y| (y / scale - m).powi(2)).sum();
    let ss_res = actual
        .iter()
        .zip(fitted)
        .map(|(y, f)| (y / scale - f / scale).powi(2))
        .sum();
    (ss_tot, ss_res)
}

/// Strength of seasonality `max(0, 1 − Var(R) / Var(S + R))`
pub fn seasonal_strength(seasonal: &[f64], residual: &[f64]) -> f64 {
    let detrended: Vec<f64> = seasonal.iter().zip(residual).map(|(s, r)| s + r).collect();
    let total = std_dev(&detrended);
    if total == 0.0 {
        return 0.0;
    }
    let ratio = std_dev(residual) / total;
    (1.0 - ratio * ratio).clamp(0.0, 1.0)
}
