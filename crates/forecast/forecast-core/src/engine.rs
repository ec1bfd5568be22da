//! Forecast orchestration
//!
//! Routes a monthly series to one of two strategies by history length:
//!
//! - `len >= seasonal_threshold`: additive decomposition, recency-weighted
//!   trend extrapolation, seasonal re-application, residual-based band.
//! - shorter: Holt's linear smoothing with a band from one-step residuals.
//!
//! The engine holds no mutable state of its own; identical input always
//! yields bit-identical output. An injected cache only short-circuits that
//! computation.

use crate::confidence::ResidualIntervalComputer;
use crate::decomposition::AdditiveDecomposer;
use crate::seasonality::apply_seasonality;
use crate::smoothing::HoltSmoother;
use crate::stats::{mean, r_squared, seasonal_strength, std_dev};
use crate::trend::WeightedTrendEstimator;
use forecast_spi::{
    CacheKey, ConfidenceBand, ConfidenceInterval, ConfidenceIntervalComputer, Decomposer,
    EngineConfig, FallbackForecaster, ForecastCache, ForecastError, ForecastMetadata,
    ForecastMethod, ForecastResult, MonthlyObservation, NumericWarning, Result, TrendEstimator,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Forecast a monthly series with the default configuration
pub fn forecast(series: &[MonthlyObservation], horizon: usize) -> Result<ForecastResult> {
    ForecastEngine::default().forecast(series, horizon)
}

/// Monthly forecasting engine
pub struct ForecastEngine {
    config: EngineConfig,
    decomposer: Box<dyn Decomposer>,
    trend_estimator: Box<dyn TrendEstimator>,
    interval_computer: Box<dyn ConfidenceIntervalComputer>,
    fallback: Box<dyn FallbackForecaster>,
    cache: Option<Arc<dyn ForecastCache>>,
}

impl ForecastEngine {
    /// Create an engine with the built-in strategies
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let smoother = HoltSmoother::new(config.alpha, config.beta)?;
        Ok(Self::assemble(config, smoother))
    }

    fn assemble(config: EngineConfig, smoother: HoltSmoother) -> Self {
        Self {
            decomposer: Box::new(AdditiveDecomposer::new()),
            trend_estimator: Box::new(WeightedTrendEstimator::new(
                config.trend_window,
                config.recency_decay,
            )),
            interval_computer: Box::new(ResidualIntervalComputer::new(
                config.confidence.widening,
            )),
            fallback: Box::new(smoother),
            cache: None,
            config,
        }
    }

    /// Attach a result cache
    pub fn with_cache(mut self, cache: Arc<dyn ForecastCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_decomposer(mut self, decomposer: Box<dyn Decomposer>) -> Self {
        self.decomposer = decomposer;
        self
    }

    pub fn with_trend_estimator(mut self, estimator: Box<dyn TrendEstimator>) -> Self {
        self.trend_estimator = estimator;
        self
    }

    pub fn with_interval_computer(mut self, computer: Box<dyn ConfidenceIntervalComputer>) -> Self {
        self.interval_computer = computer;
        self
    }

    pub fn with_fallback(mut self, fallback: Box<dyn FallbackForecaster>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Strategy a series of `len` months would be routed to
    pub fn method_for(&self, len: usize) -> ForecastMethod {
        if len < self.config.seasonal_threshold {
            ForecastMethod::ExponentialSmoothing
        } else {
            ForecastMethod::SeasonalDecomposition
        }
    }

    /// Forecast `horizon` months after a chronologically sorted series
    pub fn forecast(
        &self,
        series: &[MonthlyObservation],
        horizon: usize,
    ) -> Result<ForecastResult> {
        let values: Vec<f64> = series.iter().map(|obs| obs.value).collect();
        self.forecast_values(&values, horizon)
    }

    /// Forecast from bare monthly values
    pub fn forecast_values(&self, values: &[f64], horizon: usize) -> Result<ForecastResult> {
        validate_input(values, horizon, self.config.max_horizon)?;

        let key = self
            .cache
            .as_ref()
            .map(|_| CacheKey::new(values, horizon, &self.config));
        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(hit) = cache.get(key) {
                debug!(points = values.len(), horizon, "forecast cache hit");
                return Ok(hit);
            }
        }

        let method = self.method_for(values.len());
        debug!(
            points = values.len(),
            horizon,
            threshold = self.config.seasonal_threshold,
            %method,
            "routing forecast"
        );

        let result = match method {
            ForecastMethod::SeasonalDecomposition => self.seasonal_forecast(values, horizon),
            ForecastMethod::ExponentialSmoothing => self.smoothing_forecast(values, horizon),
        };

        for warning in &result.metadata.warnings {
            warn!(?warning, %method, points = values.len(), "numeric degeneracy");
        }

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.put(key, result.clone());
        }
        Ok(result)
    }

    fn seasonal_forecast(&self, values: &[f64], horizon: usize) -> ForecastResult {
        let period = self.config.period;
        let decomposition = self.decomposer.decompose(values, period);
        let mut trend_fit = self.trend_estimator.fit_trend(&decomposition.trend, horizon);
        let overflowed = saturate(&mut trend_fit.forecast);
        let forecasted =
            apply_seasonality(&trend_fit.forecast, &decomposition.seasonal, values.len());

        let interval = self.interval_computer.compute(
            &forecasted,
            &decomposition.residual,
            self.config.confidence.level,
        );

        let mut warnings = Vec::new();
        if trend_fit.degenerate {
            warnings.push(NumericWarning::SingularRegression);
        }
        if interval.residual_std_dev == 0.0 {
            warnings.push(NumericWarning::ZeroVariance);
        }
        if overflowed {
            warnings.push(NumericWarning::Overflow);
        }

        let seasonal = decomposition.seasonal_series();
        let metadata = ForecastMetadata {
            trend_slope: trend_fit.slope,
            seasonal_strength: seasonal_strength(&seasonal, &decomposition.residual),
            volatility: interval.residual_std_dev,
            r2: Some(r_squared(values, &decomposition.fitted())),
            historical_mean: mean(values),
            historical_std: std_dev(values),
            data_points: values.len(),
            horizon,
            period: Some(period),
            warnings,
        };

        package(
            forecasted,
            interval,
            ForecastMethod::SeasonalDecomposition,
            metadata,
        )
    }

    fn smoothing_forecast(&self, values: &[f64], horizon: usize) -> ForecastResult {
        debug!(fallback = self.fallback.name(), points = values.len(), "smoothing short history");
        let smoothed = self.fallback.smooth(values, horizon);
        let interval = self.interval_computer.compute(
            &smoothed.forecast,
            &smoothed.residuals,
            self.config.confidence.level,
        );

        let mut warnings = Vec::new();
        if values.len() == 1 {
            warnings.push(NumericWarning::SingleObservation);
        }
        if interval.residual_std_dev == 0.0 {
            warnings.push(NumericWarning::ZeroVariance);
        }
        if !(smoothed.level.is_finite() && smoothed.trend.is_finite()) {
            warnings.push(NumericWarning::Overflow);
        }

        let metadata = ForecastMetadata {
            trend_slope: smoothed.trend,
            seasonal_strength: 0.0,
            volatility: interval.residual_std_dev,
            r2: None,
            historical_mean: mean(values),
            historical_std: std_dev(values),
            data_points: values.len(),
            horizon,
            period: None,
            warnings,
        };

        package(
            smoothed.forecast,
            interval,
            ForecastMethod::ExponentialSmoothing,
            metadata,
        )
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::assemble(EngineConfig::default(), HoltSmoother::default())
    }
}

fn validate_input(values: &[f64], horizon: usize, max_horizon: usize) -> Result<()> {
    if values.is_empty() {
        return Err(ForecastError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if horizon == 0 {
        return Err(ForecastError::invalid_parameter(
            "horizon",
            "must be at least 1",
        ));
    }
    if horizon > max_horizon {
        return Err(ForecastError::invalid_parameter(
            "horizon",
            format!("must be at most {}, got {}", max_horizon, horizon),
        ));
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ForecastError::NonFiniteValue { index, value });
    }
    Ok(())
}

fn package(
    mut forecasted: Vec<f64>,
    interval: ConfidenceInterval,
    method: ForecastMethod,
    mut metadata: ForecastMetadata,
) -> ForecastResult {
    let mut lower = interval.lower;
    let mut upper = interval.upper;

    let mut clipped = saturate(&mut forecasted) | saturate(&mut lower) | saturate(&mut upper);
    let scalars = [
        &mut metadata.trend_slope,
        &mut metadata.volatility,
        &mut metadata.historical_mean,
        &mut metadata.historical_std,
    ];
    for value in scalars.into_iter().chain(metadata.r2.as_mut()) {
        clipped |= saturate(std::slice::from_mut(value));
    }

    if clipped {
        for ((f, lo), hi) in forecasted.iter().zip(lower.iter_mut()).zip(upper.iter_mut()) {
            *lo = lo.min(*f);
            *hi = hi.max(*f);
        }
        if !metadata.warnings.contains(&NumericWarning::Overflow) {
            metadata.warnings.push(NumericWarning::Overflow);
        }
    }

    ForecastResult {
        forecasted,
        confidence: ConfidenceBand { lower, upper },
        method,
        metadata,
    }
}

/// Replace values outside the f64 range: `±inf` saturates to `±f64::MAX`,
/// `NaN` becomes 0. Returns whether anything changed.
fn saturate(values: &mut [f64]) -> bool {
    let mut changed = false;
    for v in values.iter_mut().filter(|v| !v.is_finite()) {
        *v = if v.is_nan() { 0.0 } else { f64::MAX.copysign(*v) };
        changed = true;
    }
    changed
}
