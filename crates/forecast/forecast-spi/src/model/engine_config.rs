//! Engine configuration model

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// How the confidence band evolves over the forecast horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntervalWidening {
    /// Same width at every step
    #[default]
    Fixed,
    /// Standard error grows with `sqrt(h)` for step `h`
    SqrtHorizon,
}

/// Configuration for confidence bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Confidence level (e.g., 0.95 for 95%)
    pub level: f64,
    pub widening: IntervalWidening,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            level: 0.95,
            widening: IntervalWidening::Fixed,
        }
    }
}

/// Parameters of the forecasting engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seasonal cycle length in months
    pub period: usize,
    /// Minimum history length routed to seasonal decomposition
    pub seasonal_threshold: usize,
    /// Number of most recent trend points used for extrapolation
    pub trend_window: usize,
    /// Per-step recency weight decay for the trend regression
    pub recency_decay: f64,
    /// Largest accepted forecast horizon in months
    pub max_horizon: usize,
    /// Holt level smoothing
    pub alpha: f64,
    /// Holt trend smoothing
    pub beta: f64,
    pub confidence: ConfidenceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            period: 12,
            seasonal_threshold: 24,
            trend_window: 12,
            recency_decay: 0.9,
            max_horizon: 120,
            alpha: 0.3,
            beta: 0.1,
            confidence: ConfidenceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Check every parameter is in range
    pub fn validate(&self) -> Result<()> {
        if self.period < 2 {
            return Err(ForecastError::InvalidPeriod(format!(
                "period must be at least 2, got {}",
                self.period
            )));
        }
        if self.seasonal_threshold < 2 {
            return Err(ForecastError::invalid_parameter(
                "seasonal_threshold",
                "must be at least 2",
            ));
        }
        if self.trend_window < 2 {
            return Err(ForecastError::invalid_parameter(
                "trend_window",
                "must be at least 2",
            ));
        }
        if !(self.recency_decay > 0.0 && self.recency_decay <= 1.0) {
            return Err(ForecastError::invalid_parameter(
                "recency_decay",
                "must be in (0, 1]",
            ));
        }
        if self.max_horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "max_horizon",
                "must be at least 1",
            ));
        }
        check_open_unit("alpha", self.alpha)?;
        check_open_unit("beta", self.beta)?;
        check_open_unit("confidence.level", self.confidence.level)?;
        Ok(())
    }

    /// Stable bit-level description, used to key cached results
    pub fn fingerprint(&self) -> Vec<u64> {
        vec![
            self.period as u64,
            self.seasonal_threshold as u64,
            self.trend_window as u64,
            self.recency_decay.to_bits(),
            self.max_horizon as u64,
            self.alpha.to_bits(),
            self.beta.to_bits(),
            self.confidence.level.to_bits(),
            match self.confidence.widening {
                IntervalWidening::Fixed => 0,
                IntervalWidening::SqrtHorizon => 1,
            },
        ]
    }
}

fn check_open_unit(name: &str, value: f64) -> Result<()> {
    if 0.0 < value && value < 1.0 {
        Ok(())
    } else {
        Err(ForecastError::invalid_parameter(
            name,
            "must be between 0 and 1 (exclusive)",
        ))
    }
}
