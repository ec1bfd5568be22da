//! Server configuration from environment variables

use forecast_facade::{EngineConfig, ForecastError};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },

    #[error("invalid engine configuration: {0}")]
    Engine(#[from] ForecastError),
}

/// Runtime configuration for the forecast service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub engine: EngineConfig,
    /// Forecast cache capacity, `None` disables caching
    pub cache_capacity: Option<usize>,
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and the `FORECAST_*` variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = EngineConfig::default();
        let mut engine = defaults.clone();
        engine.period = parse_var(&lookup, "FORECAST_PERIOD", defaults.period)?;
        engine.seasonal_threshold = parse_var(
            &lookup,
            "FORECAST_SEASONAL_THRESHOLD",
            defaults.seasonal_threshold,
        )?;
        engine.max_horizon = parse_var(&lookup, "FORECAST_MAX_HORIZON", defaults.max_horizon)?;
        engine.confidence.level = parse_var(
            &lookup,
            "FORECAST_CONFIDENCE_LEVEL",
            defaults.confidence.level,
        )?;
        engine.validate()?;

        let cache_capacity = match parse_var(&lookup, "FORECAST_CACHE", 0usize)? {
            0 => None,
            capacity => Some(capacity),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT", 8001)?,
            engine,
            cache_capacity,
        })
    }

    /// Socket address to bind
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidVar {
            name: "HOST",
            value: self.host.clone(),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value: raw }),
    }
}
