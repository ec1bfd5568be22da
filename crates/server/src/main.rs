//! # forecast-server
//!
//! REST API for monthly sustainability forecasts (energy, water, waste and
//! emissions) backed by the forecast engine.

use axum::{
    routing::{get, post},
    Json, Router,
};
use forecast_facade::{EngineBuilder, ForecastEngine, InMemoryForecastCache};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    engine: Arc<ForecastEngine>,
}

impl AppState {
    fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let mut builder = EngineBuilder::from_config(config.engine.clone());
        if let Some(capacity) = config.cache_capacity {
            builder = builder.cache(Arc::new(InMemoryForecastCache::new(capacity)));
        }
        Ok(Self {
            engine: Arc::new(builder.build()?),
        })
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "forecast-server",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/health", "/health/live", "/api/v1/forecast", "/predict"]
    }))
}

/// Liveness probe
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health/live", get(liveness))
        .route("/health", get(liveness))
        .route("/api/v1/forecast", post(routes::forecast))
        .route("/predict", post(routes::forecast))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config)?;
    let addr = config.addr()?;

    tracing::info!(
        period = config.engine.period,
        seasonal_threshold = config.engine.seasonal_threshold,
        cache = ?config.cache_capacity,
        "forecast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness_reports_version() {
        let Json(body) = liveness().await;
        assert_eq!(body["status"], "alive");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let Json(body) = root().await;
        assert_eq!(body["service"], "forecast-server");
        assert_eq!(body["status"], "running");
        assert!(body["endpoints"].as_array().is_some_and(|e| e.len() == 4));
    }

    #[test]
    fn test_state_with_cache() {
        let mut config = ServerConfig::from_lookup(|_| None).unwrap();
        config.cache_capacity = Some(8);
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.engine.config(), &config.engine);
        let _router = app(state);
    }
}
