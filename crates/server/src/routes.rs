//! API route handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forecast_facade::{aggregate_monthly, horizon_labels, DatedValue};
use forecast_facade::{ForecastError, ForecastResult};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Sustainability domain a series belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Energy,
    Water,
    Waste,
    Emissions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub domain: Domain,
    pub organization_id: String,
    pub historical_data: Vec<DatedValue>,
    pub months_to_forecast: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    #[serde(flatten)]
    pub result: ForecastResult,
    /// `YYYY-MM` label for each forecast step
    pub months: Vec<String>,
    pub domain: Domain,
    pub organization_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Forecast failure surfaced as `400 Bad Request`
#[derive(Debug)]
pub struct ApiError(ForecastError);

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub async fn forecast(
    State(state): State<AppState>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    tracing::info!(
        domain = ?req.domain,
        organization = %req.organization_id,
        records = req.historical_data.len(),
        horizon = req.months_to_forecast,
        "forecast request"
    );

    let series = aggregate_monthly(&req.historical_data).map_err(|err| {
        tracing::warn!(error = %err, "rejected historical data");
        err
    })?;
    let result = state.engine.forecast(&series, req.months_to_forecast)?;
    let months = horizon_labels(&series, req.months_to_forecast)?;

    Ok(Json(ForecastResponse {
        result,
        months,
        domain: req.domain,
        organization_id: req.organization_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_facade::{ForecastEngine, ForecastMethod};
    use std::sync::Arc;

    fn state() -> AppState {
        AppState {
            engine: Arc::new(ForecastEngine::default()),
        }
    }

    fn request(months: usize, horizon: usize) -> ForecastRequest {
        let historical_data = (0..months)
            .map(|i| {
                let year = 2021 + i / 12;
                let month = i % 12 + 1;
                DatedValue::new(format!("{}-{:02}-15", year, month), 100.0 + i as f64)
            })
            .collect();
        ForecastRequest {
            domain: Domain::Energy,
            organization_id: "org-1".to_string(),
            historical_data,
            months_to_forecast: horizon,
        }
    }

    #[tokio::test]
    async fn test_forecast_long_history_is_seasonal() {
        let Json(response) = forecast(State(state()), Json(request(36, 6))).await.unwrap();

        assert_eq!(response.result.forecasted.len(), 6);
        assert_eq!(response.result.method, ForecastMethod::SeasonalDecomposition);
        assert_eq!(response.months.first().map(String::as_str), Some("2024-01"));
        assert_eq!(response.months.last().map(String::as_str), Some("2024-06"));
        assert_eq!(response.organization_id, "org-1");
    }

    #[tokio::test]
    async fn test_forecast_short_history_falls_back() {
        let Json(response) = forecast(State(state()), Json(request(10, 3))).await.unwrap();
        assert_eq!(response.result.method, ForecastMethod::ExponentialSmoothing);
        assert_eq!(response.months, vec!["2021-11", "2021-12", "2022-01"]);
    }

    #[tokio::test]
    async fn test_forecast_rejects_empty_history() {
        let err = forecast(State(state()), Json(request(0, 3))).await.unwrap_err();
        assert!(matches!(err.0, ForecastError::InsufficientData { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forecast_rejects_oversized_horizon() {
        for horizon in [121, usize::MAX] {
            let err = forecast(State(state()), Json(request(36, horizon)))
                .await
                .unwrap_err();
            assert!(matches!(err.0, ForecastError::InvalidParameter { .. }));
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_forecast_rejects_bad_date() {
        let mut req = request(3, 2);
        req.historical_data.push(DatedValue::new("yesterday", 1.0));
        let err = forecast(State(state()), Json(req)).await.unwrap_err();
        assert!(matches!(err.0, ForecastError::InvalidPeriodKey(_)));

        let mut req = request(3, 2);
        req.historical_data.push(DatedValue::new("2021-02-30", 1.0));
        let err = forecast(State(state()), Json(req)).await.unwrap_err();
        assert!(matches!(err.0, ForecastError::InvalidPeriodKey(_)));
    }

    #[test]
    fn test_request_json_shape() {
        let req: ForecastRequest = serde_json::from_str(
            r#"{
                "domain": "water",
                "organizationId": "acme",
                "historicalData": [{"date": "2023-01-01", "value": 4.5}],
                "monthsToForecast": 12
            }"#,
        )
        .unwrap();
        assert_eq!(req.domain, Domain::Water);
        assert_eq!(req.historical_data.len(), 1);
        assert_eq!(req.months_to_forecast, 12);

        let unknown = serde_json::from_str::<ForecastRequest>(
            r#"{"domain": "noise", "organizationId": "a",
                "historicalData": [], "monthsToForecast": 1}"#,
        );
        assert!(unknown.is_err());
    }

    #[tokio::test]
    async fn test_response_json_is_flat() {
        let Json(response) = forecast(State(state()), Json(request(12, 2))).await.unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["forecasted"].is_array());
        assert!(json["confidence"]["lower"].is_array());
        assert_eq!(json["method"], "exponential-smoothing");
        assert_eq!(json["metadata"]["dataPoints"], 12);
        assert_eq!(json["domain"], "energy");
        assert_eq!(json["organizationId"], "org-1");
        assert_eq!(json["months"].as_array().map(Vec::len), Some(2));
    }
}
