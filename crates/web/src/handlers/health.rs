//! Liveness and search backend readiness

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Instant;
use tdpsearch_common::VERSION;

use crate::AppState;

#[derive(Serialize)]
pub struct Liveness {
    pub service: String,
    pub version: &'static str,
    pub api_root: String,
}

/// Outcome of one `/years` round-trip to the search backend
#[derive(Serialize)]
pub struct BackendStatus {
    pub reachable: bool,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_indexed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<Liveness> {
    Json(Liveness {
        service: state.config.observability.service_name.clone(),
        version: VERSION,
        api_root: state.client.root().to_string(),
    })
}

/// `GET /ready`: 503 until the search backend answers `/years`
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<BackendStatus>) {
    let start = Instant::now();
    let outcome = state.client.list_years().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(years) => (
            StatusCode::OK,
            Json(BackendStatus {
                reachable: true,
                latency_ms,
                years_indexed: Some(years.len()),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Search backend not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(BackendStatus {
                    reachable: false,
                    latency_ms,
                    years_indexed: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
