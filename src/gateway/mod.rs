//! HTTP gateway (Axum) serving the rendered chart.
//!
//! This module is primarily used by the `relchart` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
};
use std::time::Duration;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::chart_page_handler;
pub use state::HandlerState;

use crate::constants::{RELCHART_STATUS_HEADER, RELCHART_STATUS_HEALTHY};

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(chart_page_handler))
        .route("/healthz", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        RELCHART_STATUS_HEADER,
        HeaderValue::from_static(RELCHART_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}

/// GETs `url` and reports whether it answered with a success status.
pub async fn check_health(url: &str, timeout: Duration) -> bool {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build health check client");
            return false;
        }
    };

    match client.get(url).send().await {
        Ok(res) => res.status().is_success(),
        Err(e) => {
            tracing::debug!(url, error = %e, "Health check request failed");
            false
        }
    }
}
