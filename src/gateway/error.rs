use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::chart::AssemblyError;
use crate::constants::RELCHART_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("chart assembly failed: {0}")]
    AssemblyFailed(#[from] AssemblyError),
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let relchart_status = match &self {
            GatewayError::AssemblyFailed(e) => e.kind(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            RELCHART_STATUS_HEADER,
            HeaderValue::from_str(relchart_status).unwrap_or(HeaderValue::from_static("error")),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
