use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument, warn};

use crate::chart::assemble;
use crate::constants::{RELCHART_STATUS_HEADER, RELCHART_STATUS_RENDERED};
use crate::render::html_page;

use super::error::GatewayError;
use super::state::HandlerState;

/// `GET /`: assembles a fresh chart from the shared inputs and returns it as HTML.
#[instrument(skip(state))]
pub async fn chart_page_handler(
    State(state): State<HandlerState>,
) -> Result<Response, GatewayError> {
    let spec = assemble(&state.records, &state.policies).map_err(|e| {
        warn!(error = %e, kind = e.kind(), "Chart assembly failed");
        GatewayError::from(e)
    })?;

    let page = html_page(&spec, &state.figure_options);
    let etag = format!("\"{}\"", blake3::hash(page.as_bytes()).to_hex());

    debug!(
        records = state.records.len(),
        points = spec.points.len(),
        markers = spec.markers.len(),
        bytes = page.len(),
        "Rendered chart page"
    );

    Ok(make_response(page, &etag))
}

fn make_response(page: String, etag: &str) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        RELCHART_STATUS_HEADER,
        HeaderValue::from_static(RELCHART_STATUS_RENDERED),
    );
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert(header::ETAG, value);
    }

    (StatusCode::OK, headers, page).into_response()
}
