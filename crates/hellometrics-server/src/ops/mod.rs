//! Operational HTTP endpoints.
//!
//! - `/metrics` : Prometheus text format (scrape listener only)
//! - fallback   : JSON 404 on both listeners

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use hellometrics_core::metrics::CONTENT_TYPE;

use crate::app_state::AppState;
use crate::error::HttpError;

/// Counts the scrape before rendering, so each snapshot includes itself.
pub async fn metrics(State(state): State<AppState>) -> Response {
    if let Err(e) = state.scrape_counter().inc() {
        tracing::warn!(code = e.code().as_str(), error = %e, "scrape counter not incremented");
    }
    let body = state.registry().render_snapshot();
    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}

pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::not_found(uri.path())
}
