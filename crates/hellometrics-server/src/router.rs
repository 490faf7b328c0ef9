//! Axum router wiring.
//!
//! Two routers, one per listener, so neither serves the other's routes:
//! - business: `/hello`
//! - scrape:   `/metrics`

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{app_state::AppState, ops, services};

pub const HELLO_PATH: &str = "/hello";
pub const METRICS_PATH: &str = "/metrics";

pub fn build_business_router(state: AppState) -> Router {
    let router = Router::new()
        .route(HELLO_PATH, get(services::hello::hello))
        .fallback(ops::not_found)
        .with_state(state);
    with_request_log(with_recovery(router))
}

pub fn build_scrape_router(state: AppState) -> Router {
    let router = Router::new()
        .route(METRICS_PATH, get(ops::metrics))
        .fallback(ops::not_found)
        .with_state(state);
    with_recovery(router)
}

/// A panicking handler answers 500 instead of dropping the connection.
fn with_recovery(router: Router) -> Router {
    router.layer(CatchPanicLayer::new())
}

/// One info line per business request: method, path, status, latency.
fn with_request_log(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
