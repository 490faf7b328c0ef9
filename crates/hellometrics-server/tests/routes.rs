#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use hellometrics_core::metrics::Registry;
use hellometrics_server::{app_state::AppState, router};

fn state() -> AppState {
    AppState::new(Arc::new(Registry::new())).expect("state")
}

async fn get(app: &Router, path: &str) -> (StatusCode, Option<String>, String) {
    let res = app
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let ctype = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, ctype, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn hello_returns_exact_body_and_counts() {
    let state = state();
    let app = router::build_business_router(state.clone());

    let (status, _, body) = get(&app, "/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "hello world");
    assert_eq!(state.hello_counter().get(), 1);
}

#[tokio::test]
async fn metrics_uses_exposition_content_type() {
    let state = state();
    let app = router::build_scrape_router(state);

    let (status, ctype, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctype.as_deref(), Some("text/plain; version=0.0.4; charset=utf-8"));
    assert!(body.contains("# HELP hello a counter of hello api"));
    assert!(body.contains("# UNIT hello time(s)"));
    assert!(body.lines().any(|l| l == "hello 0"), "{body}");
}

fn sample(snapshot: &str, name: &str) -> u64 {
    snapshot
        .lines()
        .find_map(|l| l.strip_prefix(name)?.strip_prefix(' '))
        .and_then(|v| v.parse().ok())
        .expect("sample present")
}

#[tokio::test]
async fn each_scrape_counts_itself() {
    let state = state();
    let app = router::build_scrape_router(state.clone());

    let (_, _, first) = get(&app, "/metrics").await;
    assert!(first.contains("# TYPE metrics_handler_requests_total counter"));
    assert_eq!(sample(&first, "metrics_handler_requests_total"), 1);

    let (_, _, second) = get(&app, "/metrics").await;
    assert_eq!(sample(&second, "metrics_handler_requests_total"), 2);
    assert_eq!(sample(&second, "hello"), 0);

    // Business traffic does not touch the scrape counter.
    let business = router::build_business_router(state.clone());
    get(&business, "/hello").await;
    assert_eq!(state.scrape_counter().get(), 2);
}

#[tokio::test]
async fn routers_do_not_serve_each_others_paths() {
    let state = state();
    let business = router::build_business_router(state.clone());
    let scrape = router::build_scrape_router(state.clone());

    let (status, _, body) = get(&business, "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("# TYPE"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "NOT_FOUND");

    let (status, _, body) = get(&scrape, "/hello").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, "hello world");
    assert_eq!(state.hello_counter().get(), 0);
}

#[tokio::test]
async fn hello_only_answers_get() {
    let state = state();
    let app = router::build_business_router(state.clone());

    let res = app
        .oneshot(Request::post("/hello").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(state.hello_counter().get(), 0);
}
