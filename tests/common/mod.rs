#![allow(dead_code)]

use approvals_gateway::{app, config::Config, state::AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

/// Send one request through a freshly built router.
pub async fn send(config: Config, request: Request<Body>) -> (StatusCode, Value) {
    let state = AppState::new(config).expect("client builds");
    let response = app(state).oneshot(request).await.expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    let body = serde_json::from_slice(&bytes).expect("body is JSON");

    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}
