//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use webserver::core::HeadlineTemplates;
use webserver::{MockRandomSource, ThreadRngSource, WebServer};

/// Router whose random headline always uses template `index`
pub fn create_router_picking(index: usize) -> Router {
    let mut random = MockRandomSource::new();
    random.expect_pick_index().returning(move |_| index);
    WebServer::new(HeadlineTemplates::builtin(), random).build_router()
}

/// Router backed by the real thread RNG
pub fn create_router() -> Router {
    WebServer::new(HeadlineTemplates::builtin(), ThreadRngSource::new()).build_router()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!(null));

    (status, json)
}

/// Helper to make a GET request
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

/// Helper to make a POST request with a raw body
pub async fn post_raw(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

/// Helper to make a POST request with JSON body
pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, &body.to_string()).await
}
