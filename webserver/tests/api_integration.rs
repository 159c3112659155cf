//! Integration tests for the dashboard API
//!
//! Drives the real router in-process with `tower::ServiceExt::oneshot`.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::*;

const JOES_PIZZA_HEADLINES: [&str; 5] = [
    "Discover why Joe's Pizza is Austin's favorite spot in 2025",
    "How Joe's Pizza is changing the game in Austin",
    "Explore the best of Austin with Joe's Pizza",
    "Why customers in Austin love Joe's Pizza",
    "Joe's Pizza: The heart of Austin’s local scene",
];

#[tokio::test]
async fn test_business_data_returns_snapshot() {
    let router = create_router();

    let (status, body) = post(
        &router,
        "/business-data",
        json!({"name": "Joe's Pizza", "location": "Austin"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "rating": 4.3,
            "reviews": 127,
            "headline": "Why Joe's Pizza is Austin's Sweetest Spot in 2025"
        })
    );
}

#[tokio::test]
async fn test_business_data_missing_name_is_bad_request() {
    let router = create_router();

    let (status, body) = post(&router, "/business-data", json!({"location": "Austin"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: Missing required field: name");
}

#[tokio::test]
async fn test_business_data_empty_location_is_bad_request() {
    let router = create_router();

    let (status, body) = post(
        &router,
        "/business-data",
        json!({"name": "Joe's Pizza", "location": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: Missing required field: location");
}

#[tokio::test]
async fn test_business_data_malformed_json_is_bad_request() {
    let router = create_router();

    let (status, body) = post_raw(&router, "/business-data", "{\"name\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request format"));
}

#[tokio::test]
async fn test_regenerate_uses_selected_template() {
    for (index, expected) in JOES_PIZZA_HEADLINES.iter().enumerate() {
        let router = create_router_picking(index);

        let (status, body) = get(&router, "/regenerate-headline?name=Joe's%20Pizza&location=Austin").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "headline": expected }));
    }
}

#[tokio::test]
async fn test_regenerate_returns_one_of_the_templates() {
    let router = create_router();

    for _ in 0..20 {
        let (status, body) = get(&router, "/regenerate-headline?name=Joe's%20Pizza&location=Austin").await;

        assert_eq!(status, StatusCode::OK);
        let headline = body["headline"].as_str().unwrap();
        assert!(JOES_PIZZA_HEADLINES.contains(&headline), "unexpected headline: {headline}");
    }
}

#[tokio::test]
async fn test_regenerate_without_params_uses_defaults() {
    let router = create_router_picking(3);

    let (status, body) = get(&router, "/regenerate-headline").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["headline"], "Why customers in Your Area love This Business");
}

#[tokio::test]
async fn test_regenerate_empty_params_use_defaults() {
    let router = create_router_picking(0);

    let (status, body) = get(&router, "/regenerate-headline?name=&location=Austin").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["headline"], "Discover why This Business is Austin's favorite spot in 2025");
}

#[tokio::test]
async fn test_regenerate_repeated_params_keep_first_value() {
    let router = create_router_picking(1);

    let (status, body) = get(&router, "/regenerate-headline?name=A&name=B&location=X").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "headline": "How A is changing the game in X" }));
}

#[tokio::test]
async fn test_regenerate_ignores_unknown_params() {
    let router = create_router_picking(2);

    let (status, body) = get(&router, "/regenerate-headline?utm_source=mail&location=Austin&location=Dallas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["headline"], "Explore the best of Austin with This Business");
}

#[tokio::test]
async fn test_health_reports_requests_and_templates() {
    let router = create_router();

    get(&router, "/regenerate-headline").await;
    post(&router, "/business-data", json!({"name": "A", "location": "B"})).await;
    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["requests_served"], 2);
    assert_eq!(body["template_count"], 5);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let router = create_router();

    let (status, _) = get(&router, "/business").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
