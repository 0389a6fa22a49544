#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tripdesk_api::config::{LogFormat, ServerConfig};
use tripdesk_api::router::build_app_router;
use tripdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router through the same builder `main.rs`
/// uses, so tests exercise the production middleware stack.
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(test_config())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn rich(text: &str) -> String {
    format!("<p>{}</p>", text.repeat(3))
}

/// A co-tour draft that passes both validation phases.
pub fn valid_tour() -> Value {
    json!({
        "title": "Island Hopping Tour A in El Nido",
        "slug": "",
        "image": "https://example.com/tour-a.jpg",
        "tags": ["Full-Day", "Islands"],
        "description": "Visit the Big Lagoon, Secret Lagoon, Shimizu Island and 7 Commando Beach.",
        "type": "co-tour",
        "duration": "8",
        "period": "Full-Day",
        "bookedCount": 0,
        "oldPrice": 1400,
        "newPrice": "1200",
        "childPrice": 900,
        "minimumPerson": 2,
        "maximumPerson": 20,
        "departureTimes": ["09:00"],
        "label": "Best Seller",
        "details": {
            "about": rich("Snorkel the lagoons and lunch on the beach. "),
            "itinerary": rich("Big Lagoon, Secret Lagoon, Shimizu Island. "),
            "pickupLocation": "<p>Hotel lobby, El Nido town</p>",
            "note": "<p>Bring sunscreen</p>",
            "faq": [
                { "question": "Is lunch included?", "answer": "Yes, a buffet lunch." },
                { "question": "", "answer": "" }
            ]
        }
    })
}

/// A shared van transfer that passes both validation phases.
pub fn valid_transfer() -> Value {
    json!({
        "title": "El Nido to Coron Van Transfer",
        "slug": "el-nido-coron-van",
        "image": "https://example.com/van.jpg",
        "tags": ["Transfer"],
        "description": "Shared air-conditioned van.",
        "type": "Van",
        "from": "El Nido",
        "to": "Coron",
        "duration": "6 hours",
        "seatCapacity": 12,
        "bookedCount": 3,
        "oldPrice": 1500,
        "newPrice": 1200,
        "childPrice": 900,
        "minimumPerson": 1,
        "maximumPerson": 12,
        "departureTimes": ["06:00"],
        "label": "Popular",
        "details": {
            "about": rich("Door-to-door shared van with air conditioning. "),
            "itinerary": rich("Depart El Nido, stop in Taytay, arrive Coron. "),
            "note": "<p>Luggage limit 20kg</p>",
            "pickupGuidelines": "<p>Be ready 15 minutes early</p>",
            "pickupOption": "admin",
            "pickupLocation": "<p>Town terminal, El Nido</p>",
            "faq": [{ "question": "Is there wifi?", "answer": "No." }]
        }
    })
}
