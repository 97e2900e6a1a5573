//! Shared test helpers for skill integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use guestworlds_calendar::domain::schedule::Schedule;
use guestworlds_calendar::domain::season::built_in_schedule;
use guestworlds_core::clock::Clock;
use http_body_util::BodyExt;
use tower::ServiceExt;

use guestworlds_skill::routes;
use guestworlds_skill::state::AppState;

/// Build the full app router over the built-in schedule with `clock`.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app(clock: impl Clock + 'static) -> Router {
    build_test_app_with_schedule(clock, built_in_schedule())
}

/// Build the full app router over a custom schedule.
pub fn build_test_app_with_schedule(clock: impl Clock + 'static, schedule: Schedule) -> Router {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(clock);
    routes::app(AppState::new(clock, Arc::new(schedule)))
}

/// An intent request body with optional slots.
pub fn intent_request(intent: &str, slots: &[(&str, &str)]) -> serde_json::Value {
    let slots: serde_json::Map<String, serde_json::Value> = slots
        .iter()
        .map(|(name, value)| {
            (
                (*name).to_owned(),
                serde_json::json!({ "name": name, "value": value }),
            )
        })
        .collect();
    serde_json::json!({
        "version": "1.0",
        "session": { "new": true, "sessionId": "session-1" },
        "request": {
            "type": "IntentRequest",
            "requestId": "request-1",
            "locale": "en-GB",
            "intent": { "name": intent, "confirmationStatus": "NONE", "slots": slots }
        }
    })
}

/// The SSML (or plain text) the response speaks.
pub fn speech(json: &serde_json::Value) -> String {
    let speech = &json["response"]["outputSpeech"];
    speech["ssml"]
        .as_str()
        .or_else(|| speech["text"].as_str())
        .unwrap_or_default()
        .to_owned()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
