//! Voice skill endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use tracing::{info, instrument};

use crate::envelope::{SkillRequest, SkillResponse};
use crate::intents;
use crate::state::AppState;

/// POST /skill
#[instrument(
    skip(state, request),
    fields(
        request_type = %request.request.kind,
        intent = request.intent_name().unwrap_or("-"),
    )
)]
async fn handle_skill(
    State(state): State<AppState>,
    Json(request): Json<SkillRequest>,
) -> Json<SkillResponse> {
    info!(
        request_id = request.request.request_id.as_deref().unwrap_or("-"),
        "handling skill request"
    );

    Json(intents::respond(
        &request,
        state.clock.as_ref(),
        &state.schedule,
    ))
}

/// Returns the router for the skill endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/skill", post(handle_skill))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use guestworlds_calendar::domain::season::built_in_schedule;
    use guestworlds_core::clock::Clock;
    use guestworlds_test_support::FixedClock;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app_state() -> AppState {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::at(2021, 12, 10, 12));
        AppState::new(clock, Arc::new(built_in_schedule()))
    }

    #[tokio::test]
    async fn test_now_intent_returns_200_with_ssml() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({
            "version": "1.0",
            "request": {
                "type": "IntentRequest",
                "requestId": "req-1",
                "intent": { "name": "GuestWorldsNowIntent" }
            }
        });

        let request = Request::builder()
            .method("POST")
            .uri("/skill")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(json["response"]["outputSpeech"]["type"], "SSML");
        let ssml = json["response"]["outputSpeech"]["ssml"].as_str().unwrap();
        assert!(ssml.starts_with("<speak>"));
        assert!(ssml.contains("Innsbruck"));
        assert!(ssml.contains("Richmond"));
        assert_eq!(json["response"]["shouldEndSession"], true);
    }

    #[tokio::test]
    async fn test_skill_returns_422_for_missing_request() {
        // Arrange
        let app = router().with_state(test_app_state());

        let request = Request::builder()
            .method("POST")
            .uri("/skill")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert: Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
