//! HTTP routes and the application router.

use std::any::Any;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::intents;
use crate::state::AppState;

pub mod health;
pub mod skill;

/// Builds the full application router.
///
/// A panic while handling any request is answered with the apology speech
/// instead of a failed connection.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(skill::router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turns a handler panic into the apology response.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = detail, "request handler panicked");

    (StatusCode::OK, Json(intents::apology())).into_response()
}
