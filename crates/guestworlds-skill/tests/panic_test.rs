//! A failure inside request handling still produces a spoken answer.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use guestworlds_core::clock::Clock;

struct BrokenClock;

impl Clock for BrokenClock {
    fn now(&self) -> DateTime<Utc> {
        panic!("clock source unavailable")
    }
}

#[tokio::test]
async fn test_panic_in_handler_returns_apology() {
    let app = common::build_test_app(BrokenClock);

    let (status, json) = common::post_json(
        app,
        "/skill",
        &common::intent_request("GuestWorldsNowIntent", &[]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"]["outputSpeech"]["type"], "PlainText");
    assert_eq!(common::speech(&json), "Zwift Aide had a problem.");
    assert_eq!(json["response"]["card"]["title"], "Oops");
}

#[tokio::test]
async fn test_help_does_not_touch_the_clock() {
    let app = common::build_test_app(BrokenClock);

    let (status, json) = common::post_json(
        app,
        "/skill",
        &common::intent_request("AMAZON.HelpIntent", &[]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(common::speech(&json).contains("When can I ride Richmond?"));
}
