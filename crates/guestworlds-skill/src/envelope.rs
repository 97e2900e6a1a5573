//! Voice assistant request and response envelopes.
//!
//! Only the fields the skill reads or writes are modelled; anything else
//! the assistant sends (session, context, locale) is ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Envelope version the skill answers with.
pub const RESPONSE_VERSION: &str = "1.0";

/// Incoming request from the voice assistant.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequest {
    /// Envelope version.
    #[serde(default)]
    pub version: String,
    /// The request payload.
    pub request: RequestBody,
}

/// The request payload: its type and, for intent requests, the intent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    /// Request type, e.g. `LaunchRequest` or `IntentRequest`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Assistant-assigned request identifier.
    #[serde(default)]
    pub request_id: Option<String>,
    /// The recognised intent, present on intent requests.
    #[serde(default)]
    pub intent: Option<Intent>,
}

/// A recognised intent and its slots.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    /// Intent name, e.g. `GuestWorldsNowIntent`.
    pub name: String,
    /// Slots keyed by slot name.
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// A slot value extracted from the utterance.
#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    /// Slot name.
    pub name: String,
    /// Spoken value; absent when the user did not fill the slot.
    #[serde(default)]
    pub value: Option<String>,
}

impl SkillRequest {
    /// The intent name, if this is an intent request.
    #[must_use]
    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|intent| intent.name.as_str())
    }

    /// The value of slot `name`, if present and filled.
    #[must_use]
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.request
            .intent
            .as_ref()?
            .slots
            .get(name)?
            .value
            .as_deref()
    }
}

/// Outgoing response to the voice assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillResponse {
    /// Envelope version.
    pub version: &'static str,
    /// The response payload.
    pub response: ResponseBody,
}

/// What the assistant says and shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    /// Speech to play.
    pub output_speech: OutputSpeech,
    /// Companion-app card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Whether the conversation ends after this response.
    pub should_end_session: bool,
}

/// Speech payload, either SSML markup or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// SSML markup wrapped in `<speak>`.
    #[serde(rename = "SSML")]
    Ssml {
        /// The markup.
        ssml: String,
    },
    /// Unmarked text.
    PlainText {
        /// The text.
        text: String,
    },
}

/// A simple companion-app card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Card type; always `Simple`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Card title.
    pub title: String,
    /// Card body.
    pub content: String,
}

impl SkillResponse {
    /// An SSML response that ends the session.
    #[must_use]
    pub fn ssml(title: &str, ssml: String, card_text: String) -> Self {
        Self::ending(OutputSpeech::Ssml { ssml }, title, card_text)
    }

    /// A plain-text response that ends the session.
    #[must_use]
    pub fn plain_text(title: &str, text: &str) -> Self {
        Self::ending(
            OutputSpeech::PlainText {
                text: text.to_owned(),
            },
            title,
            text.to_owned(),
        )
    }

    fn ending(output_speech: OutputSpeech, title: &str, content: String) -> Self {
        Self {
            version: RESPONSE_VERSION,
            response: ResponseBody {
                output_speech,
                card: Some(Card {
                    kind: "Simple",
                    title: title.to_owned(),
                    content,
                }),
                should_end_session: true,
            },
        }
    }

    /// The spoken payload: SSML markup or plain text.
    #[must_use]
    pub fn speech(&self) -> &str {
        match &self.response.output_speech {
            OutputSpeech::Ssml { ssml } => ssml,
            OutputSpeech::PlainText { text } => text,
        }
    }

    /// The card title, if a card is attached.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.response.card.as_ref().map(|card| card.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_slots_and_ignores_extra_fields() {
        // Arrange
        let json = serde_json::json!({
            "version": "1.0",
            "session": { "new": true },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "locale": "en-GB",
                "intent": {
                    "name": "GuestWorldsDateIntent",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "Date": { "name": "Date", "value": "2021-12-03" },
                        "Empty": { "name": "Empty" }
                    }
                }
            }
        });

        // Act
        let request: SkillRequest = serde_json::from_value(json).unwrap();

        // Assert
        assert_eq!(request.intent_name(), Some("GuestWorldsDateIntent"));
        assert_eq!(request.slot_value("Date"), Some("2021-12-03"));
        assert_eq!(request.slot_value("Empty"), None);
        assert_eq!(request.slot_value("Missing"), None);
        assert_eq!(
            request.request.request_id.as_deref(),
            Some("amzn1.echo-api.request.1")
        );
    }

    #[test]
    fn test_launch_request_has_no_intent() {
        let json = serde_json::json!({ "request": { "type": "LaunchRequest" } });

        let request: SkillRequest = serde_json::from_value(json).unwrap();

        assert_eq!(request.intent_name(), None);
        assert_eq!(request.slot_value("Date"), None);
    }

    #[test]
    fn test_ssml_response_serializes_in_assistant_shape() {
        let response = SkillResponse::ssml(
            "Guest Worlds Now",
            "<speak>hello </speak>".to_owned(),
            "hello".to_owned(),
        );

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": { "type": "SSML", "ssml": "<speak>hello </speak>" },
                    "card": { "type": "Simple", "title": "Guest Worlds Now", "content": "hello" },
                    "shouldEndSession": true
                }
            })
        );
    }

    #[test]
    fn test_plain_text_response_serializes_text() {
        let response = SkillResponse::plain_text("Oops", "Something went wrong.");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(json["response"]["outputSpeech"]["text"], "Something went wrong.");
        assert_eq!(response.speech(), "Something went wrong.");
        assert_eq!(response.title(), Some("Oops"));
    }
}
