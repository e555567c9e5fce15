//! Inbound event envelope from the skill platform.
//!
//! Shape (JSON):
//!
//! ```json
//! {
//!   "session": {
//!     "sessionId": "...",
//!     "application": { "applicationId": "..." },
//!     "attributes": { ... }
//!   },
//!   "request": {
//!     "type": "IntentRequest",
//!     "requestId": "...",
//!     "intent": {
//!       "name": "GetBookInfo",
//!       "slots": { "BookName": { "name": "BookName", "value": "Matilda" } }
//!     }
//!   }
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A complete inbound event.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEvent {
    #[serde(default)]
    pub session: SessionEnvelope,
    pub request: RequestBody,
}

/// The session block: ids plus the caller-persisted attribute blob.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEnvelope {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Application,
    #[serde(default)]
    pub attributes: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

/// The request block, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    #[serde(rename = "LaunchRequest", rename_all = "camelCase")]
    Launch {
        #[serde(default)]
        request_id: String,
    },
    #[serde(rename = "IntentRequest", rename_all = "camelCase")]
    Intent {
        #[serde(default)]
        request_id: String,
        intent: IntentEnvelope,
    },
    #[serde(rename = "SessionEndedRequest", rename_all = "camelCase")]
    SessionEnded {
        #[serde(default)]
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
}

impl RequestBody {
    pub fn request_id(&self) -> &str {
        match self {
            Self::Launch { request_id }
            | Self::Intent { request_id, .. }
            | Self::SessionEnded { request_id, .. } => request_id,
        }
    }

    /// The platform's request-type tag, for logging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Launch { .. } => "LaunchRequest",
            Self::Intent { .. } => "IntentRequest",
            Self::SessionEnded { .. } => "SessionEndedRequest",
        }
    }

    pub fn intent_name(&self) -> Option<&str> {
        match self {
            Self::Intent { intent, .. } => Some(intent.name.as_str()),
            _ => None,
        }
    }
}

/// The intent block of an `IntentRequest`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentEnvelope {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// A single slot. The platform ships slots without a value when the user
/// did not utter one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl IntentEnvelope {
    /// Value of a named slot, treating blank values as absent.
    pub fn slot_value(&self, name: &str) -> Option<String> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_an_intent_request_with_slots() {
        let event: SkillEvent = serde_json::from_value(json!({
            "session": {
                "sessionId": "session-1",
                "application": { "applicationId": "app-1" },
                "attributes": { "last_request_stage": "basic" }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "req-1",
                "intent": {
                    "name": "GetBookInfo",
                    "slots": {
                        "BookName": { "name": "BookName", "value": "Matilda" },
                        "AuthorName": { "name": "AuthorName" }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(event.session.session_id, "session-1");
        assert_eq!(event.session.application.application_id, "app-1");
        assert_eq!(event.request.request_id(), "req-1");
        assert_eq!(event.request.type_name(), "IntentRequest");
        assert_eq!(event.request.intent_name(), Some("GetBookInfo"));

        let RequestBody::Intent { intent, .. } = &event.request else {
            panic!("expected an intent request");
        };
        assert_eq!(intent.slot_value("BookName").as_deref(), Some("Matilda"));
        assert_eq!(intent.slot_value("AuthorName"), None);
    }

    #[test]
    fn parses_a_launch_request_without_a_session_block() {
        let event: SkillEvent = serde_json::from_value(json!({
            "request": { "type": "LaunchRequest", "requestId": "req-2" }
        }))
        .unwrap();

        assert_eq!(event.request.type_name(), "LaunchRequest");
        assert_eq!(event.session.session_id, "");
        assert!(event.session.attributes.is_none());
    }

    #[test]
    fn parses_a_session_ended_request() {
        let event: SkillEvent = serde_json::from_value(json!({
            "session": { "sessionId": "session-3" },
            "request": {
                "type": "SessionEndedRequest",
                "requestId": "req-3",
                "reason": "USER_INITIATED"
            }
        }))
        .unwrap();

        let RequestBody::SessionEnded { reason, .. } = &event.request else {
            panic!("expected a session-ended request");
        };
        assert_eq!(reason.as_deref(), Some("USER_INITIATED"));
    }

    #[test]
    fn blank_slot_values_are_treated_as_absent() {
        let intent: IntentEnvelope = serde_json::from_value(json!({
            "name": "GetBookInfo",
            "slots": { "BookName": { "value": "   " } }
        }))
        .unwrap();

        assert_eq!(intent.slot_value("BookName"), None);
    }

    #[test]
    fn unknown_request_types_fail_to_parse() {
        let result = serde_json::from_value::<SkillEvent>(json!({
            "request": { "type": "AudioPlayerRequest" }
        }));
        assert!(result.is_err());
    }
}
