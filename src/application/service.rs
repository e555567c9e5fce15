//! Request router / session service.
//!
//! Dispatches an incoming platform event to the dialog state machine and
//! composes the outbound response. The outer entry point is a failure
//! boundary: a turn always yields a well-formed response. A malformed
//! event is logged and answered with the invalid-request fallback rather
//! than silence or a partial body.

use std::sync::Arc;

use crate::domain::dialog::{DialogMachine, SessionState, SkillIntent, SlotValues, Turn};
use crate::domain::messages;
use crate::platform::{compose, RequestBody, SkillEvent, SkillResponse};
use crate::ports::BookCatalog;

/// The skill's turn handler.
pub struct SkillService {
    catalog: Arc<dyn BookCatalog>,
}

impl SkillService {
    pub fn new(catalog: Arc<dyn BookCatalog>) -> Self {
        Self { catalog }
    }

    /// Failure boundary over a raw event document.
    ///
    /// Parses the JSON envelope and delegates to [`Self::handle`]. Any
    /// parse failure is logged and answered with the fallback response.
    pub async fn handle_json(&self, raw: &str) -> SkillResponse {
        match serde_json::from_str::<SkillEvent>(raw) {
            Ok(event) => self.handle(&event).await,
            Err(err) => {
                tracing::error!(error = %err, "failed to parse platform event");
                fallback_response()
            }
        }
    }

    /// Handles one parsed platform event.
    pub async fn handle(&self, event: &SkillEvent) -> SkillResponse {
        self.log_request(event);

        let state = SessionState::from_attributes(event.session.attributes.as_ref());
        let machine = DialogMachine::new(self.catalog.as_ref());

        let turn = match &event.request {
            RequestBody::Launch { .. } => machine.launch(),
            RequestBody::SessionEnded { .. } => machine.session_ended(),
            RequestBody::Intent { intent, .. } => {
                let skill_intent = SkillIntent::from_name(&intent.name);
                let slots = SlotValues::new(
                    intent.slot_value("BookName"),
                    intent.slot_value("AuthorName"),
                );
                machine.intent(state, &skill_intent, &slots).await
            }
        };

        compose(turn)
    }

    /// One structured log line per request, before dispatch.
    fn log_request(&self, event: &SkillEvent) {
        tracing::info!(
            application_id = %event.session.application.application_id,
            request_id = %event.request.request_id(),
            request_type = %event.request.type_name(),
            intent = event.request.intent_name().unwrap_or(""),
            session_id = %event.session.session_id,
            "handling skill request"
        );
    }
}

/// The response produced when a turn cannot even be parsed.
fn fallback_response() -> SkillResponse {
    compose(Turn {
        session: SessionState::default(),
        card_title: messages::card_invalid_request().to_string(),
        speech: messages::message_invalid_request().to_string(),
        reprompt: Some(messages::message_reprompt().to_string()),
        should_end_session: false,
        card_image: None,
    })
}
