//! Platform boundary - the skill platform's request/response envelope.
//!
//! The transport itself is out of scope; the platform delivers a parsed
//! event object and expects a parsed response object back.

mod request;
mod response;

pub use request::{Application, IntentEnvelope, RequestBody, SessionEnvelope, SkillEvent, Slot};
pub use response::{compose, Card, CardImageUrls, OutputSpeech, Reprompt, SkillResponse, SpeechletResponse};
