//! Outbound response envelope and the response composer.
//!
//! [`compose`] is a pure mapping from a dialog [`Turn`] to the platform's
//! response shape: version "1.0", the serialized session attributes, a
//! PlainText output speech, a Simple card (Standard when a cover image is
//! attached), a reprompt defaulting to empty, and the end-of-session flag.

use serde::Serialize;
use serde_json::Value;

use crate::domain::dialog::Turn;

/// A complete outbound response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: String,
    pub session_attributes: Value,
    pub response: SpeechletResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImageUrls>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImageUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Builds the platform response for a completed dialog turn.
pub fn compose(turn: Turn) -> SkillResponse {
    let card = Card {
        card_type: if turn.card_image.is_some() { "Standard" } else { "Simple" }.to_string(),
        title: turn.card_title,
        content: turn.speech.clone(),
        image: turn.card_image.map(|image| CardImageUrls {
            small_image_url: image.small_image_url,
            large_image_url: image.large_image_url,
        }),
    };

    SkillResponse {
        version: "1.0".to_string(),
        session_attributes: turn.session.to_attributes(),
        response: SpeechletResponse {
            output_speech: OutputSpeech::plain_text(turn.speech),
            card,
            reprompt: Reprompt {
                output_speech: OutputSpeech::plain_text(turn.reprompt.unwrap_or_default()),
            },
            should_end_session: turn.should_end_session,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialog::{CardImage, SessionState};

    fn turn() -> Turn {
        Turn {
            session: SessionState::default(),
            card_title: "Kids Classic Books - Matilda".to_string(),
            speech: "Matilda from Roald Dahl was published in 1988.".to_string(),
            reprompt: Some("Please repeat".to_string()),
            should_end_session: false,
            card_image: None,
        }
    }

    #[test]
    fn composes_a_plain_text_simple_card_response() {
        let response = compose(turn());

        assert_eq!(response.version, "1.0");
        assert_eq!(response.response.output_speech.speech_type, "PlainText");
        assert_eq!(response.response.card.card_type, "Simple");
        assert_eq!(response.response.card.content, response.response.output_speech.text);
        assert_eq!(response.response.reprompt.output_speech.text, "Please repeat");
        assert!(!response.response.should_end_session);
    }

    #[test]
    fn missing_reprompt_defaults_to_empty_text() {
        let mut t = turn();
        t.reprompt = None;
        let response = compose(t);
        assert_eq!(response.response.reprompt.output_speech.text, "");
    }

    #[test]
    fn attached_image_switches_the_card_to_standard() {
        let mut t = turn();
        t.card_image = Some(CardImage {
            small_image_url: Some("https://img/small.jpg".to_string()),
            large_image_url: Some("https://img/large.jpg".to_string()),
        });

        let response = compose(t);
        assert_eq!(response.response.card.card_type, "Standard");
        let image = response.response.card.image.unwrap();
        assert_eq!(image.small_image_url.as_deref(), Some("https://img/small.jpg"));
    }

    #[test]
    fn serializes_with_platform_field_names() {
        let json = serde_json::to_value(compose(turn())).unwrap();
        assert_eq!(json["version"], "1.0");
        assert!(json.get("sessionAttributes").is_some());
        assert_eq!(json["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(json["response"]["shouldEndSession"], false);
        assert!(json["response"]["reprompt"]["outputSpeech"].is_object());
    }
}
