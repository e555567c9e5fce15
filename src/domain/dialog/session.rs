//! Typed session state round-tripped through the caller's attribute blob.
//!
//! The platform persists session attributes between turns as opaque JSON.
//! Internally the blob is always this struct; it is deserialized leniently
//! (missing or malformed attributes become the empty state) so a damaged
//! blob degrades to a fresh dialog instead of failing the turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::book::{AuthorRecord, BookRecord};
use crate::domain::dialog::stage::RequestStage;

/// Dialog state carried between turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The looked-up book, set together with `author` on a successful
    /// eligible lookup and never read before being set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<BookRecord>,
    /// The looked-up book's author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRecord>,
    /// Progress through the fixed follow-up sequence.
    #[serde(default)]
    pub last_request_stage: RequestStage,
    /// Free-text label of what a "yes" answer currently means, used for
    /// card titling (e.g. "Description of Matilda from Roald Dahl").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
}

impl SessionState {
    /// Decodes the caller's attribute blob, tolerating absence and damage.
    pub fn from_attributes(attributes: Option<&Value>) -> Self {
        attributes
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    /// Encodes this state back into the caller's attribute blob.
    pub fn to_attributes(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }

    /// Stores a freshly looked-up book and restarts the follow-up
    /// sequence at `Basic`.
    pub fn load_book(&mut self, book: BookRecord, author: AuthorRecord) {
        self.book = Some(book);
        self.author = Some(author);
        self.last_request_stage = RequestStage::Basic;
    }

    /// Clears everything back to the empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true when a book and author are loaded.
    pub fn has_book(&self) -> bool {
        self.book.is_some() && self.author.is_some()
    }

    /// "Title from Author" label for card titling, when a book is loaded.
    pub fn book_label(&self) -> Option<String> {
        match (&self.book, &self.author) {
            (Some(book), Some(author)) => Some(format!("{} from {}", book.title, author.name)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded_state() -> SessionState {
        let mut state = SessionState::default();
        state.load_book(
            BookRecord {
                title: "Matilda".to_string(),
                description: None,
                publication_year: None,
                publisher: None,
                num_pages: None,
                average_rating: None,
                ratings_count: None,
                url: None,
                small_image_url: None,
                image_url: None,
                similar_books: Vec::new(),
            },
            AuthorRecord { name: "Roald Dahl".to_string() },
        );
        state
    }

    #[test]
    fn missing_attributes_decode_to_empty_state() {
        assert_eq!(SessionState::from_attributes(None), SessionState::default());
    }

    #[test]
    fn malformed_attributes_decode_to_empty_state() {
        let damaged = json!({"last_request_stage": 42, "book": "not a book"});
        assert_eq!(
            SessionState::from_attributes(Some(&damaged)),
            SessionState::default()
        );
    }

    #[test]
    fn state_round_trips_through_the_attribute_blob() {
        let mut state = loaded_state();
        state.decision = Some("Description of Matilda from Roald Dahl".to_string());

        let blob = state.to_attributes();
        assert_eq!(SessionState::from_attributes(Some(&blob)), state);
    }

    #[test]
    fn load_book_restarts_the_sequence_at_basic() {
        let state = loaded_state();
        assert!(state.has_book());
        assert_eq!(state.last_request_stage, RequestStage::Basic);
        assert_eq!(state.book_label().as_deref(), Some("Matilda from Roald Dahl"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = loaded_state();
        state.clear();
        assert_eq!(state, SessionState::default());
        assert_eq!(state.last_request_stage, RequestStage::None);
    }
}
