//! Dialog stage state machine.
//!
//! Stages advance strictly forward through the fixed follow-up sequence;
//! the only way back is an explicit reset (new lookup, cancel, or session
//! end), which rebuilds the session state from scratch.

use serde::{Deserialize, Serialize};

/// Position in the fixed follow-up sequence.
///
/// Each non-`None` stage means "the user has just been offered this piece
/// of information and a yes/no is expected next."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStage {
    /// No book looked up yet.
    #[default]
    None,
    /// Basic facts were just read; a description is on offer.
    Basic,
    /// Description was read; similar books are on offer.
    Description,
    /// Similar books were read; more author books are on offer.
    SimilarBooks,
    /// More author books were read; the next affirmative ends the dialog.
    MoreBooksFromAuthor,
    /// Terminal. Nothing further is on offer.
    Last,
}

impl RequestStage {
    /// The stage entered by the next affirmative answer.
    ///
    /// `Last` is terminal and maps to itself.
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Basic,
            Self::Basic => Self::Description,
            Self::Description => Self::SimilarBooks,
            Self::SimilarBooks => Self::MoreBooksFromAuthor,
            Self::MoreBooksFromAuthor => Self::Last,
            Self::Last => Self::Last,
        }
    }

    /// Returns true once the sequence is exhausted.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Last)
    }

    /// Ordinal position in the fixed sequence.
    pub fn position(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Basic => 1,
            Self::Description => 2,
            Self::SimilarBooks => 3,
            Self::MoreBooksFromAuthor => 4,
            Self::Last => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_STAGES: [RequestStage; 6] = [
        RequestStage::None,
        RequestStage::Basic,
        RequestStage::Description,
        RequestStage::SimilarBooks,
        RequestStage::MoreBooksFromAuthor,
        RequestStage::Last,
    ];

    fn any_stage() -> impl Strategy<Value = RequestStage> {
        prop::sample::select(ALL_STAGES.to_vec())
    }

    #[test]
    fn default_stage_is_none() {
        assert_eq!(RequestStage::default(), RequestStage::None);
    }

    #[test]
    fn sequence_is_the_fixed_order() {
        let mut stage = RequestStage::None;
        let mut visited = vec![stage];
        while !stage.is_terminal() {
            stage = stage.next();
            visited.push(stage);
        }
        assert_eq!(visited, ALL_STAGES);
    }

    #[test]
    fn serializes_to_snake_case_tags() {
        let json = serde_json::to_string(&RequestStage::MoreBooksFromAuthor).unwrap();
        assert_eq!(json, "\"more_books_from_author\"");
        let back: RequestStage = serde_json::from_str("\"similar_books\"").unwrap();
        assert_eq!(back, RequestStage::SimilarBooks);
    }

    proptest! {
        #[test]
        fn advancing_never_skips_or_regresses(stage in any_stage()) {
            let next = stage.next();
            if stage.is_terminal() {
                prop_assert_eq!(next, stage);
            } else {
                prop_assert_eq!(next.position(), stage.position() + 1);
            }
        }

        #[test]
        fn terminal_is_reached_within_sequence_length(stage in any_stage()) {
            let mut current = stage;
            for _ in 0..ALL_STAGES.len() {
                current = current.next();
            }
            prop_assert!(current.is_terminal());
        }
    }
}
