//! Conversational intents recognized by the dialog machine.

/// The intents the skill reacts to, parsed from the platform's intent name.
///
/// The three book-info utterances ("tell me about X", all-time popular,
/// weekly popular) share one lookup path and collapse into `BookInfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillIntent {
    Yes,
    No,
    Help,
    Stop,
    Cancel,
    BookInfo,
    /// Anything else the platform model may ship in the future.
    Unknown(String),
}

impl SkillIntent {
    /// Maps a platform intent name to a [`SkillIntent`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "AMAZON.YesIntent" => Self::Yes,
            "AMAZON.NoIntent" => Self::No,
            "AMAZON.HelpIntent" => Self::Help,
            "AMAZON.StopIntent" => Self::Stop,
            "AMAZON.CancelIntent" => Self::Cancel,
            "GetBookInfo" | "GetAlltimePopularChildrenBooks" | "GetWeeklyPopularChildrenBooks" => {
                Self::BookInfo
            }
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_intents_map_to_variants() {
        assert_eq!(SkillIntent::from_name("AMAZON.YesIntent"), SkillIntent::Yes);
        assert_eq!(SkillIntent::from_name("AMAZON.NoIntent"), SkillIntent::No);
        assert_eq!(SkillIntent::from_name("AMAZON.HelpIntent"), SkillIntent::Help);
        assert_eq!(SkillIntent::from_name("AMAZON.StopIntent"), SkillIntent::Stop);
        assert_eq!(SkillIntent::from_name("AMAZON.CancelIntent"), SkillIntent::Cancel);
    }

    #[test]
    fn all_book_info_utterances_share_one_intent() {
        for name in [
            "GetBookInfo",
            "GetAlltimePopularChildrenBooks",
            "GetWeeklyPopularChildrenBooks",
        ] {
            assert_eq!(SkillIntent::from_name(name), SkillIntent::BookInfo);
        }
    }

    #[test]
    fn unrecognized_names_are_preserved() {
        assert_eq!(
            SkillIntent::from_name("AMAZON.FallbackIntent"),
            SkillIntent::Unknown("AMAZON.FallbackIntent".to_string())
        );
    }
}
