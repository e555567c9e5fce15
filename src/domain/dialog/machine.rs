//! The dialog state machine.
//!
//! Consumes the current session state plus one incoming intent, optionally
//! performs a single catalog lookup, and yields the complete outcome of
//! the turn: new session state, speech, card content, and whether the
//! session ends. All lookup failures are absorbed here and converted into
//! user-visible speech; nothing below the platform boundary panics or
//! returns a partial turn.

use crate::domain::book::BookRecord;
use crate::domain::dialog::intent::SkillIntent;
use crate::domain::dialog::session::SessionState;
use crate::domain::dialog::stage::RequestStage;
use crate::domain::eligibility::is_childrens_book;
use crate::domain::messages;
use crate::ports::BookCatalog;

/// Slot values extracted from a book-info utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotValues {
    pub book: Option<String>,
    pub author: Option<String>,
}

impl SlotValues {
    pub fn new(book: Option<String>, author: Option<String>) -> Self {
        Self { book, author }
    }

    /// True when neither slot carries a value: the utterance is unusable.
    pub fn is_empty(&self) -> bool {
        self.book.is_none() && self.author.is_none()
    }

    /// Human-readable label for what was requested, for cards and the
    /// ineligible message ("Harry Potter from J.K. Rowling").
    pub fn requested_label(&self) -> String {
        match (self.book.as_deref(), self.author.as_deref()) {
            (Some(book), Some(author)) => format!("{book} from {author}"),
            (Some(book), None) => book.to_string(),
            (None, Some(author)) => format!("books from {author}"),
            (None, None) => String::new(),
        }
    }
}

/// Cover image URLs attached to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

/// The complete outcome of one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// Session state to hand back to the platform for the next turn.
    pub session: SessionState,
    pub card_title: String,
    pub speech: String,
    pub reprompt: Option<String>,
    pub should_end_session: bool,
    /// Cover image, attached only when a book-info turn loaded a book.
    pub card_image: Option<CardImage>,
}

impl Turn {
    /// A turn that keeps the dialog open, with the standard reprompt.
    fn open(session: SessionState, card_title: impl Into<String>, speech: impl Into<String>) -> Self {
        Self {
            session,
            card_title: card_title.into(),
            speech: speech.into(),
            reprompt: Some(messages::message_reprompt().to_string()),
            should_end_session: false,
            card_image: None,
        }
    }

    /// A turn that ends the session.
    fn closing(session: SessionState, card_title: impl Into<String>, speech: impl Into<String>) -> Self {
        Self {
            session,
            card_title: card_title.into(),
            speech: speech.into(),
            reprompt: None,
            should_end_session: true,
            card_image: None,
        }
    }

    fn with_image(mut self, image: Option<CardImage>) -> Self {
        self.card_image = image;
        self
    }
}

/// Dialog state machine over a [`BookCatalog`] port.
pub struct DialogMachine<'a> {
    catalog: &'a dyn BookCatalog,
}

impl<'a> DialogMachine<'a> {
    pub fn new(catalog: &'a dyn BookCatalog) -> Self {
        Self { catalog }
    }

    /// Skill launch: greeting over a fresh session.
    pub fn launch(&self) -> Turn {
        let mut turn = Turn::open(
            SessionState::default(),
            messages::card_greeting(),
            messages::message_greeting(),
        );
        turn.reprompt = Some(messages::reprompt_greeting().to_string());
        turn
    }

    /// Platform-initiated session end: goodbye, state cleared.
    pub fn session_ended(&self) -> Turn {
        Turn::closing(
            SessionState::default(),
            messages::card_good_bye(),
            messages::message_good_bye(),
        )
    }

    /// Dispatches one intent against the current session state.
    pub async fn intent(&self, state: SessionState, intent: &SkillIntent, slots: &SlotValues) -> Turn {
        match intent {
            SkillIntent::Help => Turn::open(state, messages::card_help(), messages::message_help()),
            SkillIntent::Stop | SkillIntent::Cancel | SkillIntent::No => self.session_ended(),
            SkillIntent::Yes => self.advance(state),
            SkillIntent::BookInfo => self.book_info(state, slots).await,
            SkillIntent::Unknown(name) => {
                tracing::warn!(intent = %name, "unrecognized intent, prompting for a valid request");
                Turn::open(
                    state,
                    messages::card_invalid_request(),
                    messages::message_invalid_request(),
                )
            }
        }
    }

    /// Affirmative answer: advance one stage and emit its content.
    fn advance(&self, mut state: SessionState) -> Turn {
        let (book, author) = match (state.book.clone(), state.author.clone()) {
            (Some(book), Some(author)) => (book, author),
            // A yes with nothing on offer; keep the dialog open.
            _ => {
                return Turn::open(
                    state,
                    messages::card_invalid_request(),
                    messages::message_invalid_request(),
                )
            }
        };

        let entered = state.last_request_stage.next();
        if entered.is_terminal() {
            return self.session_ended();
        }

        let answered = state.decision.take();
        let (speech, next_decision) = match entered {
            RequestStage::Basic => (
                messages::message_basic_facts(&book, &author),
                Some(format!("Description of {} from {}", book.title, author.name)),
            ),
            RequestStage::Description => (
                messages::message_description(&book),
                Some(format!("Books similar to {}", book.title)),
            ),
            RequestStage::SimilarBooks => (
                messages::message_similar_books(&book, &author),
                Some(format!("More books connected to {}", author.name)),
            ),
            RequestStage::MoreBooksFromAuthor => {
                (messages::message_more_books_from_author(&book, &author), None)
            }
            // next() yields neither of these when the stage is not terminal.
            RequestStage::None | RequestStage::Last => {
                return Turn::open(
                    state,
                    messages::card_invalid_request(),
                    messages::message_invalid_request(),
                )
            }
        };

        let mut card_title = format!("{} - {} from {}", messages::SKILL_NAME, book.title, author.name);
        if let Some(decision) = answered {
            card_title.push_str(&format!(" - {decision}"));
        }

        state.last_request_stage = entered;
        state.decision = next_decision;
        Turn::open(state, card_title, speech)
    }

    /// Book-info intent: validate slots, perform the single lookup, and
    /// classify the result.
    async fn book_info(&self, mut state: SessionState, slots: &SlotValues) -> Turn {
        if slots.is_empty() {
            return Turn::open(
                state,
                messages::card_invalid_request(),
                messages::message_invalid_request(),
            );
        }

        let label = slots.requested_label();
        let card_title = format!("{} - {}", messages::SKILL_NAME, label);
        tracing::info!(
            title = slots.book.as_deref().unwrap_or(""),
            author = slots.author.as_deref().unwrap_or(""),
            "looking up book in catalog"
        );

        let record = match self
            .catalog
            .lookup(slots.book.as_deref(), slots.author.as_deref())
            .await
        {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "catalog lookup failed");
                return Turn::closing(state, card_title, messages::message_invalid_request());
            }
        };

        if !is_childrens_book(&record.shelves) {
            tracing::info!(title = %record.book.title, "book rejected by eligibility classifier");
            return Turn::closing(
                state,
                messages::card_ineligible_request(),
                messages::message_ineligible_request(&label),
            );
        }

        let image = card_image_for(&record.book);
        let speech = messages::message_basic_facts(&record.book, &record.author);
        let decision = format!(
            "Description of {} from {}",
            record.book.title, record.author.name
        );
        state.load_book(record.book, record.author);
        state.decision = Some(decision);
        Turn::open(state, card_title, speech).with_image(image)
    }
}

fn card_image_for(book: &BookRecord) -> Option<CardImage> {
    if book.small_image_url.is_none() && book.image_url.is_none() {
        return None;
    }
    Some(CardImage {
        small_image_url: book.small_image_url.clone(),
        large_image_url: book.image_url.clone(),
    })
}
