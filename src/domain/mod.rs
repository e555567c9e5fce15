//! Domain layer - book records, eligibility classification, and the
//! dialog state machine.

pub mod book;
pub mod dialog;
pub mod eligibility;
pub mod messages;

pub use book::{AuthorRecord, BookRecord, SimilarBook};
pub use eligibility::{is_childrens_book, ShelfTag, CHILDRENS_SHELVES};
