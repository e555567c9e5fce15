//! Book catalog port - interface to the third-party book catalog.
//!
//! The dialog machine performs exactly one lookup per book-info turn and
//! never retries; every failure mode is a terminal outcome for that turn.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{AuthorRecord, BookRecord};
use crate::domain::eligibility::ShelfTag;

/// A successful catalog lookup.
///
/// The shelf list is consumed immediately by the eligibility classifier
/// and then discarded; only `book` and `author` survive into session
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub book: BookRecord,
    pub author: AuthorRecord,
    pub shelves: Vec<ShelfTag>,
}

/// Failure modes of a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-success status code.
    #[error("catalog returned status {status}")]
    BadStatus { status: u16 },

    /// The request never completed (connection failure or timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected schema.
    #[error("malformed catalog response: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn bad_status(status: u16) -> Self {
        CatalogError::BadStatus { status }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        CatalogError::Transport(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        CatalogError::Malformed(message.into())
    }
}

/// Port for looking up a book by title and/or author.
///
/// Implementations issue a single request; absent parameters are omitted
/// from the query entirely, never sent as blank values.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Looks up a book. At least one of `title` / `author` is expected to
    /// be present; callers validate this before invoking the port.
    async fn lookup(
        &self,
        title: Option<&str>,
        author: Option<&str>,
    ) -> Result<CatalogRecord, CatalogError>;
}
