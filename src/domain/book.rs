//! Book and author records as stored in session state.
//!
//! These are the normalized shapes produced by the catalog lookup adapter.
//! All fields other than the title are optional: the catalog emits empty
//! elements for data it does not hold, and speech composition degrades
//! gracefully rather than failing the turn.

use serde::{Deserialize, Serialize};

/// A book as returned by the catalog and carried through the dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title (always present; a record without one is malformed).
    pub title: String,
    /// Prose description, when the catalog has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Year of first publication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u32>,
    /// Average reader rating on the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f32>,
    /// Number of ratings behind the average.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u64>,
    /// Catalog page for the book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Small cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    /// Full-size cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Books the catalog lists as similar, in catalog order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similar_books: Vec<SimilarBook>,
}

/// A similar-book entry. Only the title survives into session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarBook {
    pub title: String,
}

/// The author of a looked-up book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
}

impl BookRecord {
    /// Titles of the similar books, in catalog order.
    pub fn similar_titles(&self) -> Vec<&str> {
        self.similar_books.iter().map(|b| b.title.as_str()).collect()
    }
}
