//! Children's-book eligibility classification.
//!
//! A looked-up book only enters the dialog when at least one of its shelf
//! tags appears on a fixed allow-list of children's-book spellings. The
//! match is exact and case-sensitive: classification stays deterministic
//! and auditable, and widening it is a config change, not a code change.

use serde::{Deserialize, Serialize};

/// A shelf/tag name attached to a catalog record.
///
/// Shelf tags are consumed by [`is_childrens_book`] immediately after a
/// lookup and never stored in session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfTag {
    pub name: String,
}

impl ShelfTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Shelf spellings that qualify a book as a children's book.
pub const CHILDRENS_SHELVES: &[&str] = &[
    "children",
    "childrens",
    "children-s-book",
    "children-s-books",
    "kids",
    "kid",
    "fantasy-middlegrade",
    "middle-grade",
    "middle-grades",
];

/// Returns true if any shelf tag matches the children's allow-list.
///
/// Short-circuits on the first match. Pure: two calls over the same list
/// always agree.
pub fn is_childrens_book(shelves: &[ShelfTag]) -> bool {
    for shelf in shelves {
        if CHILDRENS_SHELVES.contains(&shelf.name.as_str()) {
            tracing::debug!(shelf = %shelf.name, "shelf matched children's allow-list");
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelves(names: &[&str]) -> Vec<ShelfTag> {
        names.iter().map(|n| ShelfTag::new(*n)).collect()
    }

    #[test]
    fn matches_any_allow_listed_shelf() {
        for name in CHILDRENS_SHELVES {
            assert!(
                is_childrens_book(&shelves(&["fiction", name])),
                "expected {name} to qualify"
            );
        }
    }

    #[test]
    fn rejects_unlisted_shelves() {
        assert!(!is_childrens_book(&shelves(&["fiction", "adult", "classics"])));
    }

    #[test]
    fn rejects_empty_shelf_list() {
        assert!(!is_childrens_book(&[]));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!is_childrens_book(&shelves(&["Children", "KIDS"])));
    }

    #[test]
    fn classification_is_idempotent() {
        let tags = shelves(&["fantasy", "kids"]);
        assert_eq!(is_childrens_book(&tags), is_childrens_book(&tags));
    }
}
