//! Mock book catalog for testing.
//!
//! Configurable to return queued records or errors, with call tracking so
//! tests can assert that no lookup happened on validation-only turns.
//!
//! # Example
//!
//! ```ignore
//! let catalog = MockCatalog::new().with_record(record);
//! let result = catalog.lookup(Some("Matilda"), None).await?;
//! assert_eq!(catalog.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{BookCatalog, CatalogError, CatalogRecord};

/// One recorded lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLookup {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Mock catalog with queued responses (consumed in order).
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    responses: Arc<Mutex<VecDeque<Result<CatalogRecord, CatalogError>>>>,
    calls: Arc<Mutex<Vec<RecordedLookup>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful lookup result.
    pub fn with_record(self, record: CatalogRecord) -> Self {
        self.push(Ok(record));
        self
    }

    /// Queues a lookup failure.
    pub fn with_error(self, error: CatalogError) -> Self {
        self.push(Err(error));
        self
    }

    /// Calls observed so far.
    pub fn calls(&self) -> Vec<RecordedLookup> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Number of lookups performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    fn push(&self, response: Result<CatalogRecord, CatalogError>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }
}

#[async_trait]
impl BookCatalog for MockCatalog {
    async fn lookup(
        &self,
        title: Option<&str>,
        author: Option<&str>,
    ) -> Result<CatalogRecord, CatalogError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedLookup {
                title: title.map(str::to_string),
                author: author.map(str::to_string),
            });
        }

        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| Err(CatalogError::transport("no mock response configured")))
    }
}
