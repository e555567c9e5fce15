//! Catalog adapters: the real Goodreads-style XML client and a
//! configurable mock for tests.

mod goodreads;
mod mock;

pub use goodreads::{GoodreadsCatalog, GoodreadsConfig};
pub use mock::{MockCatalog, RecordedLookup};
