//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod book_catalog;

pub use book_catalog::{BookCatalog, CatalogError, CatalogRecord};
