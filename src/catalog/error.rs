//! Error types for the catalog store.

use thiserror::Error;

/// Errors that can occur while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product was supplied without an id.
    #[error("Product at position {0} has an empty id")]
    EmptyId(usize),

    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// The catalog source could not be parsed.
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}
