//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The request was malformed (empty product id, cumulative quantity overflow).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested quantity is not a positive amount.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The product is flagged as unavailable.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// The product id is not part of the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
