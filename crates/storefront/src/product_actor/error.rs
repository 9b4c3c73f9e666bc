//! Error types for the Product actor.

use thiserror::Error;

use crate::model::CategoryId;
use crate::validation::Violation;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The name or price broke a form rule.
    #[error("{0}")]
    Invalid(#[from] Violation),

    /// The product points at a category that does not exist.
    #[error("Category not found: {0}")]
    UnknownCategory(CategoryId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
