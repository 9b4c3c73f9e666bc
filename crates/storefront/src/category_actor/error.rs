//! Error types for the Category actor.

use thiserror::Error;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// The requested category was not found.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// The category name was empty.
    #[error("Category name is required")]
    MissingName,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CategoryError {
    fn from(msg: String) -> Self {
        CategoryError::ActorCommunicationError(msg)
    }
}
