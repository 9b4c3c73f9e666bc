//! Error types for the Cart actor.
//!
//! Cart operations themselves cannot fail (unknown products are ignored), so the
//! only errors are a missing cart and a stopped actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
