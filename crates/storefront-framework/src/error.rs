//! # Framework Errors
//!
//! Errors raised by the resource plumbing itself. Each storefront client maps these
//! into its own resource error through `ActorClient::map_error`.

/// Errors that can occur within the resource framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns the entity error if this wraps one of type `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
