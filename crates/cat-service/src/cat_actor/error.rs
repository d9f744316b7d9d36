//! Error types for the Cat actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during cat operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatError {
    /// No cat has the requested id.
    #[error("Cat not found: {0}")]
    NotFound(String),

    /// The record was rejected on save. Holds one human-readable message per failed rule.
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    /// The persistence actor could not be reached or did not answer.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<CatError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => CatError::NotFound(id),
            Err(other) => CatError::ActorCommunicationError(other.to_string()),
        }
    }
}
