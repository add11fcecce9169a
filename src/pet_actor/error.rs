//! Error types for the Pet actor.

use crate::framework::FrameworkError;
use crate::model::FieldError;
use thiserror::Error;

/// Errors that can occur during pet operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PetError {
    /// The requested pet was not found.
    #[error("Pet not found: {0}")]
    NotFound(String),

    /// The owning customer does not exist or is inactive.
    #[error("Invalid owner: {0}")]
    InvalidOwner(String),

    /// The pet data provided is invalid.
    #[error("Pet validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FieldError> for PetError {
    fn from(e: FieldError) -> Self {
        PetError::ValidationError(e.to_string())
    }
}

impl From<FrameworkError> for PetError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => PetError::NotFound(id),
            other => other
                .downcast_entity::<PetError>()
                .unwrap_or_else(|e| PetError::ActorCommunicationError(e.to_string())),
        }
    }
}
