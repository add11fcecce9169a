//! Error types for the Menu actor.

use crate::framework::FrameworkError;
use crate::model::FieldError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu not found: {0}")]
    NotFound(String),

    /// Menu names are unique, ignoring case.
    #[error("Menu already exists: {0}")]
    AlreadyExists(String),

    #[error("Menu validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FieldError> for MenuError {
    fn from(e: FieldError) -> Self {
        MenuError::ValidationError(e.to_string())
    }
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::AlreadyExists(key) => MenuError::AlreadyExists(key),
            other => other
                .downcast_entity::<MenuError>()
                .unwrap_or_else(|e| MenuError::ActorCommunicationError(e.to_string())),
        }
    }
}
