//! Error types for the Customer actor.

use crate::framework::FrameworkError;
use crate::model::FieldError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Another customer already uses this email address or mobile number.
    #[error("Customer already exists: {0}")]
    AlreadyExists(String),

    /// The customer data provided is invalid.
    #[error("Customer validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FieldError> for CustomerError {
    fn from(e: FieldError) -> Self {
        CustomerError::ValidationError(e.to_string())
    }
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            FrameworkError::AlreadyExists(key) => CustomerError::AlreadyExists(key),
            other => other
                .downcast_entity::<CustomerError>()
                .unwrap_or_else(|e| CustomerError::ActorCommunicationError(e.to_string())),
        }
    }
}
