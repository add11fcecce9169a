//! Error types for the Employee actor.

use crate::framework::FrameworkError;
use crate::model::FieldError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Employee already exists: {0}")]
    AlreadyExists(String),

    #[error("Employee validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FieldError> for EmployeeError {
    fn from(e: FieldError) -> Self {
        EmployeeError::ValidationError(e.to_string())
    }
}

impl From<FrameworkError> for EmployeeError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => EmployeeError::NotFound(id),
            FrameworkError::AlreadyExists(key) => EmployeeError::AlreadyExists(key),
            other => other
                .downcast_entity::<EmployeeError>()
                .unwrap_or_else(|e| EmployeeError::ActorCommunicationError(e.to_string())),
        }
    }
}
