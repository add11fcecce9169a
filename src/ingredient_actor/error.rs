use crate::framework::FrameworkError;
use crate::model::FieldError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngredientError {
    #[error("Ingredient not found: {0}")]
    NotFound(String),

    #[error("Ingredient already exists: {0}")]
    AlreadyExists(String),

    #[error("Ingredient validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FieldError> for IngredientError {
    fn from(e: FieldError) -> Self {
        IngredientError::ValidationError(e.to_string())
    }
}

impl From<FrameworkError> for IngredientError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => IngredientError::NotFound(id),
            FrameworkError::AlreadyExists(key) => IngredientError::AlreadyExists(key),
            other => other
                .downcast_entity::<IngredientError>()
                .unwrap_or_else(|e| IngredientError::ActorCommunicationError(e.to_string())),
        }
    }
}
