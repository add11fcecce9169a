//! Error types for the Order actor.

use crate::framework::FrameworkError;
use crate::model::{FieldError, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The ordering customer does not exist or is inactive.
    #[error("Invalid customer: {0}")]
    InvalidCustomer(String),

    /// The menu does not exist or is off the catalog.
    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    /// The pet does not exist, is inactive, or belongs to someone else.
    #[error("Invalid pet: {0}")]
    InvalidPet(String),

    /// The employee cannot be assigned to cook.
    #[error("Invalid employee: {0}")]
    InvalidEmployee(String),

    /// The meal contains something the pet is allergic to.
    #[error(
        "Cannot place order: {pet_name} is allergic to ingredients in this meal ({}). Please select a different menu item.",
        .conflicting_terms.join(", ")
    )]
    AllergyConflict {
        pet_name: String,
        conflicting_terms: Vec<String>,
    },

    /// The requested status change is not a legal move.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The order is delivered or cancelled and can no longer be edited.
    #[error("Order is {0} and can no longer be changed")]
    Closed(OrderStatus),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FieldError> for OrderError {
    fn from(e: FieldError) -> Self {
        OrderError::ValidationError(e.to_string())
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
