use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use crate::customer_actor::CustomerError;
use crate::employee_actor::EmployeeError;
use crate::ingredient_actor::IngredientError;
use crate::menu_actor::MenuError;
use crate::model::FieldError;
use crate::order_actor::OrderError;
use crate::pet_actor::PetError;

/// Everything a handler can fail with, already sorted by status code.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// 409 with the pet and the offending terms in `details`.
    #[error("{message}")]
    AllergyConflict {
        message: String,
        pet_name: String,
        conflicting_terms: Vec<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::AllergyConflict { .. } => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            AppError::AllergyConflict {
                pet_name,
                conflicting_terms,
                ..
            } => Some(json!({
                "pet_name": pet_name,
                "conflicting_terms": conflicting_terms,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });
        if let Some(details) = self.details() {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

impl From<FieldError> for AppError {
    fn from(e: FieldError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl From<CustomerError> for AppError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::NotFound(_) => AppError::NotFound(e.to_string()),
            CustomerError::AlreadyExists(_) => AppError::Conflict(e.to_string()),
            CustomerError::ValidationError(_) => AppError::BadRequest(e.to_string()),
            CustomerError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<EmployeeError> for AppError {
    fn from(e: EmployeeError) -> Self {
        match e {
            EmployeeError::NotFound(_) => AppError::NotFound(e.to_string()),
            EmployeeError::AlreadyExists(_) => AppError::Conflict(e.to_string()),
            EmployeeError::ValidationError(_) => AppError::BadRequest(e.to_string()),
            EmployeeError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<MenuError> for AppError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::NotFound(_) => AppError::NotFound(e.to_string()),
            MenuError::AlreadyExists(_) => AppError::Conflict(e.to_string()),
            MenuError::ValidationError(_) => AppError::BadRequest(e.to_string()),
            MenuError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<IngredientError> for AppError {
    fn from(e: IngredientError) -> Self {
        match e {
            IngredientError::NotFound(_) => AppError::NotFound(e.to_string()),
            IngredientError::AlreadyExists(_) => AppError::Conflict(e.to_string()),
            IngredientError::ValidationError(_) => AppError::BadRequest(e.to_string()),
            IngredientError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<PetError> for AppError {
    fn from(e: PetError) -> Self {
        match e {
            // The owner comes from the path, so a bad owner is an unknown resource
            PetError::NotFound(_) | PetError::InvalidOwner(_) => AppError::NotFound(e.to_string()),
            PetError::ValidationError(_) => AppError::BadRequest(e.to_string()),
            PetError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => AppError::NotFound(e.to_string()),
            OrderError::InvalidCustomer(_)
            | OrderError::InvalidMenu(_)
            | OrderError::InvalidPet(_)
            | OrderError::InvalidEmployee(_)
            | OrderError::ValidationError(_) => AppError::BadRequest(e.to_string()),
            OrderError::AllergyConflict {
                ref pet_name,
                ref conflicting_terms,
            } => AppError::AllergyConflict {
                message: e.to_string(),
                pet_name: pet_name.clone(),
                conflicting_terms: conflicting_terms.clone(),
            },
            OrderError::InvalidTransition { .. } | OrderError::Closed(_) => AppError::Conflict(e.to_string()),
            OrderError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(CustomerError::NotFound("customer_1".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(MenuError::AlreadyExists("salmon meal".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(FieldError::new("name", "cannot be empty")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(OrderError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Pending,
            })
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(OrderError::InvalidMenu("menu_9 not found".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(PetError::ActorCommunicationError("closed".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_allergy_conflict_carries_details() {
        let err = AppError::from(OrderError::AllergyConflict {
            pet_name: "Coffee".to_string(),
            conflicting_terms: vec!["Salmon".to_string()],
        });

        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert!(err.to_string().contains("Coffee"));
        assert_eq!(
            err.details(),
            Some(json!({"pet_name": "Coffee", "conflicting_terms": ["Salmon"]}))
        );
    }
}
