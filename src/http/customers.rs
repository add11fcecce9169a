use axum::{extract::State, response::IntoResponse};

use super::extract::{PathId, ValidJson};
use super::response::{created, ok, ok_with};
use super::{fetch, AppError, AppState};
use crate::clients::ActorClient;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.customers.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(params): ValidJson<CustomerCreate>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.customers.create_customer(params).await?;
    let customer: Customer = fetch(&state.customers, id).await?;
    Ok(created(customer, "Customer registered"))
}

pub async fn get(
    State(state): State<AppState>,
    PathId(id): PathId<CustomerId>,
) -> Result<impl IntoResponse, AppError> {
    let customer: Customer = fetch(&state.customers, id).await?;
    Ok(ok(customer))
}

pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<CustomerId>,
    ValidJson(update): ValidJson<CustomerUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.customers.update_customer(id, update).await?))
}

pub async fn deactivate(
    State(state): State<AppState>,
    PathId(id): PathId<CustomerId>,
) -> Result<impl IntoResponse, AppError> {
    state.customers.deactivate(id).await?;
    let customer: Customer = fetch(&state.customers, id).await?;
    Ok(ok_with(customer, "Customer deactivated"))
}
