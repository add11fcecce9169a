use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use super::extract::{PathId, ValidJson};
use super::response::{created, ok, ok_with};
use super::{fetch, AppError, AppState};
use crate::clients::OrderFilter;
use crate::model::{
    EmployeeId, FieldError, MenuId, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, PetId, Validate,
};

/// Body of `POST /orders/check`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllergyCheckRequest {
    pub menu_id: MenuId,
    pub pet_id: PetId,
}

impl Validate for AllergyCheckRequest {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

/// Body of `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusChange {
    pub status: OrderStatus,
}

impl Validate for StatusChange {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

/// Body of `PUT /orders/{id}/cook`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookAssignment {
    pub employee_id: EmployeeId,
}

impl Validate for CookAssignment {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CancelQuery {
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusView {
    pub id: OrderId,
    pub status: OrderStatus,
}

pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<OrderFilter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = filter?;
    Ok(ok(state.orders.list_orders(filter).await?))
}

/// Places an order. Admission runs in the order actor; an allergy conflict comes
/// back as a 409 naming the pet and the offending ingredients.
pub async fn place(
    State(state): State<AppState>,
    ValidJson(params): ValidJson<OrderCreate>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.orders.place_order(params).await?;
    let order: Order = fetch(&state.orders, id).await?;
    Ok(created(order, "Order placed"))
}

/// Dry run: reports conflicts without creating anything.
pub async fn check(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<AllergyCheckRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = state.orders.check_allergies(request.menu_id, request.pet_id).await?;
    Ok(ok(result))
}

pub async fn summary(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.orders.summary().await?))
}

pub async fn get(State(state): State<AppState>, PathId(id): PathId<OrderId>) -> Result<impl IntoResponse, AppError> {
    let order: Order = fetch(&state.orders, id).await?;
    Ok(ok(order))
}

pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<OrderId>,
    ValidJson(update): ValidJson<OrderUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.orders.update_instructions(id, update).await?))
}

pub async fn cancel(
    State(state): State<AppState>,
    PathId(id): PathId<OrderId>,
    query: Result<Query<CancelQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    state.orders.cancel(id, query.reason).await?;
    let order: Order = fetch(&state.orders, id).await?;
    Ok(ok_with(order, "Order cancelled"))
}

pub async fn change_status(
    State(state): State<AppState>,
    PathId(id): PathId<OrderId>,
    ValidJson(change): ValidJson<StatusChange>,
) -> Result<impl IntoResponse, AppError> {
    let status = state.orders.change_status(id, change.status).await?;
    Ok(ok(StatusView { id, status }))
}

pub async fn assign_cook(
    State(state): State<AppState>,
    PathId(id): PathId<OrderId>,
    ValidJson(assignment): ValidJson<CookAssignment>,
) -> Result<impl IntoResponse, AppError> {
    state.orders.assign_cook(id, assignment.employee_id).await?;
    let order: Order = fetch(&state.orders, id).await?;
    Ok(ok_with(order, "Cook assigned"))
}
