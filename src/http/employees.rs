use axum::{extract::State, response::IntoResponse};

use super::extract::{PathId, ValidJson};
use super::response::{created, ok, ok_with};
use super::{fetch, AppError, AppState};
use crate::clients::ActorClient;
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.employees.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(params): ValidJson<EmployeeCreate>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.employees.create_employee(params).await?;
    let employee: Employee = fetch(&state.employees, id).await?;
    Ok(created(employee, "Employee registered"))
}

pub async fn get(
    State(state): State<AppState>,
    PathId(id): PathId<EmployeeId>,
) -> Result<impl IntoResponse, AppError> {
    let employee: Employee = fetch(&state.employees, id).await?;
    Ok(ok(employee))
}

pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<EmployeeId>,
    ValidJson(update): ValidJson<EmployeeUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.employees.update_employee(id, update).await?))
}

pub async fn deactivate(
    State(state): State<AppState>,
    PathId(id): PathId<EmployeeId>,
) -> Result<impl IntoResponse, AppError> {
    state.employees.deactivate(id).await?;
    let employee: Employee = fetch(&state.employees, id).await?;
    Ok(ok_with(employee, "Employee deactivated"))
}
