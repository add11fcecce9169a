use axum::{extract::State, response::IntoResponse};

use super::extract::{PathId, ValidJson};
use super::response::{created, ok, ok_with};
use super::{fetch, AppError, AppState};
use crate::model::{Menu, MenuCreate, MenuId, MenuUpdate};

/// The public catalog: active menus only.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.menus.list_active().await?))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(params): ValidJson<MenuCreate>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.menus.create_menu(params).await?;
    let menu: Menu = fetch(&state.menus, id).await?;
    Ok(created(menu, "Menu created"))
}

pub async fn get(State(state): State<AppState>, PathId(id): PathId<MenuId>) -> Result<impl IntoResponse, AppError> {
    let menu: Menu = fetch(&state.menus, id).await?;
    Ok(ok(menu))
}

pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<MenuId>,
    ValidJson(update): ValidJson<MenuUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.menus.update_menu(id, update).await?))
}

/// Soft delete. Orders keep their meal snapshot either way.
pub async fn deactivate(
    State(state): State<AppState>,
    PathId(id): PathId<MenuId>,
) -> Result<impl IntoResponse, AppError> {
    state.menus.deactivate(id).await?;
    let menu: Menu = fetch(&state.menus, id).await?;
    Ok(ok_with(menu, "Menu removed from the catalog"))
}
