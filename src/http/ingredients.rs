use axum::{extract::State, response::IntoResponse};

use super::extract::{PathId, ValidJson};
use super::response::{created, ok, ok_with};
use super::{fetch, AppError, AppState};
use crate::clients::ActorClient;
use crate::model::{Ingredient, IngredientCreate, IngredientId, IngredientUpdate};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.ingredients.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(params): ValidJson<IngredientCreate>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.ingredients.create_ingredient(params).await?;
    let ingredient: Ingredient = fetch(&state.ingredients, id).await?;
    Ok(created(ingredient, "Ingredient created"))
}

pub async fn get(
    State(state): State<AppState>,
    PathId(id): PathId<IngredientId>,
) -> Result<impl IntoResponse, AppError> {
    let ingredient: Ingredient = fetch(&state.ingredients, id).await?;
    Ok(ok(ingredient))
}

pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<IngredientId>,
    ValidJson(update): ValidJson<IngredientUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.ingredients.update_ingredient(id, update).await?))
}

/// Hard delete. Menus list ingredients as free text, so nothing points at the record.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId<IngredientId>,
) -> Result<impl IntoResponse, AppError> {
    state.ingredients.delete(id).await?;
    Ok(ok_with(id, "Ingredient deleted"))
}
