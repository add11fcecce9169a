use axum::{extract::State, response::IntoResponse};

use super::extract::{PathId, ValidJson};
use super::response::{created, ok, ok_with};
use super::{fetch, AppError, AppState};
use crate::model::{Customer, CustomerId, Pet, PetId, PetProfile, PetUpdate};

/// Active pets of one customer. An unknown customer is a 404, not an empty list.
pub async fn list_for_customer(
    State(state): State<AppState>,
    PathId(customer_id): PathId<CustomerId>,
) -> Result<impl IntoResponse, AppError> {
    let _: Customer = fetch(&state.customers, customer_id).await?;
    Ok(ok(state.pets.list_for_customer(customer_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    PathId(customer_id): PathId<CustomerId>,
    ValidJson(profile): ValidJson<PetProfile>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.pets.create_pet(customer_id, profile).await?;
    let pet: Pet = fetch(&state.pets, id).await?;
    Ok(created(pet, "Pet added"))
}

pub async fn get(State(state): State<AppState>, PathId(id): PathId<PetId>) -> Result<impl IntoResponse, AppError> {
    let pet: Pet = fetch(&state.pets, id).await?;
    Ok(ok(pet))
}

pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<PetId>,
    ValidJson(update): ValidJson<PetUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.pets.update_pet(id, update).await?))
}

pub async fn deactivate(
    State(state): State<AppState>,
    PathId(id): PathId<PetId>,
) -> Result<impl IntoResponse, AppError> {
    state.pets.deactivate(id).await?;
    let pet: Pet = fetch(&state.pets, id).await?;
    Ok(ok_with(pet, "Pet removed"))
}
