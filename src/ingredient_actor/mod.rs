//! # Ingredient Actor
//!
//! Manages the ingredient catalog (stock items with an amount and a description).
//! Unlike menus, ingredients are hard-deleted: menus name their ingredients as
//! free text, so nothing holds an ingredient id.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::IngredientClient;
use crate::framework::ResourceActor;
use crate::model::Ingredient;

/// Creates a new Ingredient actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Ingredient>, IngredientClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, IngredientClient::new(generic_client))
}
