//! # Menu Actor
//!
//! Manages the meal catalog. A menu's ingredient list is the input the allergy
//! checker compares against a pet's allergies when an order is placed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Menu`]
//! - [`error`] - [`MenuError`]
//! - [`actions`] - [`MenuAction`] (soft delete and restore)
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::Menu;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Menu>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
