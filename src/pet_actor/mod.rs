//! # Pet Actor
//!
//! Manages pet profiles. Each pet carries the owner's free-text allergy list that
//! order admission checks meals against.
//!
//! ## Dependencies
//!
//! The actor is started with a [`CustomerClient`] as its context, used by
//! `Pet::on_create` to reject pets for unknown or inactive customers.
//!
//! ```rust,ignore
//! let (customer_actor, customers) = customer_actor::new(32);
//! let (pet_actor, pets) = pet_actor::new(32);
//! tokio::spawn(customer_actor.run(()));
//! tokio::spawn(pet_actor.run(customers.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::PetClient;
use crate::framework::ResourceActor;
use crate::model::Pet;

/// Creates a new Pet actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Pet>, PetClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PetClient::new(generic_client))
}
