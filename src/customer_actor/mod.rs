//! # Customer Actor
//!
//! Manages customer accounts.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] type for type-safe error handling
//! - [`actions`] - [`CustomerAction`] and [`CustomerActionResult`] (deactivate / activate)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Key Features
//!
//! - **Unique email**: a second account with the same address (any case) is refused
//! - **Soft delete**: accounts are deactivated, so their orders keep a valid owner

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::ResourceActor;
use crate::model::Customer;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
