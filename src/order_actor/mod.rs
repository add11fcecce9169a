//! # Order Actor
//!
//! Manages orders: admission on create, staff-driven status changes, cancellation
//! and cook assignment.
//!
//! ## Structure
//!
//! - [`admission`] - the checks run before an order is stored, including the allergy gate
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The order actor reads from the customer, pet, menu and employee actors, which
//! never call back. The graph stays acyclic, so shutdown by dropping clients works.

pub mod actions;
pub mod admission;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::DEFAULT_CANCEL_REASON;
pub use error::*;

use crate::clients::{CustomerClient, EmployeeClient, MenuClient, OrderClient, PetClient};
use crate::framework::ResourceActor;
use crate::model::Order;

/// The clients the order actor needs, injected through `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub customers: CustomerClient,
    pub pets: PetClient,
    pub menus: MenuClient,
    pub employees: EmployeeClient,
}

/// Creates a new Order actor and its client.
///
/// The client keeps its own copy of `ctx` for read-only checks that don't go
/// through the order actor (see [`OrderClient::check_allergies`]). The actor still
/// has to be started with `actor.run(ctx)`.
pub fn new(buffer_size: usize, ctx: OrderContext) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client, ctx))
}
