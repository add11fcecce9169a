//! # Employee Actor
//!
//! Manages staff accounts (`Cook` or `Admin`). The order actor asks it whether an
//! employee may be assigned to cook an order.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::EmployeeClient;
use crate::framework::ResourceActor;
use crate::model::Employee;

/// Creates a new Employee actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Employee>, EmployeeClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, EmployeeClient::new(generic_client))
}
