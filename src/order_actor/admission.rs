//! Order admission: the checks an order must pass before it is stored.
//!
//! `Order::on_create` runs them in this order, stopping at the first failure:
//!
//! 1. the customer exists and is active
//! 2. the menu, if any, exists and is on the catalog
//! 3. the pet, if any, exists, is active and belongs to the customer
//! 4. the allergy gate ([`admit`])
//! 5. quantity is at least 1
//!
//! Lookups go through the clients in [`OrderContext`]; the allergy gate itself is
//! pure and can be called without any actors running.

use super::error::OrderError;
use super::OrderContext;
use crate::allergy::{check_conflict, ConflictResult};
use crate::clients::ActorClient;
use crate::model::{Customer, CustomerId, Employee, EmployeeId, Menu, MenuId, Pet, PetId};

/// Refuses the order if the pet is allergic to anything in the meal.
///
/// Without both a meal and a pet there is nothing to compare, and the order passes.
pub fn admit(meal: Option<&Menu>, pet: Option<&Pet>) -> Result<(), OrderError> {
    let (Some(meal), Some(pet)) = (meal, pet) else {
        return Ok(());
    };
    let result = check_conflict(&meal.ingredients, &pet.allergies);
    if result.has_conflict {
        return Err(OrderError::AllergyConflict {
            pet_name: pet.name.clone(),
            conflicting_terms: result.conflicting_terms,
        });
    }
    Ok(())
}

/// Runs the checker for a meal/pet pair without placing anything.
pub fn dry_run(meal: &Menu, pet: &Pet) -> ConflictResult {
    check_conflict(&meal.ingredients, &pet.allergies)
}

fn lookup_failed(e: impl std::fmt::Display) -> OrderError {
    OrderError::ActorCommunicationError(e.to_string())
}

pub(crate) async fn active_customer(ctx: &OrderContext, id: CustomerId) -> Result<Customer, OrderError> {
    match ctx.customers.get(id).await.map_err(lookup_failed)? {
        Some(customer) if customer.is_active => Ok(customer),
        Some(_) => Err(OrderError::InvalidCustomer(format!("{id} is inactive"))),
        None => Err(OrderError::InvalidCustomer(format!("{id} not found"))),
    }
}

pub(crate) async fn active_menu(ctx: &OrderContext, id: MenuId) -> Result<Menu, OrderError> {
    match ctx.menus.get(id).await.map_err(lookup_failed)? {
        Some(menu) if menu.is_active => Ok(menu),
        Some(_) => Err(OrderError::InvalidMenu(format!("{id} is no longer available"))),
        None => Err(OrderError::InvalidMenu(format!("{id} not found"))),
    }
}

/// Loads an active pet. With `owner` set, the pet must also belong to that customer.
pub(crate) async fn active_pet(
    ctx: &OrderContext,
    id: PetId,
    owner: Option<CustomerId>,
) -> Result<Pet, OrderError> {
    match ctx.pets.get(id).await.map_err(lookup_failed)? {
        Some(pet) if !pet.is_active => Err(OrderError::InvalidPet(format!("{id} is inactive"))),
        Some(pet) => match owner {
            Some(owner) if pet.customer_id != owner => {
                Err(OrderError::InvalidPet(format!("{id} does not belong to {owner}")))
            }
            _ => Ok(pet),
        },
        None => Err(OrderError::InvalidPet(format!("{id} not found"))),
    }
}

pub(crate) async fn active_cook(ctx: &OrderContext, id: EmployeeId) -> Result<Employee, OrderError> {
    match ctx.employees.get(id).await.map_err(lookup_failed)? {
        Some(employee) if employee.can_cook() => Ok(employee),
        Some(employee) if !employee.is_active => {
            Err(OrderError::InvalidEmployee(format!("{id} is inactive")))
        }
        Some(_) => Err(OrderError::InvalidEmployee(format!("{id} is not a cook"))),
        None => Err(OrderError::InvalidEmployee(format!("{id} not found"))),
    }
}
