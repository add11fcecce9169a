//! Orders, their subscription plans and the status state machine.
//!
//! An admitted order keeps a denormalized copy of the meal and the pet it was placed
//! for ([`MealSnapshot`], [`PetSnapshot`]). Editing the menu or the pet later never
//! changes an order already on file.

use crate::model::validation::{self, FieldError, Validate};
use crate::model::{CustomerId, EmployeeId, Menu, MenuId, Pet, PetId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Subscription length. The price is fixed per plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    #[serde(rename = "7 Days")]
    SevenDays,
    #[serde(rename = "14 Days")]
    FourteenDays,
    #[serde(rename = "30 Days")]
    ThirtyDays,
}

impl Plan {
    /// Price of one unit of the plan.
    pub fn price(self) -> u32 {
        match self {
            Plan::SevenDays => 399,
            Plan::FourteenDays => 699,
            Plan::ThirtyDays => 999,
        }
    }

    /// Price of `quantity` units, or `None` if it does not fit in a `u32`.
    pub fn total(self, quantity: u32) -> Option<u32> {
        self.price().checked_mul(quantity)
    }

    pub fn days(self) -> u32 {
        match self {
            Plan::SevenDays => 7,
            Plan::FourteenDays => 14,
            Plan::ThirtyDays => 30,
        }
    }
}

/// Order status.
///
/// ```text
/// pending -> preparing -> cooking -> completed -> delivered
///    |          |           |           |
///    +----------+-----------+-----------+-------> cancelled
/// ```
///
/// Forward moves may skip steps. `delivered` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Cooking,
    Completed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Cooking,
        OrderStatus::Completed,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Cooking => "cooking",
            OrderStatus::Completed => "completed",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether a staff action may move an order from `self` to `next`.
    ///
    /// Staying put is allowed and treated as a no-op by the caller.
    pub fn can_become(self, next: OrderStatus) -> bool {
        if self == next {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        // Variant order is the forward order of the pipeline.
        next == OrderStatus::Cancelled || next > self
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

/// The meal as it was when the order was admitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSnapshot {
    pub menu_id: MenuId,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub price: f64,
}

impl From<&Menu> for MealSnapshot {
    fn from(menu: &Menu) -> Self {
        Self {
            menu_id: menu.id,
            name: menu.name.clone(),
            description: menu.description.clone(),
            ingredients: menu.ingredients.clone(),
            price: menu.price,
        }
    }
}

/// The pet as it was when the order was admitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetSnapshot {
    pub pet_id: PetId,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub allergies: Vec<String>,
}

impl From<&Pet> for PetSnapshot {
    fn from(pet: &Pet) -> Self {
        Self {
            pet_id: pet.id,
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            age: pet.age,
            weight: pet.weight,
            allergies: pet.allergies.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub menu_id: Option<MenuId>,
    pub pet_id: Option<PetId>,
    pub plan: Plan,
    pub quantity: u32,
    /// Plan price times quantity.
    pub price: u32,
    pub status: OrderStatus,
    pub meal: Option<MealSnapshot>,
    pub pet: Option<PetSnapshot>,
    pub special_instructions: Option<String>,
    pub cook_employee_id: Option<EmployeeId>,
    pub cancellation_reason: Option<String>,
    pub ordered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_quantity() -> u32 {
    1
}

/// Payload for placing an order. The price is computed, never supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub menu_id: Option<MenuId>,
    pub pet_id: Option<PetId>,
    pub plan: Plan,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderUpdate {
    pub special_instructions: Option<String>,
}

pub const MAX_INSTRUCTIONS_LEN: usize = 500;

fn validate_instructions(value: Option<&String>) -> validation::Result<()> {
    validation::validate_optional(value, |v| {
        if v.chars().count() > MAX_INSTRUCTIONS_LEN {
            return Err(FieldError::new(
                "special_instructions",
                format!("must be at most {MAX_INSTRUCTIONS_LEN} characters"),
            ));
        }
        Ok(())
    })
}

// Quantity is checked during admission, after the allergy check.
impl Validate for OrderCreate {
    fn validate(&self) -> validation::Result<()> {
        validate_instructions(self.special_instructions.as_ref())
    }
}

impl Validate for OrderUpdate {
    fn validate(&self) -> validation::Result<()> {
        validate_instructions(self.special_instructions.as_ref())
    }
}

/// Largest quantity a single order may carry.
pub const MAX_QUANTITY: u32 = 100;

/// Checks the quantity bounds and returns the total price for `plan`.
pub fn quote(plan: Plan, quantity: u32) -> Result<u32, FieldError> {
    validation::validate_min("quantity", quantity, 1)?;
    validation::validate_max("quantity", quantity, MAX_QUANTITY)?;
    plan.total(quantity).ok_or_else(|| FieldError::new("quantity", "is too large"))
}

impl Order {
    /// A pending order without snapshots. Admission fills those in and settles
    /// the price through [`quote`].
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            customer_id: params.customer_id,
            menu_id: params.menu_id,
            pet_id: params.pet_id,
            plan: params.plan,
            quantity: params.quantity,
            price: params.plan.total(params.quantity).unwrap_or_default(),
            status: OrderStatus::Pending,
            meal: None,
            pet: None,
            special_instructions: params.special_instructions,
            cook_employee_id: None,
            cancellation_reason: None,
            ordered_at: now,
            updated_at: now,
        }
    }
}

/// Number of orders in each status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub cooking: usize,
    pub completed: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl OrderSummary {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut summary = Self::default();
        for order in orders {
            summary.total += 1;
            let slot = match order.status {
                OrderStatus::Pending => &mut summary.pending,
                OrderStatus::Preparing => &mut summary.preparing,
                OrderStatus::Cooking => &mut summary.cooking,
                OrderStatus::Completed => &mut summary.completed,
                OrderStatus::Delivered => &mut summary.delivered,
                OrderStatus::Cancelled => &mut summary.cancelled,
            };
            *slot += 1;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn test_forward_moves_may_skip_steps() {
        assert!(Pending.can_become(Preparing));
        assert!(Pending.can_become(Cooking));
        assert!(Preparing.can_become(Delivered));
        assert!(Completed.can_become(Delivered));
    }

    #[test]
    fn test_backward_moves_are_rejected() {
        assert!(!Cooking.can_become(Preparing));
        assert!(!Completed.can_become(Pending));
    }

    #[test]
    fn test_cancel_only_from_non_terminal() {
        for status in [Pending, Preparing, Cooking, Completed] {
            assert!(status.can_become(Cancelled), "{status} -> cancelled");
        }
        assert!(!Delivered.can_become(Cancelled));
    }

    #[test]
    fn test_nothing_leaves_a_terminal_state() {
        for next in OrderStatus::ALL {
            if next != Delivered {
                assert!(!Delivered.can_become(next));
            }
            if next != Cancelled {
                assert!(!Cancelled.can_become(next));
            }
        }
    }

    #[test]
    fn test_same_status_is_allowed() {
        for status in OrderStatus::ALL {
            assert!(status.can_become(status));
        }
    }

    #[test]
    fn test_status_parses_and_serializes_lowercase() {
        assert_eq!("Cooking".parse::<OrderStatus>().unwrap(), Cooking);
        assert_eq!(" delivered ".parse::<OrderStatus>().unwrap(), Delivered);
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert_eq!(serde_json::to_string(&Preparing).unwrap(), "\"preparing\"");
    }

    #[test]
    fn test_plan_prices_and_wire_names() {
        assert_eq!(Plan::SevenDays.price(), 399);
        assert_eq!(Plan::FourteenDays.price(), 699);
        assert_eq!(Plan::ThirtyDays.price(), 999);
        assert_eq!(Plan::ThirtyDays.days(), 30);
        let plan: Plan = serde_json::from_str("\"14 Days\"").unwrap();
        assert_eq!(plan, Plan::FourteenDays);
    }

    #[test]
    fn test_quote_bounds_quantity() {
        assert_eq!(quote(Plan::ThirtyDays, MAX_QUANTITY).unwrap(), 99_900);
        assert!(quote(Plan::SevenDays, 0).is_err());
        let err = quote(Plan::ThirtyDays, u32::MAX).unwrap_err();
        assert_eq!(err.field, "quantity");
        assert_eq!(Plan::ThirtyDays.total(u32::MAX), None);
    }

    #[test]
    fn test_price_is_plan_times_quantity() {
        let order = Order::new(
            OrderId(1),
            OrderCreate {
                customer_id: CustomerId(1),
                menu_id: None,
                pet_id: None,
                plan: Plan::FourteenDays,
                quantity: 3,
                special_instructions: None,
            },
        );
        assert_eq!(order.price, 2097);
        assert_eq!(order.status, Pending);
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let params: OrderCreate =
            serde_json::from_str(r#"{"customer_id": 4, "plan": "7 Days"}"#).unwrap();
        assert_eq!(params.quantity, 1);
        assert_eq!(params.customer_id, CustomerId(4));
        assert!(params.pet_id.is_none());
    }

    #[test]
    fn test_instructions_length_is_bounded() {
        let mut update = OrderUpdate {
            special_instructions: Some("x".repeat(MAX_INSTRUCTIONS_LEN)),
        };
        assert!(update.validate().is_ok());

        update.special_instructions = Some("x".repeat(MAX_INSTRUCTIONS_LEN + 1));
        let err = update.validate().unwrap_err();
        assert_eq!(err.field, "special_instructions");
    }
}
