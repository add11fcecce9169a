//! [`ActorEntity`] implementation for [`Order`].
//!
//! Admission lives in `on_create`: by the time an order is stored it has passed every
//! check in [`admission`](super::admission) and carries snapshots of its meal and pet.

use super::actions::{OrderAction, OrderActionResult};
use super::admission;
use super::error::OrderError;
use super::OrderContext;
use crate::framework::ActorEntity;
use crate::model::order;
use crate::model::{MealSnapshot, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, PetSnapshot};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

/// Reason recorded when a cancellation doesn't give one.
pub const DEFAULT_CANCEL_REASON: &str = "Customer requested cancellation";

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        debug!(order_id = %self.id, customer_id = %self.customer_id, "Admitting order");

        admission::active_customer(ctx, self.customer_id).await?;
        let menu = match self.menu_id {
            Some(id) => Some(admission::active_menu(ctx, id).await?),
            None => None,
        };
        let pet = match self.pet_id {
            Some(id) => Some(admission::active_pet(ctx, id, Some(self.customer_id)).await?),
            None => None,
        };
        admission::admit(menu.as_ref(), pet.as_ref())?;
        self.price = order::quote(self.plan, self.quantity)?;

        self.meal = menu.as_ref().map(MealSnapshot::from);
        self.pet = pet.as_ref().map(PetSnapshot::from);
        info!(order_id = %self.id, price = self.price, "Order admitted");
        Ok(())
    }

    /// Only the special instructions are editable, and only while the order is open.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), Self::Error> {
        if self.status.is_terminal() {
            return Err(OrderError::Closed(self.status));
        }
        if let Some(text) = update.special_instructions {
            let text = text.trim();
            self.special_instructions = (!text.is_empty()).then(|| text.to_string());
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::ChangeStatus(next) => {
                self.move_to(next, None)?;
                Ok(OrderActionResult::ChangeStatus(self.status))
            }
            OrderAction::Cancel { reason } => {
                self.move_to(OrderStatus::Cancelled, reason)?;
                Ok(OrderActionResult::Cancel(()))
            }
            OrderAction::AssignCook(employee_id) => {
                if self.status.is_terminal() {
                    return Err(OrderError::Closed(self.status));
                }
                let cook = admission::active_cook(ctx, employee_id).await?;
                self.cook_employee_id = Some(cook.id);
                self.updated_at = Utc::now();
                Ok(OrderActionResult::AssignCook(()))
            }
        }
    }
}

impl Order {
    /// Applies a status transition. Entering `cancelled` records `reason` or the default.
    fn move_to(&mut self, next: OrderStatus, reason: Option<String>) -> Result<(), OrderError> {
        if !self.status.can_become(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        if next == self.status {
            return Ok(());
        }
        if next == OrderStatus::Cancelled {
            let reason = reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_CANCEL_REASON.to_string());
            self.cancellation_reason = Some(reason);
        }
        info!(order_id = %self.id, from = %self.status, to = %next, "Status changed");
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, Plan};

    fn order() -> Order {
        Order::new(
            OrderId(1),
            OrderCreate {
                customer_id: CustomerId(1),
                menu_id: None,
                pet_id: None,
                plan: Plan::SevenDays,
                quantity: 1,
                special_instructions: None,
            },
        )
    }

    #[test]
    fn test_move_to_walks_the_pipeline() {
        let mut order = order();
        order.move_to(OrderStatus::Preparing, None).unwrap();
        order.move_to(OrderStatus::Completed, None).unwrap();
        let err = order.move_to(OrderStatus::Cooking, None).unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidTransition {
                from: OrderStatus::Completed,
                to: OrderStatus::Cooking
            }
        );
        order.move_to(OrderStatus::Delivered, None).unwrap();
        assert!(order.move_to(OrderStatus::Cancelled, None).is_err());
        assert!(order.cancellation_reason.is_none());
    }

    #[test]
    fn test_cancel_records_reason() {
        let mut order = order();
        order.move_to(OrderStatus::Cancelled, Some("  ".into())).unwrap();
        assert_eq!(order.cancellation_reason.as_deref(), Some(DEFAULT_CANCEL_REASON));

        // Cancelling again keeps the first reason.
        order.move_to(OrderStatus::Cancelled, Some("moved abroad".into())).unwrap();
        assert_eq!(order.cancellation_reason.as_deref(), Some(DEFAULT_CANCEL_REASON));
    }

    #[test]
    fn test_same_status_is_a_no_op() {
        let mut order = order();
        let before = order.updated_at;
        order.move_to(OrderStatus::Pending, None).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.updated_at, before);
    }
}
