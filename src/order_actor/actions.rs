//! Custom actions for the Order actor.
//!
//! Status changes are explicit staff actions; nothing moves an order on a timer.
//! See [`OrderStatus::can_become`] for the legal moves.

use crate::model::{EmployeeId, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to another status. Re-setting the current status is a no-op.
    ChangeStatus(OrderStatus),
    /// Cancels the order, recording why. `None` records the default reason.
    Cancel { reason: Option<String> },
    /// Assigns the employee who will cook the order. Must be an active cook.
    AssignCook(EmployeeId),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The status after the change.
    ChangeStatus(OrderStatus),
    Cancel(()),
    AssignCook(()),
}
