//! Custom actions for the Customer actor.

/// Account switches. A deactivated customer can no longer place orders or add pets.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    Deactivate,
    Activate,
}

/// Results from CustomerActions - variants match 1:1 with CustomerAction
#[derive(Debug, Clone)]
pub enum CustomerActionResult {
    Deactivate(()),
    Activate(()),
}
