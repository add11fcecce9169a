//! Custom actions for the Menu actor.
//!
//! Menus are never removed: orders refer back to them. Taking a meal off the
//! catalog is a [`MenuAction::Deactivate`].

#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Soft delete. The menu disappears from the active catalog and can no longer be ordered.
    Deactivate,
    /// Puts a deactivated menu back on the catalog.
    Activate,
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    Deactivate(()),
    Activate(()),
}
