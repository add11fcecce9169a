//! Custom actions for the Employee actor.

#[derive(Debug, Clone)]
pub enum EmployeeAction {
    /// Takes the employee off duty. An inactive cook cannot be assigned orders.
    Deactivate,
    Activate,
}

/// Results from EmployeeActions - variants match 1:1 with EmployeeAction
#[derive(Debug, Clone)]
pub enum EmployeeActionResult {
    Deactivate(()),
    Activate(()),
}
