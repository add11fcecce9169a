//! Custom actions for the Pet actor.

#[derive(Debug, Clone)]
pub enum PetAction {
    /// Hides the pet from its owner's profile. Orders already placed keep their snapshot.
    Deactivate,
}

/// Results from PetActions - variants match 1:1 with PetAction
#[derive(Debug, Clone)]
pub enum PetActionResult {
    Deactivate(()),
}
