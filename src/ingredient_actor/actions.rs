#[derive(Debug, Clone)]
pub enum IngredientAction {
    Deactivate,
    Activate,
}

/// Results from IngredientActions - variants match 1:1 with IngredientAction
#[derive(Debug, Clone)]
pub enum IngredientActionResult {
    Deactivate(()),
    Activate(()),
}
