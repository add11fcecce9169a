use crate::model::validation::{self, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IngredientId(pub u32);

impl From<u32> for IngredientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ingredient_{}", self.0)
    }
}

/// A stock ingredient. Menus list ingredients by free-text name, not by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientCreate {
    pub name: String,
    pub amount: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl Validate for IngredientCreate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_non_empty("name", &self.name)
    }
}

impl Validate for IngredientUpdate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_optional(self.name.as_ref(), |v| validation::validate_non_empty("name", v))
    }
}

impl Ingredient {
    pub fn new(id: IngredientId, params: IngredientCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name.trim().to_string(),
            amount: params.amount,
            description: params.description,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: IngredientUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if update.amount.is_some() {
            self.amount = update.amount;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        self.updated_at = Utc::now();
    }
}
