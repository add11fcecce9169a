//! The meal catalog.

use crate::model::validation::{self, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuId(pub u32);

impl From<u32> for MenuId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A meal on offer. Deleting a menu only deactivates it, so past orders keep
/// a resolvable reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Free text, as entered by staff. Not normalized.
    pub ingredients: Vec<String>,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub price: Option<f64>,
}

fn validate_price(price: &f64) -> validation::Result<()> {
    if !price.is_finite() {
        return Err(validation::FieldError::new("price", "must be a number"));
    }
    validation::validate_min("price", *price, 0.0)
}

impl Validate for MenuCreate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_non_empty("name", &self.name)?;
        validate_price(&self.price)
    }
}

impl Validate for MenuUpdate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_optional(self.name.as_ref(), |v| validation::validate_non_empty("name", v))?;
        validation::validate_optional(self.price.as_ref(), validate_price)
    }
}

impl Menu {
    pub fn new(id: MenuId, params: MenuCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name.trim().to_string(),
            description: params.description,
            image_url: params.image_url,
            ingredients: params.ingredients,
            price: params.price,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: MenuUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if update.image_url.is_some() {
            self.image_url = update.image_url;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        self.updated_at = Utc::now();
    }
}
