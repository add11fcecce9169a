//! Pet profiles. A pet belongs to exactly one customer and carries the allergy list
//! that order admission checks against.

use crate::model::validation::{self, Validate};
use crate::model::CustomerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Pets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PetId(pub u32);

impl From<u32> for PetId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pet_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pet {
    pub id: PetId,
    pub customer_id: CustomerId,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    /// Free text, as entered by the owner. Not normalized.
    pub allergies: Vec<String>,
    pub activity_level: Option<String>,
    pub body_conditions: Option<String>,
    pub neutered: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The pet fields a customer supplies. The owner comes from the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetProfile {
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub allergies: Vec<String>,
    pub activity_level: Option<String>,
    pub body_conditions: Option<String>,
    #[serde(default)]
    pub neutered: bool,
}

/// Payload for creating a new pet.
#[derive(Debug, Clone)]
pub struct PetCreate {
    pub customer_id: CustomerId,
    pub profile: PetProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    pub allergies: Option<Vec<String>>,
    pub activity_level: Option<String>,
    pub body_conditions: Option<String>,
    pub neutered: Option<bool>,
}

fn validate_weight(weight: &f64) -> validation::Result<()> {
    if !weight.is_finite() || *weight <= 0.0 {
        return Err(validation::FieldError::new("weight", "must be a positive number"));
    }
    Ok(())
}

impl Validate for PetProfile {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_non_empty("name", &self.name)?;
        validation::validate_optional(self.weight.as_ref(), validate_weight)
    }
}

impl Validate for PetCreate {
    fn validate(&self) -> validation::Result<()> {
        self.profile.validate()
    }
}

impl Validate for PetUpdate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_optional(self.name.as_ref(), |v| validation::validate_non_empty("name", v))?;
        validation::validate_optional(self.weight.as_ref(), validate_weight)
    }
}

impl Pet {
    pub fn new(id: PetId, params: PetCreate) -> Self {
        let now = Utc::now();
        let profile = params.profile;
        Self {
            id,
            customer_id: params.customer_id,
            name: profile.name.trim().to_string(),
            breed: profile.breed,
            age: profile.age,
            weight: profile.weight,
            gender: profile.gender,
            allergies: profile.allergies,
            activity_level: profile.activity_level,
            body_conditions: profile.body_conditions,
            neutered: profile.neutered,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: PetUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if update.breed.is_some() {
            self.breed = update.breed;
        }
        if update.age.is_some() {
            self.age = update.age;
        }
        if update.weight.is_some() {
            self.weight = update.weight;
        }
        if update.gender.is_some() {
            self.gender = update.gender;
        }
        if let Some(allergies) = update.allergies {
            self.allergies = allergies;
        }
        if update.activity_level.is_some() {
            self.activity_level = update.activity_level;
        }
        if update.body_conditions.is_some() {
            self.body_conditions = update.body_conditions;
        }
        if let Some(neutered) = update.neutered {
            self.neutered = neutered;
        }
        self.updated_at = Utc::now();
    }
}
