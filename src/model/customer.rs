//! Customer accounts.
//!
//! [`Customer`] implements [`ActorEntity`](crate::framework::ActorEntity) in
//! [`crate::customer_actor`], so it is managed by a [`ResourceActor`](crate::framework::ResourceActor).

use crate::model::validation::{self, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerCreate {
    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
}

/// Payload for updating an existing customer. Absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
}

impl Validate for CustomerCreate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_non_empty("name", &self.name)?;
        validation::validate_mobile_no("mobile_no", &self.mobile_no)?;
        validation::validate_email("email", &self.email)
    }
}

impl Validate for CustomerUpdate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_optional(self.name.as_ref(), |v| validation::validate_non_empty("name", v))?;
        validation::validate_optional(self.mobile_no.as_ref(), |v| {
            validation::validate_mobile_no("mobile_no", v)
        })?;
        validation::validate_optional(self.email.as_ref(), |v| validation::validate_email("email", v))
    }
}

impl Customer {
    /// Builds an active customer from a validated payload.
    pub fn new(id: CustomerId, params: CustomerCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name.trim().to_string(),
            mobile_no: params.mobile_no.trim().to_string(),
            email: params.email.trim().to_string(),
            address: params.address,
            zipcode: params.zipcode,
            city: params.city,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: CustomerUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(mobile_no) = update.mobile_no {
            self.mobile_no = mobile_no.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = email.trim().to_string();
        }
        if update.address.is_some() {
            self.address = update.address;
        }
        if update.zipcode.is_some() {
            self.zipcode = update.zipcode;
        }
        if update.city.is_some() {
            self.city = update.city;
        }
        self.updated_at = Utc::now();
    }
}
