//! Staff accounts. Cooks prepare orders; admins run the catalog.

use crate::model::validation::{self, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl From<u32> for EmployeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "employee_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    Cook,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub role: EmployeeRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeCreate {
    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub role: EmployeeRole,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    pub role: Option<EmployeeRole>,
}

impl Validate for EmployeeCreate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_non_empty("name", &self.name)?;
        validation::validate_mobile_no("mobile_no", &self.mobile_no)?;
        validation::validate_email("email", &self.email)
    }
}

impl Validate for EmployeeUpdate {
    fn validate(&self) -> validation::Result<()> {
        validation::validate_optional(self.name.as_ref(), |v| validation::validate_non_empty("name", v))?;
        validation::validate_optional(self.mobile_no.as_ref(), |v| {
            validation::validate_mobile_no("mobile_no", v)
        })?;
        validation::validate_optional(self.email.as_ref(), |v| validation::validate_email("email", v))
    }
}

impl Employee {
    pub fn new(id: EmployeeId, params: EmployeeCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name.trim().to_string(),
            mobile_no: params.mobile_no.trim().to_string(),
            email: params.email.trim().to_string(),
            role: params.role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(mobile_no) = update.mobile_no {
            self.mobile_no = mobile_no.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = email.trim().to_string();
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        self.updated_at = Utc::now();
    }

    /// An active employee with the `Cook` role.
    pub fn can_cook(&self) -> bool {
        self.is_active && self.role == EmployeeRole::Cook
    }
}
