//! Field-level validation shared by the actors and the HTTP boundary.
//!
//! Every create/update payload implements [`Validate`]. Actors call it from their
//! hooks so the rules hold no matter who sends the request; the HTTP layer calls it
//! first to answer with a 400 before a message is ever sent.

use thiserror::Error;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FieldError>;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "cannot be empty or whitespace-only"));
    }
    Ok(())
}

/// Mobile numbers are exactly ten ASCII digits.
pub fn validate_mobile_no(field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::new(field, "must be exactly 10 digits"));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FieldError::new(field, "must be a valid email address")),
    }
}

pub fn validate_min<T: PartialOrd + std::fmt::Display>(field: &str, value: T, min: T) -> Result<()> {
    if value < min {
        return Err(FieldError::new(field, format!("must be at least {min}")));
    }
    Ok(())
}

pub fn validate_max<T: PartialOrd + std::fmt::Display>(field: &str, value: T, max: T) -> Result<()> {
    if value > max {
        return Err(FieldError::new(field, format!("must be at most {max}")));
    }
    Ok(())
}

/// Runs `check` only when the optional field is present.
pub fn validate_optional<T>(value: Option<&T>, check: impl FnOnce(&T) -> Result<()>) -> Result<()> {
    value.map_or(Ok(()), check)
}

/// Canonical form of a unique text key: trimmed and lower-cased.
pub fn unique_key(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("name", "Coffee").is_ok());
        assert!(validate_non_empty("name", "").is_err());
        let err = validate_non_empty("name", "   ").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_validate_mobile_no() {
        assert!(validate_mobile_no("mobile_no", "0812345678").is_ok());
        assert!(validate_mobile_no("mobile_no", " 0812345678 ").is_ok());
        assert!(validate_mobile_no("mobile_no", "081234567").is_err());
        assert!(validate_mobile_no("mobile_no", "08123456789").is_err());
        assert!(validate_mobile_no("mobile_no", "08-1234567").is_err());
        assert!(validate_mobile_no("mobile_no", "０８１２３４５６７８").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "amy@example.com").is_ok());
        assert!(validate_email("email", "amy.example.com").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "amy@").is_err());
    }

    #[test]
    fn test_validate_min_and_optional() {
        assert!(validate_min("quantity", 1, 1).is_ok());
        assert_eq!(
            validate_min("quantity", 0, 1).unwrap_err().to_string(),
            "quantity: must be at least 1"
        );
        assert_eq!(
            validate_max("quantity", 101, 100).unwrap_err().to_string(),
            "quantity: must be at most 100"
        );
        assert!(validate_optional(None::<&String>, |v| validate_non_empty("city", v)).is_ok());
        assert!(validate_optional(Some(&String::new()), |v| validate_non_empty("city", v)).is_err());
    }

    #[test]
    fn test_unique_key_normalizes() {
        assert_eq!(unique_key("  Amy@Example.COM "), "amy@example.com");
    }
}
