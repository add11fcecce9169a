//! Pure data structures (records and DTOs). The [`ActorEntity`](crate::framework::ActorEntity)
//! implementations live next to each actor.

pub mod customer;
pub mod employee;
pub mod ingredient;
pub mod menu;
pub mod order;
pub mod pet;
pub mod validation;

pub use customer::*;
pub use employee::*;
pub use ingredient::*;
pub use menu::*;
pub use order::*;
pub use pet::*;
pub use validation::{FieldError, Validate};

use serde::{Deserialize, Deserializer};

/// Reads a list that may be missing or `null`; both mean empty. Pair with
/// `#[serde(default)]`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_allergies_mean_none() {
        let profile: PetProfile = serde_json::from_str(r#"{"name": "Coffee", "allergies": null}"#).unwrap();
        assert!(profile.allergies.is_empty());

        let profile: PetProfile = serde_json::from_str(r#"{"name": "Coffee"}"#).unwrap();
        assert!(profile.allergies.is_empty());

        let profile: PetProfile =
            serde_json::from_str(r#"{"name": "Coffee", "allergies": ["Salmon"]}"#).unwrap();
        assert_eq!(profile.allergies, vec!["Salmon"]);
    }

    #[test]
    fn test_null_ingredients_mean_none() {
        let menu: MenuCreate = serde_json::from_str(r#"{"name": "Plain Rice", "ingredients": null}"#).unwrap();
        assert!(menu.ingredients.is_empty());

        assert!(serde_json::from_str::<MenuCreate>(r#"{"name": "Plain Rice", "ingredients": "rice"}"#).is_err());
    }
}
