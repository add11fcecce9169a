//! # Allergy Conflict Checker
//!
//! Decides whether a meal's ingredient list clashes with a pet's allergy list.
//!
//! Both lists are free text typed by people. The match is loose:
//!
//! 1. Each term is lower-cased and trimmed. Nothing else.
//! 2. An ingredient conflicts when it contains an allergy, or an allergy contains it.
//! 3. Conflicting ingredients are reported in input order, exactly as written.
//!
//! Substring matching in both directions means `"pea"` matches `"peanut"` and
//! `"beef liver"` matches `"beef"`.
//!
//! The checker never fails. Empty lists, and terms that are blank after trimming,
//! simply contribute no conflicts.
//!
//! ```
//! use pet_meal::allergy::check_conflict;
//!
//! let result = check_conflict(&["Salmon fillet", "Rice"], &["salmon"]);
//! assert!(result.has_conflict);
//! assert_eq!(result.conflicting_terms, vec!["Salmon fillet"]);
//! ```

use serde::Serialize;

/// Outcome of a check. Transient; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResult {
    pub has_conflict: bool,
    /// Offending ingredients, original spelling, input order.
    pub conflicting_terms: Vec<String>,
}

impl ConflictResult {
    pub fn none() -> Self {
        Self::default()
    }
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Checks `ingredients` against `allergies`.
///
/// An absent list is passed as an empty slice.
pub fn check_conflict<I, A>(ingredients: &[I], allergies: &[A]) -> ConflictResult
where
    I: AsRef<str>,
    A: AsRef<str>,
{
    let allergies: Vec<String> = allergies
        .iter()
        .map(|a| normalize(a.as_ref()))
        .filter(|a| !a.is_empty())
        .collect();
    if allergies.is_empty() || ingredients.is_empty() {
        return ConflictResult::none();
    }

    let conflicting_terms: Vec<String> = ingredients
        .iter()
        .map(AsRef::as_ref)
        .filter(|original| {
            let ingredient = normalize(original);
            !ingredient.is_empty()
                && allergies
                    .iter()
                    .any(|allergy| ingredient.contains(allergy.as_str()) || allergy.contains(&ingredient))
        })
        .map(str::to_string)
        .collect();

    ConflictResult {
        has_conflict: !conflicting_terms.is_empty(),
        conflicting_terms,
    }
}
