//! Character identity value objects
//!
//! A character identity exists only while a player has a created character:
//! it is cleared on death and rebuilt through character creation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::names::{capitalize, PersonName};

/// Minimum allowed character age
const MIN_AGE: u8 = 18;

/// Maximum allowed character age
const MAX_AGE: u8 = 80;

// ============================================================================
// Age
// ============================================================================

/// A validated character age (18 to 80 inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Age(u8);

impl Age {
    /// Create a new validated age.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is outside 18..=80.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(MIN_AGE..=MAX_AGE).contains(&value) {
            return Err(DomainError::validation(format!(
                "Age must be between {} and {}",
                MIN_AGE, MAX_AGE
            )));
        }
        Ok(Self(value))
    }

    /// Returns the age as a plain number.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Age {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for u8 {
    fn from(age: Age) -> u8 {
        age.0
    }
}

// ============================================================================
// CharacterIdentity
// ============================================================================

/// The identity a player assumes when creating a character.
///
/// First and last names are validated [`PersonName`]s; ethnicity and gender
/// are free-form single words, stored capitalized like the names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterIdentity {
    first_name: PersonName,
    last_name: PersonName,
    age: Age,
    ethnicity: String,
    gender: String,
}

impl CharacterIdentity {
    /// Create a new character identity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if ethnicity or gender is empty
    /// after trimming.
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        age: Age,
        ethnicity: impl Into<String>,
        gender: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let ethnicity = ethnicity.into();
        let ethnicity = ethnicity.trim();
        if ethnicity.is_empty() {
            return Err(DomainError::validation("Ethnicity cannot be empty"));
        }
        let gender = gender.into();
        let gender = gender.trim();
        if gender.is_empty() {
            return Err(DomainError::validation("Gender cannot be empty"));
        }
        Ok(Self {
            first_name,
            last_name,
            age,
            ethnicity: capitalize(ethnicity),
            gender: capitalize(gender),
        })
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn ethnicity(&self) -> &str {
        &self.ethnicity
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Full display name, e.g. "James Whitfield".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
