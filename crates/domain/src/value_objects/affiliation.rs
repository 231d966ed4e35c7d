//! Place kinds and player affiliation value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::names::PlaceName;

// ============================================================================
// PlaceKind
// ============================================================================

/// The faction type of a catalog place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Government,
    Insurgent,
    Community,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceKind::Government => write!(f, "government"),
            PlaceKind::Insurgent => write!(f, "insurgent"),
            PlaceKind::Community => write!(f, "community"),
        }
    }
}

impl FromStr for PlaceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "government" => Ok(PlaceKind::Government),
            "insurgent" => Ok(PlaceKind::Insurgent),
            "community" => Ok(PlaceKind::Community),
            _ => Err(DomainError::parse(format!(
                "Unknown place kind: {}. Use: government, insurgent, community",
                s
            ))),
        }
    }
}

// ============================================================================
// AffiliationKind
// ============================================================================

/// The kind of affiliation recorded on a player.
///
/// Extends [`PlaceKind`] with the refugee kind, which is a valid affiliation
/// but never a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffiliationKind {
    Government,
    Insurgent,
    Community,
    Refugee,
}

impl From<PlaceKind> for AffiliationKind {
    fn from(kind: PlaceKind) -> Self {
        match kind {
            PlaceKind::Government => AffiliationKind::Government,
            PlaceKind::Insurgent => AffiliationKind::Insurgent,
            PlaceKind::Community => AffiliationKind::Community,
        }
    }
}

impl fmt::Display for AffiliationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffiliationKind::Government => write!(f, "government"),
            AffiliationKind::Insurgent => write!(f, "insurgent"),
            AffiliationKind::Community => write!(f, "community"),
            AffiliationKind::Refugee => write!(f, "refugee"),
        }
    }
}

// ============================================================================
// Affiliation
// ============================================================================

/// A place membership recorded on a player record.
///
/// Derived from an existing catalog place (or the refugee constant), so the
/// name is carried as plain display text rather than a re-validated newtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliation {
    name: String,
    #[serde(rename = "type")]
    kind: AffiliationKind,
}

impl Affiliation {
    /// Affiliation with a catalog place.
    pub fn place(name: &PlaceName, kind: PlaceKind) -> Self {
        Self {
            name: name.as_str().to_string(),
            kind: kind.into(),
        }
    }

    /// The no-faction affiliation.
    pub fn refugee() -> Self {
        Self {
            name: "Refugee".to_string(),
            kind: AffiliationKind::Refugee,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AffiliationKind {
        self.kind
    }

    /// Case-insensitive match against a catalog place name.
    pub fn matches_name(&self, name: &PlaceName) -> bool {
        self.name.to_lowercase() == name.lookup_key()
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
