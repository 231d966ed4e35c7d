use realmkeeper_domain::{Place, PlaceKind};

use crate::registry::PlaceRegistry;

use super::error::CatalogError;

/// Lists catalog places, optionally narrowed to one kind.
pub struct ListPlaces;

impl ListPlaces {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        places: &PlaceRegistry,
        kind: Option<&str>,
    ) -> Result<Vec<Place>, CatalogError> {
        let filter = match kind {
            Some(raw) => Some(raw.parse::<PlaceKind>()?),
            None => None,
        };
        Ok(places
            .all()
            .iter()
            .filter(|place| filter.is_none_or(|kind| place.kind() == kind))
            .cloned()
            .collect())
    }
}

impl Default for ListPlaces {
    fn default() -> Self {
        Self::new()
    }
}
