use realmkeeper_domain::{Place, PlaceKind, PlaceName};

use crate::registry::PlaceRegistry;

use super::error::CatalogError;

/// Registers a new joinable place in the catalog.
///
/// The place starts with no spawn points; it stays unjoinable until an
/// admin adds at least one.
pub struct CreatePlace;

impl CreatePlace {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        places: &mut PlaceRegistry,
        name: String,
        kind: &str,
    ) -> Result<(), CatalogError> {
        let kind: PlaceKind = kind.parse()?;
        let name = PlaceName::new(name)?;
        let display_name = name.as_str().to_string();

        if !places.add(Place::new(name, kind)) {
            return Err(CatalogError::NameTaken(display_name));
        }
        places.persist();

        tracing::info!(place = %display_name, %kind, "Place added to catalog");
        Ok(())
    }
}

impl Default for CreatePlace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::infrastructure::document_store::JsonDocumentStore;

    use super::*;

    fn registry() -> (tempfile::TempDir, PlaceRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonDocumentStore::new(dir.path()));
        (dir, PlaceRegistry::load(store))
    }

    #[test]
    fn creates_a_place_with_no_spawns() {
        let (_dir, mut places) = registry();

        CreatePlace::new()
            .execute(&mut places, "Northaven".to_string(), "government")
            .unwrap();

        let place = places.get("northaven").unwrap();
        assert_eq!(place.kind(), PlaceKind::Government);
        assert!(place.spawn_points().is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let (_dir, mut places) = registry();
        let create = CreatePlace::new();
        create
            .execute(&mut places, "Northaven".to_string(), "government")
            .unwrap();

        let result = create.execute(&mut places, "NORTHAVEN".to_string(), "community");

        assert!(matches!(result, Err(CatalogError::NameTaken(_))));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let (_dir, mut places) = registry();

        let result = CreatePlace::new().execute(&mut places, "Northaven".to_string(), "guild");

        assert!(matches!(result, Err(CatalogError::Domain(_))));
        assert!(places.all().is_empty());
    }
}
