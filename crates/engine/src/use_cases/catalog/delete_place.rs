use crate::registry::PlaceRegistry;

use super::error::CatalogError;

/// Removes a place from the catalog.
///
/// Players already affiliated with it keep their affiliation string; the
/// place simply stops being joinable.
pub struct DeletePlace;

impl DeletePlace {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, places: &mut PlaceRegistry, name: &str) -> Result<(), CatalogError> {
        if !places.remove(name) {
            return Err(CatalogError::NotFound(name.to_string()));
        }
        places.persist();
        tracing::info!(place = %name, "Place removed from catalog");
        Ok(())
    }
}

impl Default for DeletePlace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use realmkeeper_domain::{Place, PlaceKind, PlaceName};

    use crate::infrastructure::document_store::JsonDocumentStore;

    use super::*;

    fn registry_with_place() -> (tempfile::TempDir, PlaceRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonDocumentStore::new(dir.path()));
        let mut places = PlaceRegistry::load(store);
        places.add(Place::new(
            PlaceName::new("Northaven").unwrap(),
            PlaceKind::Government,
        ));
        (dir, places)
    }

    #[test]
    fn deletes_by_any_casing() {
        let (_dir, mut places) = registry_with_place();

        DeletePlace::new().execute(&mut places, "NORTHAVEN").unwrap();

        assert!(places.get("Northaven").is_none());
    }

    #[test]
    fn deleting_an_unknown_place_fails() {
        let (_dir, mut places) = registry_with_place();

        let result = DeletePlace::new().execute(&mut places, "Southport");

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(places.all().len(), 1);
    }
}
