//! Place catalog registry.

use std::sync::Arc;

use realmkeeper_domain::Place;

use crate::infrastructure::document_store::JsonDocumentStore;

const DOCUMENT: &str = "places";

/// The joinable-place catalog. Lookups are case-insensitive on the
/// place name; insertion order is preserved for listings.
pub struct PlaceRegistry {
    places: Vec<Place>,
    store: Arc<JsonDocumentStore>,
}

impl PlaceRegistry {
    pub fn load(store: Arc<JsonDocumentStore>) -> Self {
        let places = store.load(DOCUMENT);
        Self { places, store }
    }

    pub fn get(&self, name: &str) -> Option<&Place> {
        let key = name.to_lowercase();
        self.places.iter().find(|p| p.lookup_key() == key)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Place> {
        let key = name.to_lowercase();
        self.places.iter_mut().find(|p| p.lookup_key() == key)
    }

    /// Returns false if a place with the same name already exists.
    pub fn add(&mut self, place: Place) -> bool {
        if self.get(place.name().as_str()).is_some() {
            return false;
        }
        self.places.push(place);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        match self.places.iter().position(|p| p.lookup_key() == key) {
            Some(index) => {
                self.places.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[Place] {
        &self.places
    }

    /// Persistence failures are logged and swallowed; the in-memory
    /// state stays authoritative for the rest of the session.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(DOCUMENT, &self.places) {
            tracing::warn!(error = %e, "Failed to persist places, keeping in-memory state");
        }
    }
}
