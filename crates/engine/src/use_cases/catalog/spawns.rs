//! Spawn point administration.

use realmkeeper_domain::SpawnPoint;

use crate::registry::PlaceRegistry;

use super::error::CatalogError;

pub struct AddSpawn;

impl AddSpawn {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        places: &mut PlaceRegistry,
        name: &str,
        spawn: SpawnPoint,
    ) -> Result<(), CatalogError> {
        let Some(place) = places.get_mut(name) else {
            return Err(CatalogError::NotFound(name.to_string()));
        };
        place.add_spawn(spawn);
        let count = place.spawn_points().len();
        places.persist();
        tracing::info!(place = %name, count, "Spawn point added");
        Ok(())
    }
}

impl Default for AddSpawn {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RemoveSpawn;

impl RemoveSpawn {
    pub fn new() -> Self {
        Self
    }

    /// Removes the first spawn point within one block of the position.
    pub fn execute(
        &self,
        places: &mut PlaceRegistry,
        name: &str,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<(), CatalogError> {
        let Some(place) = places.get_mut(name) else {
            return Err(CatalogError::NotFound(name.to_string()));
        };
        if !place.remove_spawn_near(x, y, z) {
            return Err(CatalogError::NoSpawnNearby {
                place: name.to_string(),
            });
        }
        places.persist();
        tracing::info!(place = %name, x, y, z, "Spawn point removed");
        Ok(())
    }
}

impl Default for RemoveSpawn {
    fn default() -> Self {
        Self::new()
    }
}
