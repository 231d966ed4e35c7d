//! Place entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Affiliation, PlaceKind, PlaceName, SpawnPoint};

/// A named faction-type location players can join.
///
/// A place with no spawn points exists in the catalog but cannot be joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    name: PlaceName,
    kind: PlaceKind,
    #[serde(default)]
    spawn_points: Vec<SpawnPoint>,
}

impl Place {
    pub fn new(name: PlaceName, kind: PlaceKind) -> Self {
        Self {
            name,
            kind,
            spawn_points: Vec::new(),
        }
    }

    pub fn name(&self) -> &PlaceName {
        &self.name
    }

    pub fn kind(&self) -> PlaceKind {
        self.kind
    }

    pub fn spawn_points(&self) -> &[SpawnPoint] {
        &self.spawn_points
    }

    /// Lowercased key for case-insensitive catalog lookups.
    pub fn lookup_key(&self) -> String {
        self.name.lookup_key()
    }

    /// The affiliation recorded on players who join this place.
    pub fn affiliation(&self) -> Affiliation {
        Affiliation::place(&self.name, self.kind)
    }

    pub fn add_spawn(&mut self, spawn: SpawnPoint) {
        self.spawn_points.push(spawn);
    }

    /// Remove the first spawn point within one block of the given
    /// coordinates on all three axes. Returns false if none matched.
    pub fn remove_spawn_near(&mut self, x: f64, y: f64, z: f64) -> bool {
        match self.spawn_points.iter().position(|sp| sp.is_near(x, y, z)) {
            Some(index) => {
                self.spawn_points.remove(index);
                true
            }
            None => false,
        }
    }
}
