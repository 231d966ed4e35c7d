//! Place catalog administration use cases
//!
//! Privileged surfaces for curating the set of joinable places and their
//! spawn points.

pub mod create_place;
pub mod delete_place;
pub mod error;
pub mod list_places;
pub mod spawns;

pub use create_place::CreatePlace;
pub use delete_place::DeletePlace;
pub use error::CatalogError;
pub use list_places::ListPlaces;
pub use spawns::{AddSpawn, RemoveSpawn};

use std::sync::Arc;

/// Container for all catalog use cases
pub struct CatalogUseCases {
    pub create_place: Arc<CreatePlace>,
    pub delete_place: Arc<DeletePlace>,
    pub add_spawn: Arc<AddSpawn>,
    pub remove_spawn: Arc<RemoveSpawn>,
    pub list_places: Arc<ListPlaces>,
}

impl CatalogUseCases {
    pub fn new() -> Self {
        Self {
            create_place: Arc::new(CreatePlace::new()),
            delete_place: Arc::new(DeletePlace::new()),
            add_spawn: Arc::new(AddSpawn::new()),
            remove_spawn: Arc::new(RemoveSpawn::new()),
            list_places: Arc::new(ListPlaces::new()),
        }
    }
}

impl Default for CatalogUseCases {
    fn default() -> Self {
        Self::new()
    }
}
