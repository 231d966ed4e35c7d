//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::document_store::JsonDocumentStore;
use crate::infrastructure::ports::{ClockPort, NotifierPort, RandomPort, WorldPort};
use crate::infrastructure::settings::EngineSettings;
use crate::registry::{KingdomRegistry, PlaceRegistry, PlayerRecordStore};
use crate::use_cases::{CatalogUseCases, KingdomUseCases, LifecycleUseCases};

/// Main application state.
///
/// Owns the registries and the use cases. The dispatcher borrows it
/// mutably per command, so every transition runs with exactly one
/// writer and no locks.
pub struct App {
    pub registries: Registries,
    pub use_cases: UseCases,
}

/// Container for the persistent registries.
pub struct Registries {
    pub players: PlayerRecordStore,
    pub places: PlaceRegistry,
    pub kingdoms: KingdomRegistry,
}

/// Container for all use case areas.
pub struct UseCases {
    pub lifecycle: LifecycleUseCases,
    pub kingdom: KingdomUseCases,
    pub catalog: CatalogUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        settings: &EngineSettings,
        store: Arc<JsonDocumentStore>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        world: Arc<dyn WorldPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        let registries = Registries {
            players: PlayerRecordStore::load(store.clone()),
            places: PlaceRegistry::load(store.clone()),
            kingdoms: KingdomRegistry::load(store),
        };

        let use_cases = UseCases {
            lifecycle: LifecycleUseCases::new(
                clock.clone(),
                random,
                world,
                notifier.clone(),
                settings.world_spawn.clone(),
                settings.dead_zone.clone(),
            ),
            kingdom: KingdomUseCases::new(clock, notifier),
            catalog: CatalogUseCases::new(),
        };

        Self {
            registries,
            use_cases,
        }
    }
}
