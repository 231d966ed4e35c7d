//! Lifecycle use cases.
//!
//! The Alive/Dead state machine: death, character re-creation, place
//! joining, administrative revival and the dead-player confinement
//! sweep.

use std::sync::Arc;

use realmkeeper_domain::WorldPosition;

use crate::infrastructure::ports::{ClockPort, NotifierPort, RandomPort, WorldPort};

pub mod confine_dead;
pub mod create_character;
pub mod error;
pub mod join_place;
pub mod record_death;
pub mod revive;

pub use confine_dead::ConfineDead;
pub use create_character::{CreateCharacter, CreateCharacterInput, CreateCharacterOutput};
pub use error::LifecycleError;
pub use join_place::{JoinPlace, JoinPlaceOutput};
pub use record_death::{DeathOutcome, RecordDeath};
pub use revive::{Revive, ReviveOutput};

/// Container for lifecycle use cases.
pub struct LifecycleUseCases {
    pub record_death: Arc<RecordDeath>,
    pub create_character: Arc<CreateCharacter>,
    pub join_place: Arc<JoinPlace>,
    pub revive: Arc<Revive>,
    pub confine_dead: Arc<ConfineDead>,
}

impl LifecycleUseCases {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        world: Arc<dyn WorldPort>,
        notifier: Arc<dyn NotifierPort>,
        world_spawn: WorldPosition,
        dead_zone: WorldPosition,
    ) -> Self {
        Self {
            record_death: Arc::new(RecordDeath::new(
                clock.clone(),
                world.clone(),
                notifier.clone(),
            )),
            create_character: Arc::new(CreateCharacter::new(clock.clone(), notifier.clone())),
            join_place: Arc::new(JoinPlace::new(
                clock,
                random,
                world.clone(),
                notifier.clone(),
                world_spawn,
            )),
            revive: Arc::new(Revive::new(world.clone(), notifier)),
            confine_dead: Arc::new(ConfineDead::new(world, dead_zone)),
        }
    }
}
