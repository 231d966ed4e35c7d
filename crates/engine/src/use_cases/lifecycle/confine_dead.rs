//! Dead-player confinement sweep.
//!
//! Runs on the periodic tick: every dead player is pulled back to the
//! configured dead zone so they cannot wander the live world while
//! awaiting re-creation. Teleports are best-effort per player; one
//! disconnect never stops the sweep.

use std::sync::Arc;

use realmkeeper_domain::WorldPosition;

use crate::infrastructure::ports::WorldPort;
use crate::registry::PlayerRecordStore;

pub struct ConfineDead {
    world: Arc<dyn WorldPort>,
    dead_zone: WorldPosition,
}

impl ConfineDead {
    pub fn new(world: Arc<dyn WorldPort>, dead_zone: WorldPosition) -> Self {
        Self { world, dead_zone }
    }

    /// Returns how many players were actually repositioned.
    pub fn execute(&self, records: &PlayerRecordStore) -> usize {
        let mut swept = 0;
        for (player_id, record) in records.iter() {
            if !record.is_dead() {
                continue;
            }
            match self.world.teleport(*player_id, &self.dead_zone) {
                Ok(()) => swept += 1,
                Err(e) => {
                    tracing::debug!(player_id = %player_id, error = %e, "Skipped confining dead player");
                }
            }
        }
        swept
    }
}
