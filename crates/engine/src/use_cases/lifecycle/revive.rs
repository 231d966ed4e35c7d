//! Administrative revival.
//!
//! The only transition that puts a death snapshot back on the player.
//! Regular rejoining deliberately discards it.

use std::sync::Arc;

use realmkeeper_domain::{DeathSnapshot, PlayerId};
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::{NotifierPort, WorldPort};
use crate::registry::PlayerRecordStore;

use super::error::LifecycleError;

#[derive(Debug, Clone)]
pub struct ReviveOutput {
    /// Snapshot contents put back on the player, if one was still held.
    pub restored: Option<DeathSnapshot>,
}

pub struct Revive {
    world: Arc<dyn WorldPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl Revive {
    pub fn new(world: Arc<dyn WorldPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { world, notifier }
    }

    pub fn execute(
        &self,
        records: &mut PlayerRecordStore,
        player_id: PlayerId,
    ) -> Result<ReviveOutput, LifecycleError> {
        let Some(record) = records.record(player_id) else {
            return Err(LifecycleError::NotDead);
        };
        if !record.is_dead() {
            return Err(LifecycleError::NotDead);
        }

        // Restore through the world first: if the player cannot take the
        // snapshot back, the record must stay dead.
        let snapshot = record.death_snapshot().cloned();
        if let Some(snapshot) = &snapshot {
            self.world.restore_snapshot(player_id, snapshot)?;
        }

        records.record_mut(player_id).revive();
        records.persist();

        tracing::info!(player_id = %player_id, "Player revived");
        self.notifier.notify(WorldEvent::PlayerRevived {
            player_id: player_id.to_uuid(),
        });

        Ok(ReviveOutput { restored: snapshot })
    }
}
