//! Headless world adapter.
//!
//! Stands in for a live world when the engine runs standalone: every
//! interaction is logged and acknowledged, and snapshot capture yields
//! an empty snapshot at the configured world spawn. A real bridge
//! adapter replaces this when the engine fronts an actual world host.

use realmkeeper_domain::{DeathSnapshot, PlayerId, WorldPosition};

use super::ports::{WorldError, WorldPort};

pub struct HeadlessWorld {
    world_spawn: WorldPosition,
}

impl HeadlessWorld {
    pub fn new(world_spawn: WorldPosition) -> Self {
        Self { world_spawn }
    }
}

impl WorldPort for HeadlessWorld {
    fn capture_snapshot(&self, player_id: PlayerId) -> Result<DeathSnapshot, WorldError> {
        tracing::debug!(player_id = %player_id, "Headless capture, synthesizing empty snapshot");
        Ok(DeathSnapshot::new(
            self.world_spawn.clone(),
            String::new(),
            String::new(),
            String::new(),
            0,
            0.0,
        ))
    }

    fn restore_snapshot(
        &self,
        player_id: PlayerId,
        snapshot: &DeathSnapshot,
    ) -> Result<(), WorldError> {
        tracing::debug!(
            player_id = %player_id,
            world = %snapshot.position().world,
            "Headless snapshot restore"
        );
        Ok(())
    }

    fn teleport(&self, player_id: PlayerId, destination: &WorldPosition) -> Result<(), WorldError> {
        tracing::debug!(
            player_id = %player_id,
            world = %destination.world,
            x = destination.x,
            y = destination.y,
            z = destination.z,
            "Headless teleport"
        );
        Ok(())
    }

    fn reset_vitals(&self, player_id: PlayerId) -> Result<(), WorldError> {
        tracing::debug!(player_id = %player_id, "Headless vitals reset");
        Ok(())
    }

    fn restore_health(&self, player_id: PlayerId) -> Result<(), WorldError> {
        tracing::debug!(player_id = %player_id, "Headless health restore");
        Ok(())
    }
}
