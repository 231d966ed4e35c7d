//! Death transition.
//!
//! Applies the Alive -> Dead transition: snapshot capture, identity
//! wipe, affiliation rollover into `last_place`, kingdom membership
//! forfeited. Protected kingdom leaders killed by another player are
//! exempted entirely.

use std::sync::Arc;

use realmkeeper_domain::PlayerId;
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::{ClockPort, NotifierPort, WorldPort};
use crate::registry::{KingdomRegistry, PlayerRecordStore};

use super::error::LifecycleError;

#[derive(Debug, Clone, PartialEq)]
pub enum DeathOutcome {
    /// The transition was applied; the record is now dead.
    Died,
    /// A protected leader was killed by another player; nothing changed
    /// and the victim keeps their life.
    Vetoed {
        kingdom: String,
        remaining_seconds: i64,
    },
    /// The record was already dead. Upstream death events cannot be
    /// un-fired, so a replay is ignored rather than rejected.
    AlreadyDead,
}

pub struct RecordDeath {
    clock: Arc<dyn ClockPort>,
    world: Arc<dyn WorldPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl RecordDeath {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        world: Arc<dyn WorldPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            clock,
            world,
            notifier,
        }
    }

    pub fn execute(
        &self,
        records: &mut PlayerRecordStore,
        kingdoms: &mut KingdomRegistry,
        player_id: PlayerId,
        killer_id: Option<PlayerId>,
    ) -> Result<DeathOutcome, LifecycleError> {
        let now = self.clock.now();

        // Leader protection runs before any state is touched. A self-kill
        // counts as environment, not as another player.
        if let Some(kingdom) = kingdoms.by_leader(player_id) {
            if kingdom.is_protected(now) {
                if let Some(killer_id) = killer_id.filter(|k| *k != player_id) {
                    let name = kingdom.name().as_str().to_string();
                    let remaining_seconds = kingdom.protection_remaining(now).num_seconds();
                    self.world.restore_health(player_id)?;
                    tracing::info!(
                        player_id = %player_id,
                        killer_id = %killer_id,
                        kingdom = %name,
                        "Death vetoed by leader protection"
                    );
                    self.notifier.notify(WorldEvent::DeathVetoed {
                        player_id: player_id.to_uuid(),
                        killer_id: killer_id.to_uuid(),
                        kingdom: name.clone(),
                        remaining_seconds,
                    });
                    return Ok(DeathOutcome::Vetoed {
                        kingdom: name,
                        remaining_seconds,
                    });
                }
            }
        }

        if records.record(player_id).is_some_and(|r| r.is_dead()) {
            tracing::debug!(player_id = %player_id, "Death for an already-dead player, ignoring");
            return Ok(DeathOutcome::AlreadyDead);
        }

        // Capture before mutating so a failed capture aborts the whole
        // transition with the record untouched.
        let snapshot = self.world.capture_snapshot(player_id)?;
        let led_kingdom = kingdoms
            .by_leader(player_id)
            .map(|k| k.name().as_str().to_string());

        records.record_mut(player_id).mark_dead(now, snapshot);
        records.persist();

        // Dying forfeits membership. The leader slot is not reassigned;
        // a leaderless kingdom waits for a manual transfer.
        if let Some(kingdom) = kingdoms.by_member_mut(player_id) {
            kingdom.remove_member(player_id);
            kingdoms.persist();
        }

        self.notifier.notify(WorldEvent::PlayerDied {
            player_id: player_id.to_uuid(),
            killer_id: killer_id.map(|k| k.to_uuid()),
        });
        if let Some(name) = led_kingdom {
            // Unprotected leader death: the kingdom is left leaderless
            // until someone transfers leadership manually.
            self.notifier.notify(WorldEvent::KingdomLeaderDied {
                name,
                leader_id: player_id.to_uuid(),
            });
        }

        Ok(DeathOutcome::Died)
    }
}
