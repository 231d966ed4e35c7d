//! Place joining.
//!
//! The Dead -> Alive transition. A dead player with an identity picks a
//! catalog place (or the refugee sentinel), passes the cooldown policy,
//! and arrives at a random spawn with fresh vitals. The death snapshot
//! is discarded: a new life starts with nothing.

use std::sync::Arc;

use realmkeeper_domain::{cooldown, Affiliation, CooldownVerdict, PlayerId, WorldPosition};
use realmkeeper_shared::{WorldEvent, REFUGEE_SENTINEL};

use crate::infrastructure::ports::{ClockPort, NotifierPort, RandomPort, WorldPort};
use crate::registry::{PlaceRegistry, PlayerRecordStore};

use super::error::LifecycleError;

#[derive(Debug, Clone)]
pub struct JoinPlaceOutput {
    pub affiliation: Affiliation,
    pub destination: WorldPosition,
}

pub struct JoinPlace {
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    world: Arc<dyn WorldPort>,
    notifier: Arc<dyn NotifierPort>,
    /// Arrival point for refugees, who have no place spawns to use.
    world_spawn: WorldPosition,
}

impl JoinPlace {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        world: Arc<dyn WorldPort>,
        notifier: Arc<dyn NotifierPort>,
        world_spawn: WorldPosition,
    ) -> Self {
        Self {
            clock,
            random,
            world,
            notifier,
            world_spawn,
        }
    }

    pub fn execute(
        &self,
        records: &mut PlayerRecordStore,
        places: &PlaceRegistry,
        player_id: PlayerId,
        place_arg: &str,
    ) -> Result<JoinPlaceOutput, LifecycleError> {
        let Some(record) = records.record(player_id) else {
            // Unknown players have never died.
            return Err(LifecycleError::AlreadyAlive);
        };
        if !record.is_dead() {
            return Err(LifecycleError::AlreadyAlive);
        }
        if record.identity().is_none() {
            return Err(LifecycleError::NoIdentity);
        }

        if place_arg.eq_ignore_ascii_case(REFUGEE_SENTINEL) {
            return self.arrive(
                records,
                player_id,
                Affiliation::refugee(),
                self.world_spawn.clone(),
            );
        }

        let place = places
            .get(place_arg)
            .ok_or_else(|| LifecycleError::PlaceNotFound(place_arg.to_string()))?;
        let spawns = place.spawn_points();
        if spawns.is_empty() {
            return Err(LifecycleError::NoSpawnPoints {
                place: place.name().as_str().to_string(),
            });
        }

        if let CooldownVerdict::Blocked { remaining } = cooldown::can_join(
            place.kind(),
            place.name(),
            record.last_place(),
            record.death_timestamp(),
            self.clock.now(),
        ) {
            return Err(LifecycleError::JoinCooldown {
                place: place.name().as_str().to_string(),
                remaining: cooldown::format_remaining(remaining),
                remaining_seconds: remaining.num_seconds(),
            });
        }

        // Uniform pick; clamp guards a misbehaving randomness source.
        let index = (self.random.gen_range(0, spawns.len() as i32 - 1).max(0) as usize)
            .min(spawns.len() - 1);
        let destination = spawns[index].to_position();

        self.arrive(records, player_id, place.affiliation(), destination)
    }

    fn arrive(
        &self,
        records: &mut PlayerRecordStore,
        player_id: PlayerId,
        affiliation: Affiliation,
        destination: WorldPosition,
    ) -> Result<JoinPlaceOutput, LifecycleError> {
        records.record_mut(player_id).join_place(affiliation.clone());
        records.persist();

        // World placement is best-effort once the record has committed;
        // a failed teleport leaves a live record the host can re-place.
        if let Err(e) = self.world.teleport(player_id, &destination) {
            tracing::warn!(player_id = %player_id, error = %e, "Teleport after join failed");
        }
        if let Err(e) = self.world.reset_vitals(player_id) {
            tracing::warn!(player_id = %player_id, error = %e, "Vitals reset after join failed");
        }

        tracing::info!(
            player_id = %player_id,
            place = %affiliation.name(),
            kind = %affiliation.kind(),
            "Player joined place"
        );
        self.notifier.notify(WorldEvent::PlaceJoined {
            player_id: player_id.to_uuid(),
            place: affiliation.name().to_string(),
            kind: affiliation.kind().to_string(),
        });

        Ok(JoinPlaceOutput {
            affiliation,
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use realmkeeper_domain::{
        Age, CharacterIdentity, DeathSnapshot, PersonName, Place, PlaceKind, PlaceName,
        SpawnPoint,
    };

    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::document_store::JsonDocumentStore;
    use crate::infrastructure::notifier::RecordingNotifier;
    use crate::infrastructure::ports::MockWorldPort;

    use super::*;

    fn test_records() -> (tempfile::TempDir, PlayerRecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let records = PlayerRecordStore::load(Arc::new(JsonDocumentStore::new(dir.path())));
        (dir, records)
    }

    fn test_places() -> (tempfile::TempDir, PlaceRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let places = PlaceRegistry::load(Arc::new(JsonDocumentStore::new(dir.path())));
        (dir, places)
    }

    fn test_identity() -> CharacterIdentity {
        CharacterIdentity::new(
            PersonName::new("James").unwrap(),
            PersonName::new("Whitfield").unwrap(),
            Age::new(30).unwrap(),
            "Nordic",
            "Male",
        )
        .unwrap()
    }

    fn test_snapshot() -> DeathSnapshot {
        DeathSnapshot::new(
            WorldPosition::new("world", 0.0, 64.0, 0.0, 0.0, 0.0),
            "",
            "",
            "",
            0,
            0.0,
        )
    }

    /// Dead player holding an identity, previously affiliated with the
    /// given place.
    fn dead_ready_to_join(
        records: &mut PlayerRecordStore,
        player_id: PlayerId,
        died_at: DateTime<Utc>,
        previous: Option<Affiliation>,
    ) {
        let record = records.record_mut(player_id);
        if let Some(previous) = previous {
            record.join_place(previous);
        }
        record.mark_dead(died_at, test_snapshot());
        record.adopt_identity(test_identity());
    }

    fn world_spawn() -> WorldPosition {
        WorldPosition::new("world", 0.0, 64.0, 0.0, 0.0, 0.0)
    }

    fn permissive_world() -> MockWorldPort {
        let mut world = MockWorldPort::new();
        world.expect_teleport().returning(|_, _| Ok(()));
        world.expect_reset_vitals().returning(|_| Ok(()));
        world
    }

    fn use_case(
        now: DateTime<Utc>,
        pick: i32,
        world: MockWorldPort,
        notifier: Arc<RecordingNotifier>,
    ) -> JoinPlace {
        JoinPlace::new(
            Arc::new(FixedClock(now)),
            Arc::new(FixedRandom(pick)),
            Arc::new(world),
            notifier,
            world_spawn(),
        )
    }

    fn government(name: &str, spawns: &[SpawnPoint]) -> Place {
        let mut place = Place::new(PlaceName::new(name).unwrap(), PlaceKind::Government);
        for spawn in spawns {
            place.add_spawn(spawn.clone());
        }
        place
    }

    #[test]
    fn when_player_is_alive_join_fails() {
        let (_rd, mut records) = test_records();
        let (_pd, places) = test_places();
        let notifier = Arc::new(RecordingNotifier::new());

        let result = use_case(Utc::now(), 0, MockWorldPort::new(), notifier).execute(
            &mut records,
            &places,
            PlayerId::new(),
            "Northaven",
        );

        assert!(matches!(result, Err(LifecycleError::AlreadyAlive)));
    }

    #[test]
    fn when_player_has_no_identity_join_fails() {
        let (_rd, mut records) = test_records();
        let (_pd, places) = test_places();
        let player_id = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        records
            .record_mut(player_id)
            .mark_dead(Utc::now(), test_snapshot());

        let result = use_case(Utc::now(), 0, MockWorldPort::new(), notifier).execute(
            &mut records,
            &places,
            player_id,
            "Northaven",
        );

        assert!(matches!(result, Err(LifecycleError::NoIdentity)));
    }

    #[test]
    fn when_place_is_unknown_join_fails() {
        let (_rd, mut records) = test_records();
        let (_pd, places) = test_places();
        let now = Utc::now();
        let player_id = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        dead_ready_to_join(&mut records, player_id, now - Duration::hours(2), None);

        let result = use_case(now, 0, MockWorldPort::new(), notifier).execute(
            &mut records,
            &places,
            player_id,
            "Nowhere",
        );

        assert!(matches!(result, Err(LifecycleError::PlaceNotFound(_))));
    }

    #[test]
    fn when_place_has_no_spawns_join_fails() {
        let (_rd, mut records) = test_records();
        let (_pd, mut places) = test_places();
        let now = Utc::now();
        let player_id = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        dead_ready_to_join(&mut records, player_id, now - Duration::hours(2), None);
        places.add(government("Northaven", &[]));

        let result = use_case(now, 0, MockWorldPort::new(), notifier).execute(
            &mut records,
            &places,
            player_id,
            "Northaven",
        );

        assert!(matches!(result, Err(LifecycleError::NoSpawnPoints { .. })));
    }

    #[test]
    fn when_rejoining_same_government_too_soon_join_fails() {
        let (_rd, mut records) = test_records();
        let (_pd, mut places) = test_places();
        let now = Utc::now();
        let player_id = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let spawn = SpawnPoint::new("world", 100.0, 65.0, 200.0, 90.0);
        places.add(government("Northaven", &[spawn]));
        let previous = places.get("Northaven").unwrap().affiliation();
        dead_ready_to_join(
            &mut records,
            player_id,
            now - Duration::hours(2),
            Some(previous),
        );

        let result = use_case(now, 0, MockWorldPort::new(), notifier).execute(
            &mut records,
            &places,
            player_id,
            "NORTHAVEN",
        );

        match result {
            Err(LifecycleError::JoinCooldown {
                remaining_seconds, ..
            }) => assert_eq!(remaining_seconds, 22 * 3600),
            other => panic!("expected cooldown rejection, got {other:?}"),
        }
        assert!(records.record(player_id).unwrap().is_dead());
    }

    #[test]
    fn when_previous_affiliation_differs_in_kind_join_is_allowed() {
        let (_rd, mut records) = test_records();
        let (_pd, mut places) = test_places();
        let now = Utc::now();
        let player_id = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let mut insurgents = Place::new(
            PlaceName::new("Black Flag").unwrap(),
            PlaceKind::Insurgent,
        );
        insurgents.add_spawn(SpawnPoint::new("world", -40.0, 70.0, 12.0, 0.0));
        places.add(insurgents);

        let previous = Affiliation::place(
            &PlaceName::new("Northaven").unwrap(),
            PlaceKind::Government,
        );
        dead_ready_to_join(
            &mut records,
            player_id,
            now - Duration::hours(1),
            Some(previous),
        );

        let output = use_case(now, 0, permissive_world(), notifier)
            .execute(&mut records, &places, player_id, "Black Flag")
            .unwrap();

        assert_eq!(output.affiliation.name(), "Black Flag");
        assert!(!records.record(player_id).unwrap().is_dead());
    }

    #[test]
    fn when_join_succeeds_player_arrives_at_picked_spawn() {
        let (_rd, mut records) = test_records();
        let (_pd, mut places) = test_places();
        let now = Utc::now();
        let player_id = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let first = SpawnPoint::new("world", 100.0, 65.0, 200.0, 90.0);
        let second = SpawnPoint::new("world", -10.0, 70.0, 40.0, 180.0);
        places.add(government("Northaven", &[first, second.clone()]));
        dead_ready_to_join(&mut records, player_id, now - Duration::hours(2), None);

        let expected = second.to_position();
        let mut world = MockWorldPort::new();
        let teleport_target = expected.clone();
        world
            .expect_teleport()
            .withf(move |id, dest| *id == player_id && *dest == teleport_target)
            .returning(|_, _| Ok(()));
        world
            .expect_reset_vitals()
            .withf(move |id| *id == player_id)
            .returning(|_| Ok(()));

        let output = use_case(now, 1, world, notifier.clone())
            .execute(&mut records, &places, player_id, "Northaven")
            .unwrap();

        assert_eq!(output.destination, expected);
        let record = records.record(player_id).unwrap();
        assert!(!record.is_dead());
        assert_eq!(record.current_place().unwrap().name(), "Northaven");
        assert!(record.death_snapshot().is_none());
        // History survives for the next death's cooldown checks.
        assert!(record.death_timestamp().is_some());

        let events = notifier.take();
        assert!(matches!(events.as_slice(), [WorldEvent::PlaceJoined { .. }]));
    }

    #[test]
    fn refugee_sentinel_bypasses_catalog_and_cooldowns() {
        let (_rd, mut records) = test_records();
        let (_pd, places) = test_places();
        let now = Utc::now();
        let player_id = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        // Died seconds ago; every catalog cooldown would still be live.
        dead_ready_to_join(&mut records, player_id, now, None);

        let output = use_case(now, 0, permissive_world(), notifier)
            .execute(&mut records, &places, player_id, "__REFUGEE__")
            .unwrap();

        assert_eq!(output.affiliation, Affiliation::refugee());
        assert_eq!(output.destination, world_spawn());
        assert!(!records.record(player_id).unwrap().is_dead());
    }
}
