//! Command dispatch.
//!
//! The single entry point of the engine: one command in, one reply out.
//! Takes the app mutably, so transitions are serialized by construction.
//! Ids arrive as raw strings and are parsed here; a bad id is a rejection
//! reply, never a transport failure.

use realmkeeper_domain::{DomainError, PlayerId, SpawnPoint};
use realmkeeper_shared::{
    CharacterCreatedData, Command, CommandResult, CooldownDetails, JoinedPlaceData,
    KingdomInfoData, PlaceListEntry, RejectionCode,
};
use uuid::Uuid;

use crate::app::App;
use crate::use_cases::catalog::CatalogError;
use crate::use_cases::kingdom::KingdomError;
use crate::use_cases::lifecycle::{CreateCharacterInput, DeathOutcome, LifecycleError};

pub fn dispatch(app: &mut App, command: Command) -> CommandResult {
    let App {
        registries,
        use_cases,
    } = app;

    match command {
        // =====================================================================
        // Lifecycle
        // =====================================================================
        Command::Death {
            player_id,
            killer_id,
        } => {
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            let killer_id = match killer_id {
                Some(raw) => match parse_player_id(&raw) {
                    Ok(id) => Some(id),
                    Err(reply) => return reply,
                },
                None => None,
            };
            match use_cases.lifecycle.record_death.execute(
                &mut registries.players,
                &mut registries.kingdoms,
                player_id,
                killer_id,
            ) {
                Ok(DeathOutcome::Died) => {
                    CommandResult::success(serde_json::json!({ "outcome": "died" }))
                }
                Ok(DeathOutcome::AlreadyDead) => {
                    CommandResult::success(serde_json::json!({ "outcome": "already_dead" }))
                }
                Ok(DeathOutcome::Vetoed {
                    kingdom,
                    remaining_seconds,
                }) => CommandResult::success(serde_json::json!({
                    "outcome": "vetoed",
                    "kingdom": kingdom,
                    "remaining_seconds": remaining_seconds,
                })),
                Err(e) => lifecycle_reply(e),
            }
        }
        Command::CreateCharacter {
            player_id,
            first_name,
            last_name,
            age,
            ethnicity,
            gender,
        } => {
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            let input = CreateCharacterInput {
                player_id,
                first_name,
                last_name,
                age,
                ethnicity,
                gender,
            };
            match use_cases
                .lifecycle
                .create_character
                .execute(&mut registries.players, input)
            {
                Ok(output) => CommandResult::success(CharacterCreatedData {
                    name: output.identity.full_name(),
                    age: output.identity.age().value(),
                    ethnicity: output.identity.ethnicity().to_string(),
                    gender: output.identity.gender().to_string(),
                    reopened: output.reopened,
                }),
                Err(e) => lifecycle_reply(e),
            }
        }
        Command::JoinPlace { player_id, place } => {
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.lifecycle.join_place.execute(
                &mut registries.players,
                &registries.places,
                player_id,
                &place,
            ) {
                Ok(output) => CommandResult::success(JoinedPlaceData {
                    place: output.affiliation.name().to_string(),
                    kind: output.affiliation.kind().to_string(),
                    world: output.destination.world,
                    x: output.destination.x,
                    y: output.destination.y,
                    z: output.destination.z,
                }),
                Err(e) => lifecycle_reply(e),
            }
        }
        Command::Revive { player_id } => {
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases
                .lifecycle
                .revive
                .execute(&mut registries.players, player_id)
            {
                Ok(output) => CommandResult::success(serde_json::json!({
                    "restored": output.restored.is_some(),
                })),
                Err(e) => lifecycle_reply(e),
            }
        }
        Command::Tick => {
            let confined = use_cases
                .lifecycle
                .confine_dead
                .execute(&registries.players);
            CommandResult::success(serde_json::json!({ "confined": confined }))
        }

        // =====================================================================
        // Kingdom governance
        // =====================================================================
        Command::CreateKingdom { name, leader_id } => {
            let leader_id = match parse_player_id(&leader_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.create_kingdom.execute(
                &mut registries.kingdoms,
                &mut registries.players,
                name,
                leader_id,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::DeleteKingdom { name } => {
            match use_cases.kingdom.delete_kingdom.execute(
                &mut registries.kingdoms,
                &mut registries.players,
                &name,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::TransferKingdom {
            name,
            new_leader_id,
        } => {
            let new_leader_id = match parse_player_id(&new_leader_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.transfer_leadership.execute(
                &mut registries.kingdoms,
                &name,
                new_leader_id,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::RenameKingdom { actor_id, new_name } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.rename_kingdom.execute(
                &mut registries.kingdoms,
                &mut registries.players,
                actor_id,
                new_name,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::JoinKingdom { player_id, name } => {
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases
                .kingdom
                .request_join
                .execute(&mut registries.kingdoms, &name, player_id)
            {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::LeaveKingdom { player_id } => {
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.leave_kingdom.execute(
                &mut registries.kingdoms,
                &mut registries.players,
                player_id,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::KickKingdomMember {
            actor_id,
            player_id,
        } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.kick_member.execute(
                &mut registries.kingdoms,
                &mut registries.players,
                actor_id,
                player_id,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::ListKingdomRequests { actor_id } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases
                .kingdom
                .list_requests
                .execute(&registries.kingdoms, actor_id)
            {
                Ok(pending) => {
                    let ids: Vec<String> = pending.iter().map(ToString::to_string).collect();
                    CommandResult::success(ids)
                }
                Err(e) => kingdom_reply(e),
            }
        }
        Command::AcceptKingdomRequest {
            actor_id,
            player_id,
        } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.accept_request.execute(
                &mut registries.kingdoms,
                &mut registries.players,
                actor_id,
                player_id,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::DenyKingdomRequest {
            actor_id,
            player_id,
        } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            let player_id = match parse_player_id(&player_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.deny_request.execute(
                &mut registries.kingdoms,
                actor_id,
                player_id,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::AcceptAllKingdomRequests { actor_id } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.accept_all_requests.execute(
                &mut registries.kingdoms,
                &mut registries.players,
                actor_id,
            ) {
                Ok(accepted) => {
                    CommandResult::success(serde_json::json!({ "accepted": accepted }))
                }
                Err(e) => kingdom_reply(e),
            }
        }
        Command::DenyAllKingdomRequests { actor_id } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases
                .kingdom
                .deny_all_requests
                .execute(&mut registries.kingdoms, actor_id)
            {
                Ok(denied) => CommandResult::success(serde_json::json!({ "denied": denied })),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::SetKingdomRequests {
            actor_id,
            accepting,
        } => {
            let actor_id = match parse_player_id(&actor_id) {
                Ok(id) => id,
                Err(reply) => return reply,
            };
            match use_cases.kingdom.set_accepting_requests.execute(
                &mut registries.kingdoms,
                actor_id,
                accepting,
            ) {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::KingdomInfo { name } => {
            match use_cases
                .kingdom
                .kingdom_info
                .execute(&registries.kingdoms, &name)
            {
                Ok(info) => CommandResult::success(KingdomInfoData {
                    name: info.name,
                    leader_id: info.leader_id.to_string(),
                    members: info.members.iter().map(ToString::to_string).collect(),
                    join_requests: info.join_requests.iter().map(ToString::to_string).collect(),
                    accepting_requests: info.accepting_requests,
                    created_at: info.created_at.to_rfc3339(),
                    protected: info.protected,
                    protection_remaining_seconds: info.protection_remaining_seconds,
                }),
                Err(e) => kingdom_reply(e),
            }
        }
        Command::KingdomList => {
            let names = use_cases.kingdom.list_kingdoms.execute(&registries.kingdoms);
            CommandResult::success(names)
        }

        // =====================================================================
        // Place catalog administration
        // =====================================================================
        Command::PlaceCreate { name, kind } => {
            match use_cases
                .catalog
                .create_place
                .execute(&mut registries.places, name, &kind)
            {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => catalog_reply(e),
            }
        }
        Command::PlaceDelete { name } => {
            match use_cases
                .catalog
                .delete_place
                .execute(&mut registries.places, &name)
            {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => catalog_reply(e),
            }
        }
        Command::PlaceAddSpawn {
            name,
            world,
            x,
            y,
            z,
            yaw,
        } => {
            let spawn = SpawnPoint::new(world, x, y, z, yaw);
            match use_cases
                .catalog
                .add_spawn
                .execute(&mut registries.places, &name, spawn)
            {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => catalog_reply(e),
            }
        }
        Command::PlaceRemoveSpawn { name, x, y, z } => {
            match use_cases
                .catalog
                .remove_spawn
                .execute(&mut registries.places, &name, x, y, z)
            {
                Ok(()) => CommandResult::success_empty(),
                Err(e) => catalog_reply(e),
            }
        }
        Command::PlaceList { kind } => {
            match use_cases
                .catalog
                .list_places
                .execute(&registries.places, kind.as_deref())
            {
                Ok(places) => {
                    let entries: Vec<PlaceListEntry> = places
                        .iter()
                        .map(|place| PlaceListEntry {
                            name: place.name().as_str().to_string(),
                            kind: place.kind().to_string(),
                            spawns: place.spawn_points().len(),
                        })
                        .collect();
                    CommandResult::success(entries)
                }
                Err(e) => catalog_reply(e),
            }
        }
    }
}

fn parse_player_id(raw: &str) -> Result<PlayerId, CommandResult> {
    Uuid::parse_str(raw).map(PlayerId::from_uuid).map_err(|_| {
        CommandResult::error(
            RejectionCode::Validation,
            format!("Invalid player id: {}", raw),
        )
    })
}

fn lifecycle_reply(error: LifecycleError) -> CommandResult {
    let message = error.to_string();
    match error {
        LifecycleError::CreationCooldown {
            remaining_seconds, ..
        }
        | LifecycleError::JoinCooldown {
            remaining_seconds, ..
        } => CommandResult::error_with_details(
            RejectionCode::Cooldown,
            message,
            CooldownDetails { remaining_seconds },
        ),
        LifecycleError::PlaceNotFound(_) => CommandResult::error(RejectionCode::NotFound, message),
        LifecycleError::AlreadyAlive
        | LifecycleError::NotDead
        | LifecycleError::NoIdentity
        | LifecycleError::NoSpawnPoints { .. } => {
            CommandResult::error(RejectionCode::Precondition, message)
        }
        LifecycleError::Domain(e) => domain_reply(e),
        LifecycleError::World(_) => CommandResult::error(RejectionCode::Persistence, message),
    }
}

fn kingdom_reply(error: KingdomError) -> CommandResult {
    let message = error.to_string();
    match error {
        KingdomError::NotFound(_) => CommandResult::error(RejectionCode::NotFound, message),
        KingdomError::NameTaken(_)
        | KingdomError::AlreadyAffiliated
        | KingdomError::NotAffiliated
        | KingdomError::NotLeader
        | KingdomError::NotMember
        | KingdomError::CannotKickLeader
        | KingdomError::LeaderCannotLeave
        | KingdomError::RequestsClosed
        | KingdomError::AlreadyRequested
        | KingdomError::NoSuchRequest => CommandResult::error(RejectionCode::Precondition, message),
        KingdomError::Domain(e) => domain_reply(e),
    }
}

fn catalog_reply(error: CatalogError) -> CommandResult {
    let message = error.to_string();
    match error {
        CatalogError::NotFound(_) | CatalogError::NoSpawnNearby { .. } => {
            CommandResult::error(RejectionCode::NotFound, message)
        }
        CatalogError::NameTaken(_) => CommandResult::error(RejectionCode::Precondition, message),
        CatalogError::Domain(e) => domain_reply(e),
    }
}

fn domain_reply(error: DomainError) -> CommandResult {
    let code = match &error {
        DomainError::Validation(_) | DomainError::Parse(_) | DomainError::InvalidId(_) => {
            RejectionCode::Validation
        }
        DomainError::NotFound { .. } => RejectionCode::NotFound,
        DomainError::Constraint(_) | DomainError::InvalidStateTransition(_) => {
            RejectionCode::Precondition
        }
    };
    CommandResult::error(code, error.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use realmkeeper_domain::{DeathSnapshot, WorldPosition};

    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::document_store::JsonDocumentStore;
    use crate::infrastructure::notifier::TracingNotifier;
    use crate::infrastructure::settings::EngineSettings;
    use crate::infrastructure::world::HeadlessWorld;

    use super::*;

    const PLAYER: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
    const OTHER: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn test_app(dir: &tempfile::TempDir) -> App {
        let settings = EngineSettings {
            data_dir: dir.path().to_path_buf(),
            world_spawn: WorldPosition::new("world", 0.0, 64.0, 0.0, 0.0, 0.0),
            dead_zone: WorldPosition::new("world", 0.0, 200.0, 0.0, 0.0, 0.0),
        };
        let store = Arc::new(JsonDocumentStore::new(&settings.data_dir));
        App::new(
            &settings,
            store,
            Arc::new(FixedClock(Utc::now())),
            Arc::new(FixedRandom(0)),
            Arc::new(HeadlessWorld::new(settings.world_spawn.clone())),
            Arc::new(TracingNotifier::new()),
        )
    }

    fn seed_dead_with_identity(app: &mut App, raw_id: &str, died_ago: Duration) {
        let player_id = parse_player_id(raw_id).unwrap();
        let identity = realmkeeper_domain::CharacterIdentity::new(
            realmkeeper_domain::PersonName::new("Mara").unwrap(),
            realmkeeper_domain::PersonName::new("Voss").unwrap(),
            realmkeeper_domain::Age::new(27).unwrap(),
            "Nordic",
            "Female",
        )
        .unwrap();
        let record = app.registries.players.record_mut(player_id);
        record.mark_dead(
            Utc::now() - died_ago,
            DeathSnapshot::new(
                WorldPosition::new("world", 1.0, 64.0, 1.0, 0.0, 0.0),
                "",
                "",
                "",
                0,
                0.0,
            ),
        );
        record.adopt_identity(identity);
    }

    #[test]
    fn malformed_player_id_is_a_validation_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let reply = dispatch(
            &mut app,
            Command::Death {
                player_id: "not-a-uuid".to_string(),
                killer_id: None,
            },
        );

        match reply {
            CommandResult::Error { code, message, .. } => {
                assert_eq!(code, RejectionCode::Validation);
                assert!(message.contains("not-a-uuid"));
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn death_reply_reports_the_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let death = Command::Death {
            player_id: PLAYER.to_string(),
            killer_id: None,
        };

        let first = dispatch(&mut app, death.clone());
        let second = dispatch(&mut app, death);

        match first {
            CommandResult::Success { data } => {
                assert_eq!(data.unwrap()["outcome"], "died");
            }
            other => panic!("unexpected reply: {:?}", other),
        }
        match second {
            CommandResult::Success { data } => {
                assert_eq!(data.unwrap()["outcome"], "already_dead");
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn creation_during_cooldown_carries_remaining_seconds() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        dispatch(
            &mut app,
            Command::Death {
                player_id: PLAYER.to_string(),
                killer_id: None,
            },
        );

        let reply = dispatch(
            &mut app,
            Command::CreateCharacter {
                player_id: PLAYER.to_string(),
                first_name: "Mara".to_string(),
                last_name: "Voss".to_string(),
                age: 27,
                ethnicity: "Nordic".to_string(),
                gender: "Female".to_string(),
            },
        );

        // Death and creation share the fixed clock, so the full hour remains.
        match reply {
            CommandResult::Error {
                code, details: Some(details), ..
            } => {
                assert_eq!(code, RejectionCode::Cooldown);
                assert_eq!(details["remaining_seconds"], 3600);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn join_reply_reports_the_arrival() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        seed_dead_with_identity(&mut app, PLAYER, Duration::hours(2));
        assert!(dispatch(
            &mut app,
            Command::PlaceCreate {
                name: "Northaven".to_string(),
                kind: "government".to_string(),
            },
        )
        .is_success());
        assert!(dispatch(
            &mut app,
            Command::PlaceAddSpawn {
                name: "Northaven".to_string(),
                world: "world".to_string(),
                x: 12.0,
                y: 70.0,
                z: -4.0,
                yaw: 180.0,
            },
        )
        .is_success());

        let reply = dispatch(
            &mut app,
            Command::JoinPlace {
                player_id: PLAYER.to_string(),
                place: "northaven".to_string(),
            },
        );

        match reply {
            CommandResult::Success { data } => {
                let data = data.unwrap();
                assert_eq!(data["place"], "Northaven");
                assert_eq!(data["kind"], "government");
                assert_eq!(data["world"], "world");
                assert_eq!(data["x"], 12.0);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
        let player_id = parse_player_id(PLAYER).unwrap();
        let record = app.registries.players.record(player_id).unwrap();
        assert!(!record.is_dead());
        assert_eq!(record.current_place().unwrap().name(), "Northaven");
    }

    #[test]
    fn joining_an_unknown_place_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        seed_dead_with_identity(&mut app, PLAYER, Duration::hours(2));

        let reply = dispatch(
            &mut app,
            Command::JoinPlace {
                player_id: PLAYER.to_string(),
                place: "Nowhere".to_string(),
            },
        );

        match reply {
            CommandResult::Error { code, .. } => assert_eq!(code, RejectionCode::NotFound),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn kingdom_round_trip_through_the_dispatcher() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        assert!(dispatch(
            &mut app,
            Command::CreateKingdom {
                name: "Avalon".to_string(),
                leader_id: PLAYER.to_string(),
            },
        )
        .is_success());
        assert!(dispatch(
            &mut app,
            Command::JoinKingdom {
                player_id: OTHER.to_string(),
                name: "Avalon".to_string(),
            },
        )
        .is_success());

        let pending = dispatch(
            &mut app,
            Command::ListKingdomRequests {
                actor_id: PLAYER.to_string(),
            },
        );
        match pending {
            CommandResult::Success { data } => {
                assert_eq!(data.unwrap().as_array().unwrap().len(), 1);
            }
            other => panic!("unexpected reply: {:?}", other),
        }

        assert!(dispatch(
            &mut app,
            Command::AcceptKingdomRequest {
                actor_id: PLAYER.to_string(),
                player_id: OTHER.to_string(),
            },
        )
        .is_success());

        let info = dispatch(
            &mut app,
            Command::KingdomInfo {
                name: "avalon".to_string(),
            },
        );
        match info {
            CommandResult::Success { data } => {
                let data = data.unwrap();
                assert_eq!(data["name"], "Avalon");
                assert_eq!(data["members"].as_array().unwrap().len(), 2);
                assert_eq!(data["protected"], true);
                assert_eq!(
                    data["protection_remaining_seconds"],
                    Duration::days(3).num_seconds()
                );
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn place_list_filters_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        dispatch(
            &mut app,
            Command::PlaceCreate {
                name: "Northaven".to_string(),
                kind: "government".to_string(),
            },
        );
        dispatch(
            &mut app,
            Command::PlaceCreate {
                name: "Red Hand".to_string(),
                kind: "insurgent".to_string(),
            },
        );

        let reply = dispatch(
            &mut app,
            Command::PlaceList {
                kind: Some("insurgent".to_string()),
            },
        );

        match reply {
            CommandResult::Success { data } => {
                let entries = data.unwrap();
                let entries = entries.as_array().unwrap();
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0]["name"], "Red Hand");
                assert_eq!(entries[0]["spawns"], 0);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn tick_reports_how_many_players_were_confined() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        seed_dead_with_identity(&mut app, PLAYER, Duration::minutes(5));

        let reply = dispatch(&mut app, Command::Tick);

        match reply {
            CommandResult::Success { data } => {
                assert_eq!(data.unwrap()["confined"], 1);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }
}
