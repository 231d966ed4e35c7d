//! Command types for the dispatcher entry point
//!
//! One variant per operation. Player ids travel as raw strings and are
//! parsed at the dispatch boundary; invalid ids become rejections rather
//! than transport failures.

use serde::{Deserialize, Serialize};

/// Sentinel place argument meaning "arrive owing allegiance to none".
pub const REFUGEE_SENTINEL: &str = "__refugee__";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // =========================================================================
    // Lifecycle
    // =========================================================================
    /// A player died. `killer_id` is set when another player caused it.
    Death {
        player_id: String,
        #[serde(default)]
        killer_id: Option<String>,
    },
    CreateCharacter {
        player_id: String,
        first_name: String,
        last_name: String,
        age: u8,
        ethnicity: String,
        gender: String,
    },
    /// `place` is a catalog place name or [`REFUGEE_SENTINEL`].
    JoinPlace {
        player_id: String,
        place: String,
    },
    /// Staff override: restore the death snapshot and bring the player back.
    Revive {
        player_id: String,
    },
    /// Periodic host-driven sweep confining dead players to the dead zone.
    Tick,

    // =========================================================================
    // Kingdom governance
    // =========================================================================
    CreateKingdom {
        name: String,
        leader_id: String,
    },
    DeleteKingdom {
        name: String,
    },
    TransferKingdom {
        name: String,
        new_leader_id: String,
    },
    RenameKingdom {
        actor_id: String,
        new_name: String,
    },
    JoinKingdom {
        player_id: String,
        name: String,
    },
    LeaveKingdom {
        player_id: String,
    },
    KickKingdomMember {
        actor_id: String,
        player_id: String,
    },
    ListKingdomRequests {
        actor_id: String,
    },
    AcceptKingdomRequest {
        actor_id: String,
        player_id: String,
    },
    DenyKingdomRequest {
        actor_id: String,
        player_id: String,
    },
    AcceptAllKingdomRequests {
        actor_id: String,
    },
    DenyAllKingdomRequests {
        actor_id: String,
    },
    SetKingdomRequests {
        actor_id: String,
        accepting: bool,
    },
    KingdomInfo {
        name: String,
    },
    KingdomList,

    // =========================================================================
    // Place catalog administration
    // =========================================================================
    PlaceCreate {
        name: String,
        kind: String,
    },
    PlaceDelete {
        name: String,
    },
    PlaceAddSpawn {
        name: String,
        world: String,
        x: f64,
        y: f64,
        z: f64,
        yaw: f32,
    },
    PlaceRemoveSpawn {
        name: String,
        x: f64,
        y: f64,
        z: f64,
    },
    PlaceList {
        #[serde(default)]
        kind: Option<String>,
    },
}
