//! World events
//!
//! Coarse-grained events emitted after a transition commits. Delivery is
//! best-effort and fire-and-forget; nothing in the lifecycle depends on a
//! consumer seeing them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event emitted to the outbound notifier after significant state changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorldEvent {
    // Lifecycle
    PlayerDied {
        player_id: Uuid,
        killer_id: Option<Uuid>,
    },
    DeathVetoed {
        player_id: Uuid,
        killer_id: Uuid,
        kingdom: String,
        remaining_seconds: i64,
    },
    CharacterCreated {
        player_id: Uuid,
        name: String,
        age: u8,
    },
    PlaceJoined {
        player_id: Uuid,
        place: String,
        kind: String,
    },
    PlayerRevived {
        player_id: Uuid,
    },

    // Kingdom governance
    KingdomCreated {
        name: String,
        leader_id: Uuid,
    },
    KingdomDeleted {
        name: String,
    },
    KingdomRenamed {
        old_name: String,
        new_name: String,
    },
    LeadershipTransferred {
        name: String,
        new_leader_id: Uuid,
    },
    MemberJoined {
        name: String,
        player_id: Uuid,
    },
    MemberLeft {
        name: String,
        player_id: Uuid,
    },
    MemberKicked {
        name: String,
        player_id: Uuid,
    },
    /// An unprotected leader died; leadership transfer is the follow-up.
    KingdomLeaderDied {
        name: String,
        leader_id: Uuid,
    },
}
