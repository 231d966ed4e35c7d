//! Player record entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Affiliation, CharacterIdentity, DeathSnapshot};

/// Per-player lifecycle and affiliation state.
///
/// Records are created lazily on first reference and never deleted:
/// `last_place` and `death_timestamp` must survive long after death so
/// rejoin cooldowns can still be computed.
///
/// Invariant: a dead record never holds a current place. Death also strips
/// the identity and the kingdom; an identity can be adopted again while
/// still dead, but a place returns only through `join_place`, the
/// transition back to alive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    is_dead: bool,
    character_identity: Option<CharacterIdentity>,
    current_place: Option<Affiliation>,
    last_place: Option<Affiliation>,
    death_timestamp: Option<DateTime<Utc>>,
    death_snapshot: Option<DeathSnapshot>,
    kingdom: Option<String>,
}

impl PlayerRecord {
    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn identity(&self) -> Option<&CharacterIdentity> {
        self.character_identity.as_ref()
    }

    pub fn current_place(&self) -> Option<&Affiliation> {
        self.current_place.as_ref()
    }

    pub fn last_place(&self) -> Option<&Affiliation> {
        self.last_place.as_ref()
    }

    pub fn death_timestamp(&self) -> Option<DateTime<Utc>> {
        self.death_timestamp
    }

    pub fn death_snapshot(&self) -> Option<&DeathSnapshot> {
        self.death_snapshot.as_ref()
    }

    /// Display name of the kingdom this player belongs to, if any.
    pub fn kingdom(&self) -> Option<&str> {
        self.kingdom.as_deref()
    }

    /// Transition to the dead state.
    ///
    /// Captures the snapshot, rolls `current_place` into `last_place`, and
    /// strips the identity and the kingdom. The kingdom's own member set is
    /// the caller's to fix; this record cannot reach it.
    pub fn mark_dead(&mut self, now: DateTime<Utc>, snapshot: DeathSnapshot) {
        self.is_dead = true;
        self.death_timestamp = Some(now);
        self.last_place = self.current_place.take();
        self.character_identity = None;
        self.death_snapshot = Some(snapshot);
        self.kingdom = None;
    }

    /// Attach a freshly created identity. The player stays dead until a
    /// place is joined. Any residual snapshot is discarded; a new life does
    /// not inherit the old one's belongings.
    pub fn adopt_identity(&mut self, identity: CharacterIdentity) {
        self.character_identity = Some(identity);
        self.death_snapshot = None;
    }

    /// Transition back to the alive state through a place join.
    pub fn join_place(&mut self, affiliation: Affiliation) {
        self.current_place = Some(affiliation);
        self.is_dead = false;
        self.death_snapshot = None;
    }

    /// Administrative revival: returns to the alive state and hands the
    /// caller the captured snapshot (consumed exactly once). The identity
    /// stays cleared; it was lost at death.
    pub fn revive(&mut self) -> Option<DeathSnapshot> {
        self.is_dead = false;
        self.death_snapshot.take()
    }

    pub fn set_kingdom(&mut self, kingdom: Option<String>) {
        self.kingdom = kingdom;
    }
}
