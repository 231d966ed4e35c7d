//! Kingdom entity

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::cooldown;
use crate::ids::PlayerId;
use crate::value_objects::KingdomName;

/// A player-led named group with membership, a join-request queue, and a
/// temporary leader-protection window starting at creation.
///
/// Invariant: the join-request set stays disjoint from the member set;
/// accepting a request moves the id from one to the other in a single step.
/// The leader starts as a member but can end up outside the set when they
/// die (the kingdom is then leaderless until leadership is transferred).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kingdom {
    name: KingdomName,
    leader_id: PlayerId,
    members: BTreeSet<PlayerId>,
    #[serde(default)]
    join_requests: BTreeSet<PlayerId>,
    accepting_requests: bool,
    created_at: DateTime<Utc>,
}

impl Kingdom {
    pub fn new(name: KingdomName, leader_id: PlayerId, now: DateTime<Utc>) -> Self {
        let mut members = BTreeSet::new();
        members.insert(leader_id);
        Self {
            name,
            leader_id,
            members,
            join_requests: BTreeSet::new(),
            accepting_requests: true,
            created_at: now,
        }
    }

    pub fn name(&self) -> &KingdomName {
        &self.name
    }

    pub fn leader_id(&self) -> PlayerId {
        self.leader_id
    }

    pub fn members(&self) -> &BTreeSet<PlayerId> {
        &self.members
    }

    pub fn join_requests(&self) -> &BTreeSet<PlayerId> {
        &self.join_requests
    }

    pub fn is_accepting_requests(&self) -> bool {
        self.accepting_requests
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_leader(&self, id: PlayerId) -> bool {
        self.leader_id == id
    }

    pub fn is_member(&self, id: PlayerId) -> bool {
        self.members.contains(&id)
    }

    pub fn has_requested(&self, id: PlayerId) -> bool {
        self.join_requests.contains(&id)
    }

    /// Add a member, clearing any pending request for the same id in the
    /// same step.
    pub fn add_member(&mut self, id: PlayerId) {
        self.join_requests.remove(&id);
        self.members.insert(id);
    }

    pub fn remove_member(&mut self, id: PlayerId) -> bool {
        self.members.remove(&id)
    }

    /// Queue a join request. Returns false if the id is already a member or
    /// already queued.
    pub fn add_request(&mut self, id: PlayerId) -> bool {
        if self.members.contains(&id) {
            return false;
        }
        self.join_requests.insert(id)
    }

    pub fn remove_request(&mut self, id: PlayerId) -> bool {
        self.join_requests.remove(&id)
    }

    /// Drop every pending request, returning how many were cleared.
    pub fn clear_requests(&mut self) -> usize {
        let count = self.join_requests.len();
        self.join_requests.clear();
        count
    }

    pub fn set_leader_id(&mut self, id: PlayerId) {
        self.leader_id = id;
    }

    pub fn set_accepting_requests(&mut self, accepting: bool) {
        self.accepting_requests = accepting;
    }

    /// In-place rename; membership, requests, leadership, and the creation
    /// time (and with it the protection window) all carry over.
    pub fn rename(&mut self, name: KingdomName) {
        self.name = name;
    }

    pub fn protection_ends_at(&self) -> DateTime<Utc> {
        self.created_at + cooldown::protection_window()
    }

    /// Whether the leader is still shielded from player kills.
    pub fn is_protected(&self, now: DateTime<Utc>) -> bool {
        now < self.protection_ends_at()
    }

    /// Time left on the protection window, clamped to zero.
    pub fn protection_remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.protection_ends_at() - now).max(Duration::zero())
    }
}
