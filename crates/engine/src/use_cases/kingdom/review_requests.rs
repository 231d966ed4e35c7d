//! Join-request review.
//!
//! Leader-only surfaces over the pending-request set: list, accept or
//! deny one, accept or deny all. Bulk operations treat each id
//! independently; one stale entry never blocks the rest.

use std::sync::Arc;

use realmkeeper_domain::PlayerId;
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::NotifierPort;
use crate::registry::{KingdomRegistry, PlayerRecordStore};

use super::error::KingdomError;

pub struct AcceptRequest {
    notifier: Arc<dyn NotifierPort>,
}

impl AcceptRequest {
    pub fn new(notifier: Arc<dyn NotifierPort>) -> Self {
        Self { notifier }
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        records: &mut PlayerRecordStore,
        actor_id: PlayerId,
        target_id: PlayerId,
    ) -> Result<(), KingdomError> {
        let Some(kingdom) = kingdoms.by_leader(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        if !kingdom.has_requested(target_id) {
            return Err(KingdomError::NoSuchRequest);
        }
        let name = kingdom.name().as_str().to_string();

        // The petitioner may have joined elsewhere since requesting;
        // clear the stale request instead of double-homing them.
        if kingdoms.by_member(target_id).is_some() {
            if let Some(kingdom) = kingdoms.by_leader_mut(actor_id) {
                kingdom.remove_request(target_id);
            }
            kingdoms.persist();
            return Err(KingdomError::AlreadyAffiliated);
        }

        let Some(kingdom) = kingdoms.by_leader_mut(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        kingdom.add_member(target_id);
        kingdoms.persist();

        records.record_mut(target_id).set_kingdom(Some(name.clone()));
        records.persist();

        tracing::info!(kingdom = %name, player_id = %target_id, "Join request accepted");
        self.notifier.notify(WorldEvent::MemberJoined {
            name,
            player_id: target_id.to_uuid(),
        });

        Ok(())
    }
}

pub struct DenyRequest;

impl DenyRequest {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        actor_id: PlayerId,
        target_id: PlayerId,
    ) -> Result<(), KingdomError> {
        let Some(kingdom) = kingdoms.by_leader_mut(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        if !kingdom.remove_request(target_id) {
            return Err(KingdomError::NoSuchRequest);
        }
        kingdoms.persist();
        Ok(())
    }
}

impl Default for DenyRequest {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AcceptAllRequests {
    notifier: Arc<dyn NotifierPort>,
}

impl AcceptAllRequests {
    pub fn new(notifier: Arc<dyn NotifierPort>) -> Self {
        Self { notifier }
    }

    /// Returns how many petitioners were admitted.
    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        records: &mut PlayerRecordStore,
        actor_id: PlayerId,
    ) -> Result<usize, KingdomError> {
        let Some(kingdom) = kingdoms.by_leader(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        let name = kingdom.name().as_str().to_string();
        let pending: Vec<PlayerId> = kingdom.join_requests().iter().copied().collect();

        let mut admitted = 0;
        for target_id in pending {
            if kingdoms.by_member(target_id).is_some() {
                if let Some(kingdom) = kingdoms.by_leader_mut(actor_id) {
                    kingdom.remove_request(target_id);
                }
                continue;
            }
            let Some(kingdom) = kingdoms.by_leader_mut(actor_id) else {
                break;
            };
            kingdom.add_member(target_id);
            records.record_mut(target_id).set_kingdom(Some(name.clone()));
            self.notifier.notify(WorldEvent::MemberJoined {
                name: name.clone(),
                player_id: target_id.to_uuid(),
            });
            admitted += 1;
        }

        kingdoms.persist();
        records.persist();
        tracing::info!(kingdom = %name, admitted, "Accepted all join requests");
        Ok(admitted)
    }
}

pub struct DenyAllRequests;

impl DenyAllRequests {
    pub fn new() -> Self {
        Self
    }

    /// Returns how many requests were discarded.
    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        actor_id: PlayerId,
    ) -> Result<usize, KingdomError> {
        let Some(kingdom) = kingdoms.by_leader_mut(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        let denied = kingdom.clear_requests();
        kingdoms.persist();
        Ok(denied)
    }
}

impl Default for DenyAllRequests {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ListRequests;

impl ListRequests {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        kingdoms: &KingdomRegistry,
        actor_id: PlayerId,
    ) -> Result<Vec<PlayerId>, KingdomError> {
        let Some(kingdom) = kingdoms.by_leader(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        Ok(kingdom.join_requests().iter().copied().collect())
    }
}

impl Default for ListRequests {
    fn default() -> Self {
        Self::new()
    }
}
