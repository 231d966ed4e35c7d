//! Kingdom founding.
//!
//! Privileged operation. The new kingdom starts with the leader as its
//! only member and a three-day leader-protection window.

use std::sync::Arc;

use realmkeeper_domain::{Kingdom, KingdomName, PlayerId};
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::{ClockPort, NotifierPort};
use crate::registry::{KingdomRegistry, PlayerRecordStore};

use super::error::KingdomError;

pub struct CreateKingdom {
    clock: Arc<dyn ClockPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl CreateKingdom {
    pub fn new(clock: Arc<dyn ClockPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { clock, notifier }
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        records: &mut PlayerRecordStore,
        name: String,
        leader_id: PlayerId,
    ) -> Result<(), KingdomError> {
        let name = KingdomName::new(name)?;
        if kingdoms.contains(name.as_str()) {
            return Err(KingdomError::NameTaken(name.as_str().to_string()));
        }
        if kingdoms.by_member(leader_id).is_some() {
            return Err(KingdomError::AlreadyAffiliated);
        }

        let kingdom = Kingdom::new(name.clone(), leader_id, self.clock.now());
        kingdoms.insert(kingdom);
        kingdoms.persist();

        records
            .record_mut(leader_id)
            .set_kingdom(Some(name.as_str().to_string()));
        records.persist();

        tracing::info!(kingdom = %name, leader_id = %leader_id, "Kingdom created");
        self.notifier.notify(WorldEvent::KingdomCreated {
            name: name.as_str().to_string(),
            leader_id: leader_id.to_uuid(),
        });

        Ok(())
    }
}
