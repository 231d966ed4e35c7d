//! Kingdom dissolution.
//!
//! Privileged operation. Every member's record loses its affiliation.

use std::sync::Arc;

use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::NotifierPort;
use crate::registry::{KingdomRegistry, PlayerRecordStore};

use super::error::KingdomError;

pub struct DeleteKingdom {
    notifier: Arc<dyn NotifierPort>,
}

impl DeleteKingdom {
    pub fn new(notifier: Arc<dyn NotifierPort>) -> Self {
        Self { notifier }
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        records: &mut PlayerRecordStore,
        name: &str,
    ) -> Result<(), KingdomError> {
        let Some(kingdom) = kingdoms.remove(name) else {
            return Err(KingdomError::NotFound(name.to_string()));
        };
        kingdoms.persist();

        for member in kingdom.members() {
            records.record_mut(*member).set_kingdom(None);
        }
        records.persist();

        let display_name = kingdom.name().as_str().to_string();
        tracing::info!(kingdom = %display_name, "Kingdom deleted");
        self.notifier
            .notify(WorldEvent::KingdomDeleted { name: display_name });

        Ok(())
    }
}
