//! Leadership transfer.
//!
//! Privileged operation, typically the follow-up to a leader's death.
//! Membership sets are untouched; only the leader id changes.

use std::sync::Arc;

use realmkeeper_domain::PlayerId;
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::NotifierPort;
use crate::registry::KingdomRegistry;

use super::error::KingdomError;

pub struct TransferLeadership {
    notifier: Arc<dyn NotifierPort>,
}

impl TransferLeadership {
    pub fn new(notifier: Arc<dyn NotifierPort>) -> Self {
        Self { notifier }
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        name: &str,
        new_leader_id: PlayerId,
    ) -> Result<(), KingdomError> {
        let Some(kingdom) = kingdoms.get_mut(name) else {
            return Err(KingdomError::NotFound(name.to_string()));
        };
        if !kingdom.is_member(new_leader_id) {
            return Err(KingdomError::NotMember);
        }

        kingdom.set_leader_id(new_leader_id);
        let display_name = kingdom.name().as_str().to_string();
        kingdoms.persist();

        tracing::info!(kingdom = %display_name, new_leader_id = %new_leader_id, "Leadership transferred");
        self.notifier.notify(WorldEvent::LeadershipTransferred {
            name: display_name,
            new_leader_id: new_leader_id.to_uuid(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use realmkeeper_domain::{Kingdom, KingdomName};

    use crate::infrastructure::document_store::JsonDocumentStore;
    use crate::infrastructure::notifier::RecordingNotifier;

    use super::*;

    fn test_kingdoms() -> (tempfile::TempDir, KingdomRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let kingdoms = KingdomRegistry::load(Arc::new(JsonDocumentStore::new(dir.path())));
        (dir, kingdoms)
    }

    #[test]
    fn when_new_leader_is_a_member_transfer_succeeds() {
        let (_dir, mut kingdoms) = test_kingdoms();
        let old_leader = PlayerId::new();
        let successor = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let mut kingdom =
            Kingdom::new(KingdomName::new("Avalon").unwrap(), old_leader, Utc::now());
        kingdom.add_member(successor);
        kingdoms.insert(kingdom);

        TransferLeadership::new(notifier.clone())
            .execute(&mut kingdoms, "Avalon", successor)
            .unwrap();

        let kingdom = kingdoms.get("Avalon").unwrap();
        assert!(kingdom.is_leader(successor));
        // The previous leader stays a regular member.
        assert!(kingdom.is_member(old_leader));
        assert!(matches!(
            notifier.take().as_slice(),
            [WorldEvent::LeadershipTransferred { .. }]
        ));
    }

    #[test]
    fn when_new_leader_is_not_a_member_transfer_fails() {
        let (_dir, mut kingdoms) = test_kingdoms();
        let leader = PlayerId::new();
        let outsider = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        kingdoms.insert(Kingdom::new(
            KingdomName::new("Avalon").unwrap(),
            leader,
            Utc::now(),
        ));

        let result =
            TransferLeadership::new(notifier).execute(&mut kingdoms, "Avalon", outsider);

        assert!(matches!(result, Err(KingdomError::NotMember)));
        assert!(kingdoms.get("Avalon").unwrap().is_leader(leader));
    }
}
