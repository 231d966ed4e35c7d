//! Voluntary departure.
//!
//! Leaders must hand off leadership first; a kingdom never loses its
//! leader through this path.

use std::sync::Arc;

use realmkeeper_domain::PlayerId;
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::NotifierPort;
use crate::registry::{KingdomRegistry, PlayerRecordStore};

use super::error::KingdomError;

pub struct LeaveKingdom {
    notifier: Arc<dyn NotifierPort>,
}

impl LeaveKingdom {
    pub fn new(notifier: Arc<dyn NotifierPort>) -> Self {
        Self { notifier }
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        records: &mut PlayerRecordStore,
        player_id: PlayerId,
    ) -> Result<(), KingdomError> {
        let Some(kingdom) = kingdoms.by_member_mut(player_id) else {
            return Err(KingdomError::NotAffiliated);
        };
        if kingdom.is_leader(player_id) {
            return Err(KingdomError::LeaderCannotLeave);
        }

        kingdom.remove_member(player_id);
        let name = kingdom.name().as_str().to_string();
        kingdoms.persist();

        records.record_mut(player_id).set_kingdom(None);
        records.persist();

        tracing::info!(kingdom = %name, player_id = %player_id, "Member left kingdom");
        self.notifier.notify(WorldEvent::MemberLeft {
            name,
            player_id: player_id.to_uuid(),
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

    fn test_registries() -> (tempfile::TempDir, KingdomRegistry, PlayerRecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonDocumentStore::new(dir.path()));
        (dir, KingdomRegistry::load(store.clone()), PlayerRecordStore::load(store))
    }

    #[test]
    fn member_leaves_and_record_is_cleared() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let member = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let mut kingdom = Kingdom::new(KingdomName::new("Avalon").unwrap(), leader, Utc::now());
        kingdom.add_member(member);
        kingdoms.insert(kingdom);
        records.record_mut(member).set_kingdom(Some("Avalon".to_string()));

        LeaveKingdom::new(notifier.clone())
            .execute(&mut kingdoms, &mut records, member)
            .unwrap();

        assert!(!kingdoms.get("Avalon").unwrap().is_member(member));
        assert!(records.record(member).unwrap().kingdom().is_none());
        assert!(matches!(
            notifier.take().as_slice(),
            [WorldEvent::MemberLeft { .. }]
        ));
    }

    #[test]
    fn leader_cannot_leave() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        kingdoms.insert(Kingdom::new(
            KingdomName::new("Avalon").unwrap(),
            leader,
            Utc::now(),
        ));

        let result = LeaveKingdom::new(notifier).execute(&mut kingdoms, &mut records, leader);

        assert!(matches!(result, Err(KingdomError::LeaderCannotLeave)));
        assert!(kingdoms.get("Avalon").unwrap().is_member(leader));
    }

    #[test]
    fn unaffiliated_player_cannot_leave() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let notifier = Arc::new(RecordingNotifier::new());

        let result =
            LeaveKingdom::new(notifier).execute(&mut kingdoms, &mut records, PlayerId::new());

        assert!(matches!(result, Err(KingdomError::NotAffiliated)));
    }
}
