//! Member removal by the leader.

use std::sync::Arc;

use realmkeeper_domain::PlayerId;
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::NotifierPort;
use crate::registry::{KingdomRegistry, PlayerRecordStore};

use super::error::KingdomError;

pub struct KickMember {
    notifier: Arc<dyn NotifierPort>,
}

impl KickMember {
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
        let Some(kingdom) = kingdoms.by_leader_mut(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        if target_id == actor_id {
            return Err(KingdomError::CannotKickLeader);
        }
        if !kingdom.is_member(target_id) {
            return Err(KingdomError::NotMember);
        }

        kingdom.remove_member(target_id);
        let name = kingdom.name().as_str().to_string();
        kingdoms.persist();

        records.record_mut(target_id).set_kingdom(None);
        records.persist();

        tracing::info!(kingdom = %name, player_id = %target_id, "Member kicked");
        self.notifier.notify(WorldEvent::MemberKicked {
            name,
            player_id: target_id.to_uuid(),
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
    fn leader_kicks_a_member() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let member = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let mut kingdom = Kingdom::new(KingdomName::new("Avalon").unwrap(), leader, Utc::now());
        kingdom.add_member(member);
        kingdoms.insert(kingdom);
        records.record_mut(member).set_kingdom(Some("Avalon".to_string()));

        KickMember::new(notifier.clone())
            .execute(&mut kingdoms, &mut records, leader, member)
            .unwrap();

        assert!(!kingdoms.get("Avalon").unwrap().is_member(member));
        assert!(records.record(member).unwrap().kingdom().is_none());
        assert!(matches!(
            notifier.take().as_slice(),
            [WorldEvent::MemberKicked { .. }]
        ));
    }

    #[test]
    fn leader_cannot_kick_themselves() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        kingdoms.insert(Kingdom::new(
            KingdomName::new("Avalon").unwrap(),
            leader,
            Utc::now(),
        ));

        let result =
            KickMember::new(notifier).execute(&mut kingdoms, &mut records, leader, leader);

        assert!(matches!(result, Err(KingdomError::CannotKickLeader)));
    }

    #[test]
    fn non_leader_cannot_kick() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let member = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let mut kingdom = Kingdom::new(KingdomName::new("Avalon").unwrap(), leader, Utc::now());
        kingdom.add_member(member);
        kingdoms.insert(kingdom);

        let result =
            KickMember::new(notifier).execute(&mut kingdoms, &mut records, member, leader);

        assert!(matches!(result, Err(KingdomError::NotLeader)));
    }

    #[test]
    fn outsiders_cannot_be_kicked() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        kingdoms.insert(Kingdom::new(
            KingdomName::new("Avalon").unwrap(),
            leader,
            Utc::now(),
        ));

        let result = KickMember::new(notifier).execute(
            &mut kingdoms,
            &mut records,
            leader,
            PlayerId::new(),
        );

        assert!(matches!(result, Err(KingdomError::NotMember)));
    }
}
