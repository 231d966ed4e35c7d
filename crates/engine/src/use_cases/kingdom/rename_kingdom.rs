//! Kingdom renaming.
//!
//! Leader-only. The kingdom keeps its identity (members, requests,
//! protection window); the registry re-keys the entry and every
//! member's record is updated to the new display name.

use std::sync::Arc;

use realmkeeper_domain::{KingdomName, PlayerId};
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::NotifierPort;
use crate::registry::{KingdomRegistry, PlayerRecordStore};

use super::error::KingdomError;

pub struct RenameKingdom {
    notifier: Arc<dyn NotifierPort>,
}

impl RenameKingdom {
    pub fn new(notifier: Arc<dyn NotifierPort>) -> Self {
        Self { notifier }
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        records: &mut PlayerRecordStore,
        actor_id: PlayerId,
        new_name: String,
    ) -> Result<(), KingdomError> {
        let new_name = KingdomName::new(new_name)?;
        let Some(kingdom) = kingdoms.by_leader(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        let old_name = kingdom.name().as_str().to_string();
        let old_key = kingdom.name().lookup_key();
        let members: Vec<PlayerId> = kingdom.members().iter().copied().collect();

        if new_name.lookup_key() != old_key && kingdoms.contains(new_name.as_str()) {
            return Err(KingdomError::NameTaken(new_name.as_str().to_string()));
        }

        if !kingdoms.rename(&old_name, new_name.clone()) {
            return Err(KingdomError::NotFound(old_name));
        }
        kingdoms.persist();

        for member in &members {
            records
                .record_mut(*member)
                .set_kingdom(Some(new_name.as_str().to_string()));
        }
        records.persist();

        tracing::info!(old_name = %old_name, new_name = %new_name, "Kingdom renamed");
        self.notifier.notify(WorldEvent::KingdomRenamed {
            old_name,
            new_name: new_name.as_str().to_string(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use realmkeeper_domain::Kingdom;

    use crate::infrastructure::document_store::JsonDocumentStore;
    use crate::infrastructure::notifier::RecordingNotifier;

    use super::*;

    fn test_registries() -> (tempfile::TempDir, KingdomRegistry, PlayerRecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonDocumentStore::new(dir.path()));
        (dir, KingdomRegistry::load(store.clone()), PlayerRecordStore::load(store))
    }

    #[test]
    fn leader_renames_and_member_records_follow() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let member = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let mut kingdom = Kingdom::new(KingdomName::new("Avalon").unwrap(), leader, Utc::now());
        kingdom.add_member(member);
        kingdoms.insert(kingdom);
        records.record_mut(leader).set_kingdom(Some("Avalon".to_string()));
        records.record_mut(member).set_kingdom(Some("Avalon".to_string()));

        RenameKingdom::new(notifier.clone())
            .execute(&mut kingdoms, &mut records, leader, "Camelot".to_string())
            .unwrap();

        assert!(kingdoms.get("Avalon").is_none());
        let renamed = kingdoms.get("Camelot").unwrap();
        assert!(renamed.is_member(member));
        assert_eq!(records.record(member).unwrap().kingdom(), Some("Camelot"));
        assert!(matches!(
            notifier.take().as_slice(),
            [WorldEvent::KingdomRenamed { .. }]
        ));
    }

    #[test]
    fn non_leader_cannot_rename() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let member = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        let mut kingdom = Kingdom::new(KingdomName::new("Avalon").unwrap(), leader, Utc::now());
        kingdom.add_member(member);
        kingdoms.insert(kingdom);

        let result = RenameKingdom::new(notifier).execute(
            &mut kingdoms,
            &mut records,
            member,
            "Camelot".to_string(),
        );

        assert!(matches!(result, Err(KingdomError::NotLeader)));
        assert!(kingdoms.get("Avalon").is_some());
    }

    #[test]
    fn rename_onto_another_kingdom_fails() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        kingdoms.insert(Kingdom::new(
            KingdomName::new("Avalon").unwrap(),
            leader,
            Utc::now(),
        ));
        kingdoms.insert(Kingdom::new(
            KingdomName::new("Camelot").unwrap(),
            PlayerId::new(),
            Utc::now(),
        ));

        let result = RenameKingdom::new(notifier).execute(
            &mut kingdoms,
            &mut records,
            leader,
            "camelot".to_string(),
        );

        assert!(matches!(result, Err(KingdomError::NameTaken(_))));
        assert!(kingdoms.get("Avalon").is_some());
    }

    #[test]
    fn rename_to_own_name_variant_is_allowed() {
        let (_dir, mut kingdoms, mut records) = test_registries();
        let leader = PlayerId::new();
        let notifier = Arc::new(RecordingNotifier::new());

        kingdoms.insert(Kingdom::new(
            KingdomName::new("Avalon").unwrap(),
            leader,
            Utc::now(),
        ));

        RenameKingdom::new(notifier)
            .execute(&mut kingdoms, &mut records, leader, "AVALON".to_string())
            .unwrap();

        assert_eq!(
            kingdoms.get("avalon").map(|k| k.name().as_str()),
            Some("AVALON")
        );
    }
}
