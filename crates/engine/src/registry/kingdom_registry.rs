//! Kingdom registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use realmkeeper_domain::{Kingdom, KingdomName, PlayerId};

use crate::infrastructure::document_store::JsonDocumentStore;

const DOCUMENT: &str = "kingdoms";

/// All kingdoms, keyed by lowercased name.
pub struct KingdomRegistry {
    kingdoms: BTreeMap<String, Kingdom>,
    store: Arc<JsonDocumentStore>,
}

impl KingdomRegistry {
    pub fn load(store: Arc<JsonDocumentStore>) -> Self {
        let kingdoms = store.load(DOCUMENT);
        Self { kingdoms, store }
    }

    pub fn get(&self, name: &str) -> Option<&Kingdom> {
        self.kingdoms.get(&name.to_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Kingdom> {
        self.kingdoms.get_mut(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kingdoms.contains_key(&name.to_lowercase())
    }

    pub fn insert(&mut self, kingdom: Kingdom) {
        self.kingdoms.insert(kingdom.name().lookup_key(), kingdom);
    }

    pub fn remove(&mut self, name: &str) -> Option<Kingdom> {
        self.kingdoms.remove(&name.to_lowercase())
    }

    /// A player holds membership in at most one kingdom.
    pub fn by_member(&self, player_id: PlayerId) -> Option<&Kingdom> {
        self.kingdoms.values().find(|k| k.is_member(player_id))
    }

    pub fn by_member_mut(&mut self, player_id: PlayerId) -> Option<&mut Kingdom> {
        self.kingdoms.values_mut().find(|k| k.is_member(player_id))
    }

    pub fn by_leader(&self, player_id: PlayerId) -> Option<&Kingdom> {
        self.kingdoms.values().find(|k| k.is_leader(player_id))
    }

    pub fn by_leader_mut(&mut self, player_id: PlayerId) -> Option<&mut Kingdom> {
        self.kingdoms.values_mut().find(|k| k.is_leader(player_id))
    }

    /// Re-keys a kingdom under a new name. Returns false if the kingdom
    /// does not exist or the new name would collide with another entry.
    pub fn rename(&mut self, name: &str, new_name: KingdomName) -> bool {
        let old_key = name.to_lowercase();
        let new_key = new_name.lookup_key();
        if new_key != old_key && self.kingdoms.contains_key(&new_key) {
            return false;
        }

        let Some(mut kingdom) = self.kingdoms.remove(&old_key) else {
            return false;
        };
        kingdom.rename(new_name);
        self.kingdoms.insert(new_key, kingdom);
        true
    }

    /// Display names, ordered by lookup key.
    pub fn names(&self) -> Vec<String> {
        self.kingdoms
            .values()
            .map(|k| k.name().as_str().to_string())
            .collect()
    }

    /// Persistence failures are logged and swallowed; the in-memory
    /// state stays authoritative for the rest of the session.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(DOCUMENT, &self.kingdoms) {
            tracing::warn!(error = %e, "Failed to persist kingdoms, keeping in-memory state");
        }
    }
}
