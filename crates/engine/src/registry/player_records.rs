//! Player record registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use realmkeeper_domain::{PlayerId, PlayerRecord};

use crate::infrastructure::document_store::JsonDocumentStore;

const DOCUMENT: &str = "players";

/// All known player records, keyed by player id.
///
/// The in-memory map is authoritative; `persist` writes it through to
/// disk at the end of each state-changing transition.
pub struct PlayerRecordStore {
    records: BTreeMap<PlayerId, PlayerRecord>,
    store: Arc<JsonDocumentStore>,
}

impl PlayerRecordStore {
    pub fn load(store: Arc<JsonDocumentStore>) -> Self {
        let records = store.load(DOCUMENT);
        Self { records, store }
    }

    pub fn record(&self, player_id: PlayerId) -> Option<&PlayerRecord> {
        self.records.get(&player_id)
    }

    /// Mutable lookup, creating a fresh alive record on first contact.
    pub fn record_mut(&mut self, player_id: PlayerId) -> &mut PlayerRecord {
        self.records.entry(player_id).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &PlayerRecord)> {
        self.records.iter()
    }

    /// Persistence failures are logged and swallowed; the in-memory
    /// state stays authoritative for the rest of the session.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(DOCUMENT, &self.records) {
            tracing::warn!(error = %e, "Failed to persist player records, keeping in-memory state");
        }
    }
}
