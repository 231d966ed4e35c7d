//! Read-only kingdom queries.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use realmkeeper_domain::PlayerId;

use crate::infrastructure::ports::ClockPort;
use crate::registry::KingdomRegistry;

use super::error::KingdomError;

#[derive(Debug, Clone)]
pub struct KingdomInfoOutput {
    pub name: String,
    pub leader_id: PlayerId,
    pub members: Vec<PlayerId>,
    pub join_requests: Vec<PlayerId>,
    pub accepting_requests: bool,
    pub created_at: DateTime<Utc>,
    pub protected: bool,
    pub protection_remaining_seconds: i64,
}

pub struct KingdomInfo {
    clock: Arc<dyn ClockPort>,
}

impl KingdomInfo {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    pub fn execute(
        &self,
        kingdoms: &KingdomRegistry,
        name: &str,
    ) -> Result<KingdomInfoOutput, KingdomError> {
        let Some(kingdom) = kingdoms.get(name) else {
            return Err(KingdomError::NotFound(name.to_string()));
        };
        let now = self.clock.now();
        Ok(KingdomInfoOutput {
            name: kingdom.name().as_str().to_string(),
            leader_id: kingdom.leader_id(),
            members: kingdom.members().iter().copied().collect(),
            join_requests: kingdom.join_requests().iter().copied().collect(),
            accepting_requests: kingdom.is_accepting_requests(),
            created_at: kingdom.created_at(),
            protected: kingdom.is_protected(now),
            protection_remaining_seconds: kingdom.protection_remaining(now).num_seconds(),
        })
    }
}

pub struct ListKingdoms;

impl ListKingdoms {
    pub fn new() -> Self {
        Self
    }

    /// Display names of every kingdom, in registry order.
    pub fn execute(&self, kingdoms: &KingdomRegistry) -> Vec<String> {
        kingdoms.names()
    }
}

impl Default for ListKingdoms {
    fn default() -> Self {
        Self::new()
    }
}
