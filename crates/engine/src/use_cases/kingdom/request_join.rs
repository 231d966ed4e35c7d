//! Join requests.
//!
//! Self-service: a player petitions a kingdom. Requests sit pending
//! until the leader reviews them.

use realmkeeper_domain::PlayerId;

use crate::registry::KingdomRegistry;

use super::error::KingdomError;

pub struct RequestJoin;

impl RequestJoin {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        name: &str,
        player_id: PlayerId,
    ) -> Result<(), KingdomError> {
        if kingdoms.by_member(player_id).is_some() {
            return Err(KingdomError::AlreadyAffiliated);
        }

        let Some(kingdom) = kingdoms.get_mut(name) else {
            return Err(KingdomError::NotFound(name.to_string()));
        };
        if !kingdom.is_accepting_requests() {
            return Err(KingdomError::RequestsClosed);
        }
        if kingdom.has_requested(player_id) {
            return Err(KingdomError::AlreadyRequested);
        }

        kingdom.add_request(player_id);
        kingdoms.persist();

        tracing::debug!(kingdom = %name, player_id = %player_id, "Join request filed");
        Ok(())
    }
}

impl Default for RequestJoin {
    fn default() -> Self {
        Self::new()
    }
}
