use realmkeeper_domain::PlayerId;

use crate::registry::KingdomRegistry;

use super::error::KingdomError;

/// Opens or closes the kingdom gate for new join requests.
///
/// Pending requests are untouched; closing only stops new ones.
pub struct SetAcceptingRequests;

impl SetAcceptingRequests {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        kingdoms: &mut KingdomRegistry,
        actor_id: PlayerId,
        accepting: bool,
    ) -> Result<(), KingdomError> {
        let Some(kingdom) = kingdoms.by_leader_mut(actor_id) else {
            return Err(KingdomError::NotLeader);
        };
        kingdom.set_accepting_requests(accepting);
        let name = kingdom.name().as_str().to_string();
        kingdoms.persist();
        tracing::debug!(kingdom = %name, accepting, "Join-request gate toggled");
        Ok(())
    }
}

impl Default for SetAcceptingRequests {
    fn default() -> Self {
        Self::new()
    }
}
