//! Character re-creation.
//!
//! A dead player takes on a fresh identity. The record stays dead until
//! a place is joined; no teleport or vitals change happens here.

use std::sync::Arc;

use realmkeeper_domain::{
    cooldown, Age, CharacterIdentity, CooldownVerdict, PersonName, PlayerId,
};
use realmkeeper_shared::WorldEvent;

use crate::infrastructure::ports::{ClockPort, NotifierPort};
use crate::registry::PlayerRecordStore;

use super::error::LifecycleError;

#[derive(Debug, Clone)]
pub struct CreateCharacterInput {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub ethnicity: String,
    pub gender: String,
}

#[derive(Debug, Clone)]
pub struct CreateCharacterOutput {
    pub identity: CharacterIdentity,
    /// True when an identity already existed and was handed back as-is.
    pub reopened: bool,
}

pub struct CreateCharacter {
    clock: Arc<dyn ClockPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl CreateCharacter {
    pub fn new(clock: Arc<dyn ClockPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { clock, notifier }
    }

    /// Check order: liveness first, an existing identity re-opens with
    /// no further checks, then the 1-hour window, then field
    /// validation.
    pub fn execute(
        &self,
        records: &mut PlayerRecordStore,
        input: CreateCharacterInput,
    ) -> Result<CreateCharacterOutput, LifecycleError> {
        let existing = records.record(input.player_id);

        // Unknown players have never died and count as alive.
        if !existing.is_some_and(|r| r.is_dead()) {
            return Err(LifecycleError::AlreadyAlive);
        }

        if let Some(identity) = existing.and_then(|r| r.identity()) {
            return Ok(CreateCharacterOutput {
                identity: identity.clone(),
                reopened: true,
            });
        }

        let death_at = existing.and_then(|r| r.death_timestamp());
        if let CooldownVerdict::Blocked { remaining } =
            cooldown::can_create_identity(death_at, self.clock.now())
        {
            return Err(LifecycleError::CreationCooldown {
                remaining: cooldown::format_remaining(remaining),
                remaining_seconds: remaining.num_seconds(),
            });
        }

        let identity = CharacterIdentity::new(
            PersonName::new(input.first_name)?,
            PersonName::new(input.last_name)?,
            Age::new(input.age)?,
            input.ethnicity,
            input.gender,
        )?;

        records.record_mut(input.player_id).adopt_identity(identity.clone());
        records.persist();

        tracing::info!(
            player_id = %input.player_id,
            name = %identity.full_name(),
            "Character created"
        );
        self.notifier.notify(WorldEvent::CharacterCreated {
            player_id: input.player_id.to_uuid(),
            name: identity.full_name(),
            age: identity.age().value(),
        });

        Ok(CreateCharacterOutput {
            identity,
            reopened: false,
        })
    }
}
