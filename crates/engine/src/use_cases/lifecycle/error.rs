//! Lifecycle error types.

use realmkeeper_domain::DomainError;

use crate::infrastructure::ports::WorldError;

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("You already have a living character")]
    AlreadyAlive,
    #[error("Player is not dead")]
    NotDead,
    #[error("Create a character first")]
    NoIdentity,
    #[error("You must wait {remaining} before creating a new character")]
    CreationCooldown {
        remaining: String,
        remaining_seconds: i64,
    },
    #[error("You must wait {remaining} before joining {place}")]
    JoinCooldown {
        place: String,
        remaining: String,
        remaining_seconds: i64,
    },
    #[error("Place not found: {0}")]
    PlaceNotFound(String),
    #[error("{place} has no spawn points set")]
    NoSpawnPoints { place: String },
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("World error: {0}")]
    World(#[from] WorldError),
}
