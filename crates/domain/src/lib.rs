extern crate self as realmkeeper_domain;

pub mod cooldown;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{Kingdom, Place, PlayerRecord};

pub use error::DomainError;

// Re-export ID types
pub use ids::PlayerId;

// Re-export value objects
pub use value_objects::{
    Affiliation, AffiliationKind, Age, CharacterIdentity, DeathSnapshot, KingdomName, PersonName,
    PlaceKind, PlaceName, SpawnPoint, WorldPosition,
};

// Re-export the cooldown policy surface
pub use cooldown::{can_create_identity, can_join, format_remaining, CooldownVerdict};
