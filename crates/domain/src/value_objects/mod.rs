//! Value objects - Immutable objects defined by their attributes

mod affiliation;
mod identity;
mod location;
mod names;
mod snapshot;

pub use affiliation::{Affiliation, AffiliationKind, PlaceKind};
pub use identity::{Age, CharacterIdentity};
pub use location::{SpawnPoint, WorldPosition};
pub use names::{KingdomName, PersonName, PlaceName};
pub use snapshot::DeathSnapshot;
