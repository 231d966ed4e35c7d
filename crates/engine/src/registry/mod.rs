//! In-memory registries with JSON write-through persistence.
//!
//! Each registry owns one document in the data directory. Transitions
//! mutate the in-memory state and call `persist` once at the end;
//! failed writes degrade to in-memory-only operation.

pub mod kingdom_registry;
pub mod place_registry;
pub mod player_records;

pub use kingdom_registry::KingdomRegistry;
pub use place_registry::PlaceRegistry;
pub use player_records::PlayerRecordStore;
