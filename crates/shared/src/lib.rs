//! Realmkeeper Shared - Wire types for the command dispatch surface
//!
//! This crate contains the types crossing the engine boundary:
//! - Tagged `Command` enum (inbound operations)
//! - `CommandResult` replies with rejection codes
//! - `WorldEvent` notifier payloads (outbound, best-effort)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and uuid
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Raw string ids inbound** - commands carry unparsed ids; the dispatch
//!    boundary turns them into typed ids (bad ids become rejections, not
//!    transport failures)

pub mod commands;
pub mod events;
pub mod replies;

pub use commands::{Command, REFUGEE_SENTINEL};
pub use events::WorldEvent;
pub use replies::{
    CharacterCreatedData, CommandResult, CooldownDetails, JoinedPlaceData, KingdomInfoData,
    PlaceListEntry, RejectionCode,
};
