//! Reply types for the command dispatch surface
//!
//! Every command produces a [`CommandResult`]: a tagged success carrying an
//! optional payload, or a rejection with a classification code, a
//! human-readable message, and optional machine-readable details (cooldown
//! rejections carry the remaining seconds there).

use serde::{Deserialize, Serialize};

// =============================================================================
// Command Result
// =============================================================================

/// Result of a command operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResult {
    /// Operation succeeded
    Success {
        /// Optional data payload (varies by command type)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    /// Operation was rejected or failed
    Error {
        /// Rejection classification code
        code: RejectionCode,
        /// Human-readable message
        message: String,
        /// Additional details (optional)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
    /// Unknown result type for forward compatibility
    ///
    /// When deserializing an unknown variant, this variant is used instead of
    /// failing. Allows older consumers to gracefully handle new result types.
    #[serde(other)]
    Unknown,
}

impl CommandResult {
    /// Create a success result with data
    pub fn success<T: Serialize>(data: T) -> Self {
        CommandResult::Success {
            data: Some(serde_json::to_value(data).unwrap_or_default()),
        }
    }

    /// Create a success result without data
    pub fn success_empty() -> Self {
        CommandResult::Success { data: None }
    }

    /// Create an error result
    pub fn error(code: RejectionCode, message: impl Into<String>) -> Self {
        CommandResult::Error {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an error result with details
    pub fn error_with_details<T: Serialize>(
        code: RejectionCode,
        message: impl Into<String>,
        details: T,
    ) -> Self {
        CommandResult::Error {
            code,
            message: message.into(),
            details: Some(serde_json::to_value(details).unwrap_or_default()),
        }
    }

    /// Check if this is a success result
    pub fn is_success(&self) -> bool {
        matches!(self, CommandResult::Success { .. })
    }

    /// Check if this is an error result
    pub fn is_error(&self) -> bool {
        matches!(self, CommandResult::Error { .. })
    }
}

// =============================================================================
// Rejection Codes
// =============================================================================

/// Rejection classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCode {
    /// Malformed input: bad name characters, out-of-range age, bad id
    Validation,
    /// Wrong lifecycle state, duplicate name, not a member
    Precondition,
    /// A time window has not elapsed; details carry the remaining seconds
    Cooldown,
    /// Unknown place, kingdom, or player
    NotFound,
    /// Document write/read failure
    Persistence,
}

// =============================================================================
// Reply payloads
// =============================================================================

/// Details attached to cooldown rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooldownDetails {
    pub remaining_seconds: i64,
}

/// Payload for successful character creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCreatedData {
    pub name: String,
    pub age: u8,
    pub ethnicity: String,
    pub gender: String,
    /// True when an existing identity was handed back instead of a new one.
    #[serde(default)]
    pub reopened: bool,
}

/// Payload for a successful place join: where the player came out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedPlaceData {
    pub place: String,
    pub kind: String,
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Payload for the kingdom info query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KingdomInfoData {
    pub name: String,
    pub leader_id: String,
    pub members: Vec<String>,
    pub join_requests: Vec<String>,
    pub accepting_requests: bool,
    /// RFC 3339 founding time.
    pub created_at: String,
    pub protected: bool,
    pub protection_remaining_seconds: i64,
}

/// One entry in the place catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceListEntry {
    pub name: String,
    pub kind: String,
    pub spawns: usize,
}
