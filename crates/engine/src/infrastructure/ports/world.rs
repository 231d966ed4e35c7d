// The port defines the full contract - bridge adapters use more of it
// than the headless build does
#![allow(dead_code)]

//! World-interaction port.
//!
//! The engine never touches the live world directly. Everything that
//! reads or mutates a connected player's physical state goes through
//! this trait so lifecycle transitions stay testable and the engine
//! can run headless.

use realmkeeper_domain::{DeathSnapshot, PlayerId, WorldPosition};

#[derive(Debug, Clone, thiserror::Error)]
pub enum WorldError {
    #[error("Player {player_id} is not connected")]
    PlayerNotConnected { player_id: PlayerId },
    #[error("World interaction failed during {operation}: {message}")]
    Interaction {
        operation: &'static str,
        message: String,
    },
}

impl WorldError {
    pub fn not_connected(player_id: PlayerId) -> Self {
        Self::PlayerNotConnected { player_id }
    }

    pub fn interaction(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Interaction {
            operation,
            message: message.into(),
        }
    }
}

/// Live-world access for lifecycle transitions.
#[cfg_attr(test, mockall::automock)]
pub trait WorldPort: Send + Sync {
    /// Captures position, carried-item blobs and experience from the
    /// live player. Called before any death mutation is applied so a
    /// capture failure aborts the whole transition.
    fn capture_snapshot(&self, player_id: PlayerId) -> Result<DeathSnapshot, WorldError>;

    /// Puts a previously captured snapshot back onto the live player,
    /// position included.
    fn restore_snapshot(&self, player_id: PlayerId, snapshot: &DeathSnapshot)
        -> Result<(), WorldError>;

    fn teleport(&self, player_id: PlayerId, destination: &WorldPosition) -> Result<(), WorldError>;

    /// Fresh-life reset: full health and hunger, cleared inventory,
    /// zeroed experience.
    fn reset_vitals(&self, player_id: PlayerId) -> Result<(), WorldError>;

    /// Refills health only. Used when a death is vetoed and the player
    /// keeps everything else they had.
    fn restore_health(&self, player_id: PlayerId) -> Result<(), WorldError>;
}
