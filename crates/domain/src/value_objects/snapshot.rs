//! Death snapshot value object
//!
//! Captured at the moment of death and consumed exactly once by revival.
//! Inventory contents are opaque serialized blobs; this layer stores and
//! restores them without interpreting the payload.

use serde::{Deserialize, Serialize};

use crate::value_objects::location::WorldPosition;

/// Everything needed to put a revived player back where they fell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathSnapshot {
    position: WorldPosition,
    inventory: String,
    armor: String,
    offhand: String,
    xp_level: i32,
    xp_progress: f32,
}

impl DeathSnapshot {
    pub fn new(
        position: WorldPosition,
        inventory: impl Into<String>,
        armor: impl Into<String>,
        offhand: impl Into<String>,
        xp_level: i32,
        xp_progress: f32,
    ) -> Self {
        Self {
            position,
            inventory: inventory.into(),
            armor: armor.into(),
            offhand: offhand.into(),
            xp_level,
            xp_progress,
        }
    }

    pub fn position(&self) -> &WorldPosition {
        &self.position
    }

    pub fn inventory(&self) -> &str {
        &self.inventory
    }

    pub fn armor(&self) -> &str {
        &self.armor
    }

    pub fn offhand(&self) -> &str {
        &self.offhand
    }

    pub fn xp_level(&self) -> i32 {
        self.xp_level
    }

    pub fn xp_progress(&self) -> f32 {
        self.xp_progress
    }
}
