//! World position and spawn point value objects

use serde::{Deserialize, Serialize};

/// An absolute position in a named world, with facing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldPosition {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
}

impl WorldPosition {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64, yaw: f32, pitch: f32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw,
            pitch,
        }
    }
}

/// A spawn point belonging to a place.
///
/// Spawn points carry no pitch; arrivals always face level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnPoint {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
}

impl SpawnPoint {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64, yaw: f32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw,
        }
    }

    /// Whether this spawn point sits within one block of the given
    /// coordinates on all three axes.
    pub fn is_near(&self, x: f64, y: f64, z: f64) -> bool {
        (self.x - x).abs() < 1.0 && (self.y - y).abs() < 1.0 && (self.z - z).abs() < 1.0
    }

    /// The position a joining player is teleported to.
    pub fn to_position(&self) -> WorldPosition {
        WorldPosition::new(self.world.clone(), self.x, self.y, self.z, self.yaw, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_near_within_one_block() {
        let spawn = SpawnPoint::new("world", 100.0, 64.0, -200.0, 90.0);
        assert!(spawn.is_near(100.0, 64.0, -200.0));
        assert!(spawn.is_near(100.9, 64.5, -200.9));
    }

    #[test]
    fn is_near_rejects_full_block_offset() {
        let spawn = SpawnPoint::new("world", 100.0, 64.0, -200.0, 90.0);
        assert!(!spawn.is_near(101.0, 64.0, -200.0));
        assert!(!spawn.is_near(100.0, 63.0, -200.0));
        assert!(!spawn.is_near(100.0, 64.0, -199.0));
    }

    #[test]
    fn to_position_levels_pitch() {
        let spawn = SpawnPoint::new("world", 1.5, 70.0, 2.5, 180.0);
        let position = spawn.to_position();
        assert_eq!(position.world, "world");
        assert_eq!(position.yaw, 180.0);
        assert_eq!(position.pitch, 0.0);
    }
}
