//! Engine configuration from environment variables.

use std::path::PathBuf;

use realmkeeper_domain::WorldPosition;

/// Runtime settings, all overridable via `REALMKEEPER_*` environment
/// variables with sensible standalone defaults.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Directory holding the JSON registry documents.
    pub data_dir: PathBuf,
    /// Arrival point for refugees, who have no place spawn to use.
    pub world_spawn: WorldPosition,
    /// Holding position dead players are swept back to each tick.
    pub dead_zone: WorldPosition,
}

impl EngineSettings {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("REALMKEEPER_DATA_DIR").unwrap_or_else(|_| "data".into());
        let world = std::env::var("REALMKEEPER_WORLD").unwrap_or_else(|_| "world".into());

        let world_spawn = WorldPosition::new(
            world.clone(),
            env_f64("REALMKEEPER_SPAWN_X", 0.0),
            env_f64("REALMKEEPER_SPAWN_Y", 64.0),
            env_f64("REALMKEEPER_SPAWN_Z", 0.0),
            0.0,
            0.0,
        );
        let dead_zone = WorldPosition::new(
            world,
            env_f64("REALMKEEPER_DEAD_ZONE_X", 0.0),
            env_f64("REALMKEEPER_DEAD_ZONE_Y", 200.0),
            env_f64("REALMKEEPER_DEAD_ZONE_Z", 0.0),
            0.0,
            0.0,
        );

        Self {
            data_dir: PathBuf::from(data_dir),
            world_spawn,
            dead_zone,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
