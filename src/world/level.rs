//! Level data: the player spawn point and the static platform boxes,
//! loaded once before simulation begins.

use bevy::prelude::*;
use serde::Deserialize;

use super::collider::Aabb;

/// The default level, compiled into the binary.
const DEFAULT_LEVEL: &str = include_str!("../../assets/levels/atrium.json");

#[derive(Debug, Deserialize)]
pub struct Level {
    pub spawn: [f32; 3],
    pub platforms: Vec<PlatformDef>,
}

/// One static box, as two opposite world-space corners.
#[derive(Debug, Deserialize)]
pub struct PlatformDef {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Level {
    pub fn from_json(source: &str) -> Result<Level, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// The built-in level, degrading to a bare floor if the embedded data
    /// fails to parse.
    pub fn builtin() -> Level {
        match Level::from_json(DEFAULT_LEVEL) {
            Ok(level) => level,
            Err(err) => {
                error!("Failed to parse embedded level: {err}");
                Level {
                    spawn: [0.0, 1.0, 0.0],
                    platforms: Vec::new(),
                }
            }
        }
    }

    pub fn spawn_point(&self) -> Vec3 {
        Vec3::from_array(self.spawn)
    }
}

impl PlatformDef {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec3::from_array(self.min), Vec3::from_array(self.max))
    }
}
