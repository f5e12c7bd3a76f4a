pub mod collider;
pub mod level;
pub mod setup;

use bevy::prelude::*;

pub use collider::{Aabb, Platform};

use setup::setup_world;

/// World ground plane; the kinematics step clamps to it even where no
/// platform sits underneath.
pub const FLOOR_Y: f32 = 0.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_world);
    }
}
