pub mod systems;

use bevy::prelude::*;

use crate::player::systems::simulate_player;
use systems::{grab_cursor, mouse_look, sync_camera, toggle_cursor_grab};

pub use systems::{HeadBob, PlayerCamera};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, grab_cursor).add_systems(
            Update,
            (
                mouse_look.before(simulate_player),
                sync_camera.after(simulate_player),
                toggle_cursor_grab,
            ),
        );
    }
}
