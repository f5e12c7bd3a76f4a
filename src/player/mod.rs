pub mod components;
pub mod kinematics;
pub mod systems;

use bevy::prelude::*;

pub use components::{KinematicBody, MoveConfig, Orientation, Player};

use systems::simulate_player;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulate_player);
    }
}
