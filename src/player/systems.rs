use bevy::prelude::*;

use crate::world::{Platform, FLOOR_Y};

use super::components::{KinematicBody, MoveConfig, MoveInput, Orientation, Player};
use super::kinematics;

/// One atomic simulation step per frame: gather intent, integrate, resolve
/// collisions. All of the player's state changes happen here, so no other
/// system can observe a half-updated body.
pub fn simulate_player(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    platforms: Query<&Platform>,
    mut query: Query<(&Orientation, &MoveConfig, &mut KinematicBody), With<Player>>,
) {
    let Ok((orientation, config, mut body)) = query.get_single_mut() else {
        return;
    };

    let mut input = MoveInput::default();
    if keyboard_input.pressed(KeyCode::KeyW) {
        input.forward += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) {
        input.forward -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) {
        input.strafe += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) {
        input.strafe -= 1.0;
    }
    input.jump = keyboard_input.just_pressed(KeyCode::Space);

    let colliders: Vec<_> = platforms.iter().map(|platform| platform.bounds).collect();

    kinematics::advance(
        &mut body,
        config,
        &input,
        orientation.flat_front(),
        orientation.right(),
        time.delta_secs(),
        FLOOR_Y,
        &colliders,
    );
}
