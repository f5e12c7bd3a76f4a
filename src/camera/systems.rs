use std::f32::consts::TAU;

use bevy::{input::mouse::MouseMotion, prelude::*, window::CursorGrabMode};

use crate::player::{KinematicBody, Orientation, Player};

/// Marker for the first-person view camera. The camera lives on its own
/// entity, apart from the simulation entity, so cosmetic view offsets can
/// never feed back into collision.
#[derive(Component)]
pub struct PlayerCamera;

/// Walk-cycle oscillation state, applied to the view position only.
#[derive(Component, Default)]
pub struct HeadBob {
    time: f32,
    height: f32,
    sway: f32,
}

const BOB_AMPLITUDE: f32 = 0.025;
const BOB_FREQUENCY: f32 = 3.0;
const SWAY_AMPLITUDE: f32 = 0.025;
const SWAY_FREQUENCY: f32 = 1.0;
/// Exponential decay rate of the bob offsets once movement stops.
const BOB_DAMPING: f32 = 8.0;
/// Horizontal speed below which the walk cycle counts as stopped.
const BOB_MIN_SPEED: f32 = 0.1;
/// Fraction of the remaining distance the view position covers per frame.
const VIEW_SMOOTHING: f32 = 0.7;

pub fn grab_cursor(mut windows: Query<&mut Window>) {
    let mut window = windows.single_mut();
    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
}

pub fn toggle_cursor_grab(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        let mut window = windows.single_mut();
        match window.cursor_options.grab_mode {
            CursorGrabMode::None => {
                window.cursor_options.grab_mode = CursorGrabMode::Locked;
                window.cursor_options.visible = false;
            }
            _ => {
                window.cursor_options.grab_mode = CursorGrabMode::None;
                window.cursor_options.visible = true;
            }
        }
    }
}

pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window>,
    mut query: Query<&mut Orientation, With<Player>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Only process mouse look while the cursor is grabbed.
    if window.cursor_options.grab_mode == CursorGrabMode::None {
        mouse_motion.clear();
        return;
    }

    let Ok(mut orientation) = query.get_single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        orientation.set_look(event.delta.x, event.delta.y);
    }
}

/// Build the camera transform from the authoritative body: head-bob while
/// walking, damped to rest when idle, then a smoothed approach to the
/// target view position, looking along the orientation basis.
pub fn sync_camera(
    time: Res<Time>,
    player: Query<(&Orientation, &KinematicBody), With<Player>>,
    mut camera: Query<(&mut Transform, &mut HeadBob), With<PlayerCamera>>,
) {
    let Ok((orientation, body)) = player.get_single() else {
        return;
    };
    let Ok((mut transform, mut bob)) = camera.get_single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let horizontal_speed = Vec3::new(body.velocity.x, 0.0, body.velocity.z).length();

    if body.grounded && horizontal_speed > BOB_MIN_SPEED {
        bob.time += dt;
        bob.height = BOB_AMPLITUDE * (bob.time * BOB_FREQUENCY * TAU).sin();
        bob.sway = SWAY_AMPLITUDE * (bob.time * SWAY_FREQUENCY * TAU).sin();
    } else {
        let decay = (-BOB_DAMPING * dt).exp();
        bob.height *= decay;
        bob.sway *= decay;
        bob.time = 0.0;
    }

    let (right, up, front) = orientation.view_basis();
    let target = body.position + right * bob.sway + Vec3::Y * bob.height;
    transform.translation += (target - transform.translation) * VIEW_SMOOTHING;
    transform.look_to(front, up);
}
