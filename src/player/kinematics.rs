//! The per-frame simulation step: velocity integration, AABB collision
//! resolution, and the grounded/airborne transitions.

use bevy::prelude::*;

use crate::world::Aabb;

use super::components::{KinematicBody, MoveConfig, MoveInput};

/// How close the player's bottom face must stay to a platform top to keep
/// counting as standing on it.
const SUPPORT_EPSILON: f32 = 1e-3;

/// Resolution axis, in tie-break priority order.
#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

/// Advance the player by one frame.
///
/// `flat_front` and `right` are the horizontal movement directions taken
/// from the orientation basis. `floor_y` is the world ground plane;
/// `colliders` are the scene's static boxes. The step is atomic: the body
/// is fully updated when this returns and no intermediate state is
/// observable by other systems.
pub fn advance(
    body: &mut KinematicBody,
    config: &MoveConfig,
    input: &MoveInput,
    flat_front: Vec3,
    right: Vec3,
    dt: f32,
    floor_y: f32,
    colliders: &[Aabb],
) {
    // A stalled or broken clock must not reach the integrator.
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    let forward = sanitize_intent(input.forward);
    let strafe = sanitize_intent(input.strafe);

    // Horizontal velocity from input, then damping. Speed is uncapped;
    // friction bounds the steady state.
    let accel = config.acceleration;
    body.velocity.x += (flat_front.x * forward + right.x * strafe) * accel * dt;
    body.velocity.z += (flat_front.z * forward + right.z * strafe) * accel * dt;
    body.velocity.x *= 1.0 - config.friction;
    body.velocity.z *= 1.0 - config.friction;

    // A jump step ends with exactly the impulse; gravity resumes next step.
    if input.jump && body.grounded {
        body.velocity.y = config.jump_force;
        body.grounded = false;
    } else if !body.grounded {
        body.velocity.y += config.gravity * dt;
    }

    body.position += body.velocity * dt;

    // Grounded is re-earned every step, by an upward push below, by the
    // support probe, or by the floor fallback.
    let was_grounded = body.grounded;
    body.grounded = false;
    for collider in colliders {
        if bounds(body, config).intersects(collider) {
            resolve(body, config, collider);
        }
    }

    // Resting contact leaves the boxes exactly touching, which the strict
    // overlap test ignores; the probe keeps the player standing on a
    // platform without re-penetrating it every other frame. Stepping off
    // the edge fails the probe and drops the player.
    if !body.grounded && was_grounded {
        let player = bounds(body, config);
        body.grounded = colliders.iter().any(|collider| supports(&player, collider));
    }

    // Ground plane fallback, independent of collider resolution.
    let half_height = config.height * 0.5;
    if body.position.y - half_height <= floor_y {
        body.position.y = floor_y + half_height;
        body.velocity.y = 0.0;
        body.grounded = true;
    }
}

fn sanitize_intent(intent: f32) -> f32 {
    if intent.is_finite() {
        intent.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// The player's collision box around its center position.
fn bounds(body: &KinematicBody, config: &MoveConfig) -> Aabb {
    Aabb::from_center_half_extents(body.position, config.half_extents())
}

/// Push the body out of `collider` along the axis of least overlap and kill
/// the velocity component on that axis. Only an upward push grounds the
/// body; side and underside contacts cannot support it.
fn resolve(body: &mut KinematicBody, config: &MoveConfig, collider: &Aabb) {
    let player = bounds(body, config);

    let depth_x = (player.max.x - collider.min.x).min(collider.max.x - player.min.x);
    let depth_y = (player.max.y - collider.min.y).min(collider.max.y - player.min.y);
    let depth_z = (player.max.z - collider.min.z).min(collider.max.z - player.min.z);

    // Smallest positive depth wins; ties break X, then Y, then Z.
    let mut axis = Axis::X;
    let mut depth = depth_x;
    if depth_y < depth {
        axis = Axis::Y;
        depth = depth_y;
    }
    if depth_z < depth {
        axis = Axis::Z;
        depth = depth_z;
    }

    let center = collider.center();
    match axis {
        Axis::X => {
            body.position.x += if body.position.x < center.x { -depth } else { depth };
            body.velocity.x = 0.0;
        }
        Axis::Y => {
            if body.position.y < center.y {
                body.position.y -= depth;
            } else {
                body.position.y += depth;
                body.grounded = true;
            }
            body.velocity.y = 0.0;
        }
        Axis::Z => {
            body.position.z += if body.position.z < center.z { -depth } else { depth };
            body.velocity.z = 0.0;
        }
    }
}

/// Resting-support probe: horizontally overlapping a collider with the
/// player's bottom face within epsilon of its top.
fn supports(player: &Aabb, collider: &Aabb) -> bool {
    player.min.x < collider.max.x
        && player.max.x > collider.min.x
        && player.min.z < collider.max.z
        && player.max.z > collider.min.z
        && (player.min.y - collider.max.y).abs() <= SUPPORT_EPSILON
}
