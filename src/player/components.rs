use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Look sensitivity in degrees per pixel of mouse travel.
pub const MOUSE_SENSITIVITY: f32 = 0.1;

/// Pitch stops just short of straight up/down so the basis never lines up
/// with world-up.
pub const PITCH_LIMIT: f32 = 89.0;

const WORLD_UP: Vec3 = Vec3::Y;

/// Yaw/pitch look angles in degrees, plus the orthonormal basis derived
/// from them.
///
/// The basis is recomputed on every mutation and only readable through
/// accessors, so callers can never observe a stale or non-orthonormal
/// frame.
#[derive(Component, Debug, Clone)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for Orientation {
    fn default() -> Self {
        // Facing -Z with level pitch.
        Self::new(-90.0, 0.0)
    }
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut orientation = Self {
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        orientation.refresh_basis();
        orientation
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Apply a look delta in pixels. Moving the mouse up raises pitch.
    pub fn set_look(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.yaw += dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - dy * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.refresh_basis();
    }

    /// The basis a right-handed view transform is built from:
    /// (right, up, front).
    pub fn view_basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.right, self.up, self.front)
    }

    /// Front projected onto the horizontal plane and renormalized; the
    /// movement forward direction, so looking down does not slow walking.
    pub fn flat_front(&self) -> Vec3 {
        Vec3::new(self.front.x, 0.0, self.front.z)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    fn refresh_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        let front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos);
        // The pitch clamp keeps front off the world-up axis, but a zero
        // vector must never reach a normalize; keep the previous frame
        // instead.
        let Some(front) = front.try_normalize() else {
            return;
        };
        let Some(right) = front.cross(WORLD_UP).try_normalize() else {
            return;
        };
        self.front = front;
        self.right = right;
        self.up = right.cross(front).normalize();
    }
}

/// Authoritative simulation state for the player. `position` is the center
/// of the collision box.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct KinematicBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
}

impl KinematicBody {
    /// Spawn airborne; the first steps settle onto whatever is below.
    pub fn spawn_at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            grounded: false,
        }
    }
}

/// Movement tuning. One configurable struct rather than per-variant entity
/// types; behavior differences are configuration.
#[derive(Component, Debug, Clone)]
pub struct MoveConfig {
    /// Horizontal acceleration from input (units/s²).
    pub acceleration: f32,
    /// Per-step horizontal damping factor in [0, 1). Bounds the
    /// steady-state speed; there is no explicit speed cap.
    pub friction: f32,
    /// Vertical velocity applied when a jump fires.
    pub jump_force: f32,
    /// Downward acceleration, negative.
    pub gravity: f32,
    /// Collision box extents.
    pub width: f32,
    pub height: f32,
    pub length: f32,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            acceleration: 48.0,
            friction: 0.3,
            jump_force: 5.0,
            gravity: -12.0,
            width: 0.6,
            height: 1.2,
            length: 0.6,
        }
    }
}

impl MoveConfig {
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.length) * 0.5
    }
}

/// Per-frame movement intent, decoupled from key bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    /// Forward intent in [-1, 1] along the flattened front vector.
    pub forward: f32,
    /// Strafe intent in [-1, 1] along the right vector.
    pub strafe: f32,
    pub jump: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_orthonormal(orientation: &Orientation) {
        let (right, up, front) = orientation.view_basis();
        assert!((front.length() - 1.0).abs() < TOLERANCE);
        assert!((right.length() - 1.0).abs() < TOLERANCE);
        assert!((up.length() - 1.0).abs() < TOLERANCE);
        assert!(front.dot(right).abs() < TOLERANCE);
        assert!(front.dot(up).abs() < TOLERANCE);
        assert!(right.dot(up).abs() < TOLERANCE);
    }

    #[test]
    fn default_faces_negative_z() {
        let orientation = Orientation::default();
        assert!(orientation.front().distance(Vec3::NEG_Z) < TOLERANCE);
        assert!(orientation.right().distance(Vec3::X) < TOLERANCE);
        assert!(orientation.up().distance(Vec3::Y) < TOLERANCE);
    }

    #[test]
    fn basis_stays_orthonormal_across_look_range() {
        for yaw_step in 0..24 {
            for pitch_step in -8..=8 {
                let orientation =
                    Orientation::new(yaw_step as f32 * 15.0, pitch_step as f32 * 11.0);
                assert_orthonormal(&orientation);
            }
        }

        let mut orientation = Orientation::default();
        orientation.set_look(123.4, -56.7);
        assert_orthonormal(&orientation);
    }

    #[test]
    fn pitch_never_escapes_clamp() {
        let mut orientation = Orientation::default();
        for _ in 0..50 {
            orientation.set_look(37.0, -10_000.0);
            assert!(orientation.pitch() <= PITCH_LIMIT);
            assert_orthonormal(&orientation);
        }
        for _ in 0..50 {
            orientation.set_look(-37.0, 10_000.0);
            assert!(orientation.pitch() >= -PITCH_LIMIT);
            assert_orthonormal(&orientation);
        }
    }

    #[test]
    fn look_up_raises_pitch() {
        let mut orientation = Orientation::default();
        // Negative dy is mouse-up.
        orientation.set_look(0.0, -100.0);
        assert!(orientation.pitch() > 0.0);
        assert!(orientation.front().y > 0.0);
    }

    #[test]
    fn non_finite_look_deltas_are_ignored() {
        let mut orientation = Orientation::new(40.0, 10.0);
        let before = orientation.clone();
        orientation.set_look(f32::NAN, 3.0);
        orientation.set_look(2.0, f32::INFINITY);
        assert_eq!(orientation.yaw(), before.yaw());
        assert_eq!(orientation.pitch(), before.pitch());
        assert_eq!(orientation.front(), before.front());
    }

    #[test]
    fn flat_front_is_horizontal_and_unit() {
        let orientation = Orientation::new(-90.0, 80.0);
        let flat = orientation.flat_front();
        assert_eq!(flat.y, 0.0);
        assert!((flat.length() - 1.0).abs() < TOLERANCE);
        // Still pointing where yaw says, pitch stripped.
        assert!(flat.distance(Vec3::NEG_Z) < TOLERANCE);
    }
}
