use bevy::prelude::*;

/// Axis-aligned box in world space, stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from two opposite corners, in either order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Strict overlap test on all three axes. Boxes that exactly touch do
    /// not count as colliding.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}

/// Static collider owned by the scene. Spawned once at startup and never
/// mutated during simulation; the kinematics step only reads it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Platform {
    pub bounds: Aabb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_reordered() {
        let aabb = Aabb::new(Vec3::new(2.0, -1.0, 5.0), Vec3::new(-2.0, 3.0, 1.0));
        assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, 1.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 3.0, 5.0));
    }

    #[test]
    fn center_and_size() {
        let aabb = Aabb::new(Vec3::new(-4.0, 0.0, -4.0), Vec3::new(4.0, 1.0, 4.0));
        assert_eq!(aabb.center(), Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(aabb.size(), Vec3::new(8.0, 1.0, 8.0));
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::from_center_half_extents(Vec3::new(1.5, 0.5, 0.0), Vec3::splat(1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::from_center_half_extents(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn exactly_touching_boxes_do_not_intersect() {
        let a = Aabb::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        // Shares the x = 1 face.
        let b = Aabb::new(Vec3::new(1.0, 0.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
        // Resting on top of `a`.
        let c = Aabb::new(Vec3::new(-1.0, 1.0, -1.0), Vec3::new(1.0, 2.0, 1.0));
        assert!(!a.intersects(&c));
    }
}
