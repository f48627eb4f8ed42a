//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. [`Aabb`] is the only shape the kernel knows about:
//! an axis-aligned box described by its center and half-extents.

pub use glam::Vec2;

/// An axis-aligned bounding box: world-space center plus half-extents.
///
/// Overlap tests are *inclusive* — two boxes that exactly touch count as
/// overlapping. Collision resolution relies on this so a character resting
/// flush on terrain keeps registering contact every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    /// Build from a center and full width/height.
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    /// Minimum corner (bottom-left in a Y-up world).
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Maximum corner (top-right in a Y-up world).
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Inclusive overlap test: `max(min_a, min_b) <= min(max_a, max_b)` on
    /// both axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        min.x <= max.x && min.y <= max.y
    }

    /// Overlap depth on each axis: `half_sum - |center_distance|`.
    ///
    /// Both components are non-negative exactly when the boxes overlap. The
    /// collision subsystem resolves along the axis with the *smaller* depth.
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        let half_sum = self.half + other.half;
        let dist = (self.center - other.center).abs();
        half_sum - dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_basic() {
        let a = Aabb::from_size(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let b = Aabb::from_size(Vec2::new(40.0, 60.0), Vec2::new(50.0, 50.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn disjoint_boxes() {
        let a = Aabb::from_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_size(Vec2::new(100.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        // Right edge of `a` exactly touches left edge of `b`.
        let a = Aabb::from_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn penetration_depths() {
        let a = Aabb::from_size(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let b = Aabb::from_size(Vec2::new(40.0, 60.0), Vec2::new(50.0, 50.0));
        let pen = a.penetration(&b);
        assert_eq!(pen.x, 35.0); // 50 + 25 - 40
        assert_eq!(pen.y, 15.0); // 50 + 25 - 60
    }
}
