//! Ray casting against walls
//!
//! A ray stores only its direction. The origin belongs to whoever owns the
//! ray bundle and is passed in on every cast, so moving the owner moves every
//! ray with it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// A half-line direction (always unit length)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    dir: Vec2,
}

impl Ray {
    /// Ray pointing at `angle` radians (0 = +x, growing toward +y)
    pub fn from_angle(angle: f32) -> Self {
        Self {
            dir: Vec2::from_angle(angle),
        }
    }

    /// Unit direction
    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    /// Aim the ray from `origin` at `target`
    ///
    /// If `target == origin` the direction is left unchanged.
    pub fn look_at(&mut self, origin: Vec2, target: Vec2) {
        if let Some(dir) = (target - origin).try_normalize() {
            self.dir = dir;
        }
    }

    /// Nearest-hit test against a single wall, see [`intersect`]
    #[inline]
    pub fn cast(&self, origin: Vec2, wall: &Segment) -> Option<Vec2> {
        intersect(origin, self.dir, wall)
    }

    /// Where to draw the ray when it has no contact
    pub fn display_endpoint(&self, origin: Vec2, length: f32) -> Vec2 {
        origin + self.dir * length
    }
}

/// Intersect the ray `origin + u * dir` with `wall`
///
/// Solves the two-line parametric system in determinant form, with `t` the
/// fraction along the wall and `u` the distance along the ray (in units of
/// `dir`). A hit requires `0 < t < 1` and `u > 0`, both strict: a ray passing
/// exactly through an endpoint misses, and so does anything behind the
/// origin. Parallel and collinear lines (`den == 0`) always miss. No epsilon
/// is applied anywhere.
pub fn intersect(origin: Vec2, dir: Vec2, wall: &Segment) -> Option<Vec2> {
    let (x1, y1) = (wall.a().x, wall.a().y);
    let (x2, y2) = (wall.b().x, wall.b().y);
    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + dir.x, origin.y + dir.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    if t > 0.0 && t < 1.0 && u > 0.0 {
        Some(wall.point_at(t))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn vertical_wall() -> Segment {
        Segment::from_coords(10.0, -5.0, 10.0, 5.0)
    }

    #[test]
    fn test_from_angle_is_unit() {
        for deg in [0.0_f32, 45.0, 90.0, 217.0, 359.0] {
            let ray = Ray::from_angle(deg.to_radians());
            assert!((ray.dir().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hit_in_front() {
        let ray = Ray::from_angle(0.0);
        let hit = ray.cast(Vec2::ZERO, &vertical_wall()).unwrap();
        assert!((hit - Vec2::new(10.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_miss_behind_origin() {
        let ray = Ray::from_angle(PI);
        assert!(ray.cast(Vec2::ZERO, &vertical_wall()).is_none());
    }

    #[test]
    fn test_miss_past_end() {
        // Aimed well above the wall's upper endpoint
        let ray = Ray::from_angle(1.0);
        assert!(ray.cast(Vec2::ZERO, &vertical_wall()).is_none());
    }

    #[test]
    fn test_endpoint_is_a_miss() {
        // Exactly through (10, 0) where the wall starts
        let wall = Segment::from_coords(10.0, 0.0, 10.0, 10.0);
        let ray = Ray::from_angle(0.0);
        assert!(ray.cast(Vec2::ZERO, &wall).is_none());
    }

    #[test]
    fn test_parallel_is_a_miss() {
        let ray = Ray::from_angle(0.0);
        let above = Segment::from_coords(0.0, 3.0, 10.0, 3.0);
        assert!(ray.cast(Vec2::ZERO, &above).is_none());

        // Collinear overlap is a miss too
        let along = Segment::from_coords(5.0, 0.0, 10.0, 0.0);
        assert!(ray.cast(Vec2::ZERO, &along).is_none());
    }

    #[test]
    fn test_degenerate_wall_is_a_miss() {
        let dot = Segment::from_coords(5.0, 0.0, 5.0, 0.0);
        assert!(Ray::from_angle(0.0).cast(Vec2::ZERO, &dot).is_none());
    }

    #[test]
    fn test_look_at() {
        let mut ray = Ray::from_angle(0.0);
        ray.look_at(Vec2::new(1.0, 1.0), Vec2::new(1.0, 11.0));
        assert!((ray.dir() - Vec2::new(0.0, 1.0)).length() < 1e-6);

        // Looking at itself keeps the old direction
        ray.look_at(Vec2::ONE, Vec2::ONE);
        assert!((ray.dir() - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_display_endpoint() {
        let ray = Ray::from_angle(FRAC_PI_2);
        let end = ray.display_endpoint(Vec2::new(2.0, 2.0), crate::consts::RAY_DISPLAY_LENGTH);
        assert!((end - Vec2::new(2.0, 152.0)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn hit_lies_inside_wall(
            ox in -100.0f32..100.0,
            oy in -100.0f32..100.0,
            deg in 0u32..360,
            x1 in -100.0f32..100.0,
            y1 in -100.0f32..100.0,
            x2 in -100.0f32..100.0,
            y2 in -100.0f32..100.0,
        ) {
            let origin = Vec2::new(ox, oy);
            let ray = Ray::from_angle((deg as f32).to_radians());
            let wall = Segment::from_coords(x1, y1, x2, y2);
            if let Some(hit) = ray.cast(origin, &wall) {
                let d = origin.distance(hit);
                prop_assert!(d.is_finite() && d >= 0.0);

                // Within the wall's bounding box (with float slack)
                let lo = wall.a().min(wall.b()) - Vec2::splat(1e-3);
                let hi = wall.a().max(wall.b()) + Vec2::splat(1e-3);
                prop_assert!(hit.cmpge(lo).all() && hit.cmple(hi).all());
            }
        }

        #[test]
        fn parallel_never_hits(
            ox in -100.0f32..100.0,
            oy in -100.0f32..100.0,
            offset in -50.0f32..50.0,
            start in -100.0f32..100.0,
            len in 1.0f32..100.0,
        ) {
            // Horizontal ray against horizontal walls, both directions
            let wall = Segment::from_coords(start, oy + offset, start + len, oy + offset);
            let origin = Vec2::new(ox, oy);
            prop_assert!(intersect(origin, Vec2::X, &wall).is_none());
            prop_assert!(intersect(origin, Vec2::NEG_X, &wall).is_none());
        }
    }
}
