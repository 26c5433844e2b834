//! Player-versus-wall contact
//!
//! The contact test is an ellipse test, not a true distance-to-segment test:
//! the point touches a wall when the sum of its distances to the two endpoints
//! is within `tolerance` of the wall's length. The band is narrow near the
//! middle of the wall and grows slightly rounder past its ends.

use glam::Vec2;

use super::segment::Segment;
use crate::consts::WALL_TOLERANCE;

/// Contact tolerance for a given scale factor
#[inline]
pub fn wall_tolerance(scale: f32) -> f32 {
    WALL_TOLERANCE * scale
}

/// Does `point` touch `wall`?
///
/// `dist(p, a) + dist(p, b) <= length(a, b) + tolerance`. A zero-length wall
/// touches anything within `tolerance / 2` of it.
#[inline]
pub fn touches(point: Vec2, wall: &Segment, tolerance: f32) -> bool {
    let d = point.distance(wall.a()) + point.distance(wall.b());
    d <= wall.length() + tolerance
}

/// Index of the first wall `point` touches
pub fn first_contact(point: Vec2, walls: &[Segment], tolerance: f32) -> Option<usize> {
    walls.iter().position(|wall| touches(point, wall, tolerance))
}

/// Does `point` touch any wall? Stops at the first contact.
pub fn touches_any(point: Vec2, walls: &[Segment], tolerance: f32) -> bool {
    first_contact(point, walls, tolerance).is_some()
}
