//! Wall geometry
//!
//! A wall is a straight line segment between two endpoints. Walls never move
//! once built; a level swaps its whole wall list instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An immutable line-segment obstacle
///
/// Zero-length walls are allowed. They never block a ray and behave like a
/// small disc in the contact test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    a: Vec2,
    b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Build from raw coordinates `(x1, y1) -> (x2, y2)`
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    /// First endpoint
    #[inline]
    pub fn a(&self) -> Vec2 {
        self.a
    }

    /// Second endpoint
    #[inline]
    pub fn b(&self) -> Vec2 {
        self.b
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Point at fraction `t` along the wall (0 = `a`, 1 = `b`)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.a + t * (self.b - self.a)
    }
}
