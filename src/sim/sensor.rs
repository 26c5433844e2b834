//! 360-degree visibility sweep
//!
//! The sensor sits at the player's position and owns one ray per degree.
//! Each scan finds, for every ray, the closest wall hit. Rays and the hit
//! buffer are allocated once and overwritten in place every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ray::Ray;
use super::segment::Segment;
use crate::consts::RAY_COUNT;

/// A bundle of rays anchored at a movable position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilitySensor {
    pos: Vec2,
    rays: Vec<Ray>,
    /// Nearest hit per ray from the last scan (index = degree)
    hits: Vec<Option<Vec2>>,
}

impl VisibilitySensor {
    /// Sensor at `pos` with rays at 0, 1, ..., 359 degrees
    pub fn new(pos: Vec2) -> Self {
        let rays = (0..RAY_COUNT)
            .map(|deg| Ray::from_angle((deg as f32).to_radians()))
            .collect();
        Self {
            pos,
            rays,
            hits: vec![None; RAY_COUNT],
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Move the sensor; all rays follow
    #[inline]
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Hits from the last scan, indexed by ray
    pub fn hits(&self) -> &[Option<Vec2>] {
        &self.hits
    }

    /// Recompute the nearest hit of every ray against `walls`
    ///
    /// Ties keep the wall that comes first in `walls`. A ray with no hit
    /// reports `None`; there is no range limit.
    pub fn scan(&mut self, walls: &[Segment]) -> &[Option<Vec2>] {
        let origin = self.pos;
        for (ray, slot) in self.rays.iter().zip(self.hits.iter_mut()) {
            let mut closest = None;
            let mut record = f32::INFINITY;
            for wall in walls {
                if let Some(pt) = ray.cast(origin, wall) {
                    let d = origin.distance(pt);
                    if d < record {
                        record = d;
                        closest = Some(pt);
                    }
                }
            }
            *slot = closest;
        }
        &self.hits
    }

    /// Move to `origin` then scan
    pub fn scan_from(&mut self, origin: Vec2, walls: &[Segment]) -> &[Option<Vec2>] {
        self.move_to(origin);
        self.scan(walls)
    }

    /// `(ray_index, point)` for every ray that hit something in the last scan
    pub fn contacts(&self) -> impl Iterator<Item = (usize, Vec2)> + '_ {
        self.hits
            .iter()
            .enumerate()
            .filter_map(|(i, hit)| hit.map(|pt| (i, pt)))
    }

    /// Distance to the nearest hit of ray `index` from the last scan
    pub fn nearest_distance(&self, index: usize) -> Option<f32> {
        self.hits
            .get(index)
            .copied()
            .flatten()
            .map(|pt| self.pos.distance(pt))
    }

    /// Forget the last scan
    pub fn clear(&mut self) {
        self.hits.fill(None);
    }
}
