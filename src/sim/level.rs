//! Level layouts
//!
//! Each level has a fixed goal and spawn (relative to the viewport) and a
//! number of randomly scattered walls. Layouts are rebuilt from scratch on
//! every level change or reset.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::segment::Segment;
use super::state::Viewport;
use crate::consts::*;

/// One of the three playable levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(u8);

impl Level {
    pub const FIRST: Level = Level(1);
    pub const LAST: Level = Level(FINAL_LEVEL);

    /// Level `n` if it exists (1..=3)
    pub fn new(n: u8) -> Option<Self> {
        (1..=FINAL_LEVEL).contains(&n).then_some(Level(n))
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// The following level, `None` after the last one
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Goal centre for this level
    pub fn goal(self, view: &Viewport) -> Vec2 {
        let s = view.scale();
        match self.0 {
            1 => Vec2::splat(LEVEL_ONE_GOAL * s),
            2 => Vec2::splat(CORNER_INSET * s),
            _ => Vec2::new(view.width - CORNER_INSET * s, view.height - CORNER_INSET * s),
        }
    }

    /// Where the player is placed when the level starts
    pub fn spawn(self, view: &Viewport) -> Vec2 {
        let s = view.scale();
        match self.0 {
            1 => Vec2::new(view.width - CORNER_INSET * s, CORNER_INSET * s),
            2 => Vec2::splat(CORNER_INSET * s),
            _ => Vec2::new(CORNER_INSET * s, view.height - CORNER_INSET * s),
        }
    }
}

/// Everything that changes when a level is entered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub level: Level,
    pub walls: Vec<Segment>,
    pub goal: Vec2,
    pub spawn: Vec2,
}

/// Build the layout for `level`
pub fn advance_level<R: Rng + ?Sized>(
    level: Level,
    wall_count: usize,
    view: &Viewport,
    rng: &mut R,
) -> LevelLayout {
    let walls = scatter_walls(wall_count, view, rng);
    log::info!(
        "Level {}: {} walls in {}x{} (scale {:.3})",
        level.number(),
        walls.len(),
        view.width,
        view.height,
        view.scale()
    );
    LevelLayout {
        level,
        walls,
        goal: level.goal(view),
        spawn: level.spawn(view),
    }
}

/// `count` walls with the first endpoint anywhere in the viewport and the
/// second offset by up to `WALL_PERTURBATION` (scaled) on each axis
///
/// The second endpoint may land outside the viewport.
pub fn scatter_walls<R: Rng + ?Sized>(count: usize, view: &Viewport, rng: &mut R) -> Vec<Segment> {
    (0..count)
        .map(|_| {
            let x1 = rng.random_range(0.0..view.width);
            let y1 = rng.random_range(0.0..view.height);
            let x2 = x1 + rng.random_range(-WALL_PERTURBATION..WALL_PERTURBATION) * view.scale();
            let y2 = y1 + rng.random_range(-WALL_PERTURBATION..WALL_PERTURBATION) * view.scale();
            Segment::from_coords(x1, y1, x2, y2)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn view() -> Viewport {
        Viewport::new(1600.0, 900.0)
    }

    #[test]
    fn test_level_sequence() {
        assert_eq!(Level::new(0), None);
        assert_eq!(Level::new(4), None);
        assert_eq!(Level::FIRST.next(), Level::new(2));
        assert_eq!(Level::new(2).unwrap().next(), Some(Level::LAST));
        assert_eq!(Level::LAST.next(), None);
    }

    #[test]
    fn test_goal_and_spawn_table() {
        let v = view();
        let s = v.scale();
        assert!((s - 0.9).abs() < 1e-6);

        let l1 = Level::FIRST;
        assert_eq!(l1.goal(&v), Vec2::splat(850.0 * s));
        assert_eq!(l1.spawn(&v), Vec2::new(1600.0 - 50.0 * s, 50.0 * s));

        let l2 = Level::new(2).unwrap();
        assert_eq!(l2.goal(&v), Vec2::splat(50.0 * s));
        assert_eq!(l2.spawn(&v), Vec2::splat(50.0 * s));

        let l3 = Level::LAST;
        assert_eq!(l3.goal(&v), Vec2::new(1600.0 - 50.0 * s, 900.0 - 50.0 * s));
        assert_eq!(l3.spawn(&v), Vec2::new(50.0 * s, 900.0 - 50.0 * s));
    }

    #[test]
    fn test_scattered_walls_stay_near_viewport() {
        let v = view();
        let mut rng = Pcg32::seed_from_u64(7);
        let walls = scatter_walls(500, &v, &mut rng);
        assert_eq!(walls.len(), 500);

        let reach = WALL_PERTURBATION * v.scale() + 1e-3;
        for wall in &walls {
            let (a, b) = (wall.a(), wall.b());
            assert!(a.x >= 0.0 && a.x < v.width);
            assert!(a.y >= 0.0 && a.y < v.height);
            assert!((b.x - a.x).abs() <= reach);
            assert!((b.y - a.y).abs() <= reach);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let v = view();
        let a = advance_level(Level::FIRST, 50, &v, &mut Pcg32::seed_from_u64(99));
        let b = advance_level(Level::FIRST, 50, &v, &mut Pcg32::seed_from_u64(99));
        assert_eq!(a.walls, b.walls);

        let c = advance_level(Level::FIRST, 50, &v, &mut Pcg32::seed_from_u64(100));
        assert_ne!(a.walls, c.walls);
    }

    #[test]
    fn test_layout_matches_level() {
        let v = view();
        let mut rng = Pcg32::seed_from_u64(1);
        let layout = advance_level(Level::LAST, 120, &v, &mut rng);
        assert_eq!(layout.level, Level::LAST);
        assert_eq!(layout.walls.len(), 120);
        assert_eq!(layout.goal, Level::LAST.goal(&v));
        assert_eq!(layout.spawn, Level::LAST.spawn(&v));
    }
}
