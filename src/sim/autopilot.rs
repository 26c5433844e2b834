//! Demo pilot for headless runs
//!
//! Drives the pointer using only what the player can see: the ray hits from
//! the last scan. Each frame it steps toward the goal along the ray that
//! points closest to the goal while keeping clear of nearby walls.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Pointer travel per frame (design units)
pub const PILOT_STEP: f32 = 4.0;
/// Keep this far from any wall seen within `PILOT_CONE` of the heading
pub const PILOT_CLEARANCE: f32 = 30.0;
/// Half-width of the cone checked for clearance, in rays (degrees)
pub const PILOT_CONE: usize = 30;

/// Input that plays the game for one frame
pub fn pilot_input(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::NotStarted => TickInput {
            // Start from wherever the level puts us
            pointer: Some(state.spawn),
            start: true,
            ..Default::default()
        },
        GamePhase::Playing(_) => TickInput {
            pointer: Some(steer(state)),
            ..Default::default()
        },
        GamePhase::Won => TickInput::default(),
    }
}

/// Next pointer position: one step along the best clear ray
pub fn steer(state: &GameState) -> Vec2 {
    let pos = state.pos();
    let to_goal = state.goal - pos;
    let step = (PILOT_STEP * state.scale()).min(to_goal.length());
    let want = to_goal.normalize_or_zero();
    let clearance = PILOT_CLEARANCE * state.scale();

    let rays = state.sensor.rays();
    let n = rays.len();
    let clear = |i: usize| {
        (0..=2 * PILOT_CONE).all(|k| {
            let j = (i + n + k - PILOT_CONE) % n;
            state
                .sensor
                .nearest_distance(j)
                .is_none_or(|d| d > clearance)
        })
    };

    rays.iter()
        .enumerate()
        .filter(|&(i, _)| clear(i))
        .max_by(|(_, a), (_, b)| {
            a.dir()
                .dot(want)
                .partial_cmp(&b.dir().dot(want))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(_, ray)| pos + ray.dir() * step)
        .unwrap_or(pos)
}
