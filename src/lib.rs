//! Sightline - reach the goal without touching a wall
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ray casting, wall contact, level state)
//! - `settings`: Viewport, seed and tuning configuration

pub mod settings;
pub mod sim;

pub use settings::{RestartMode, Settings, SettingsError, check_viewport};

/// Game configuration constants
///
/// Sizes are in "design units": multiply by the scale factor to get pixels.
pub mod consts {
    /// Number of rays in the visibility sweep (one per degree)
    pub const RAY_COUNT: usize = 360;

    /// Viewport extent that maps to a scale factor of 1.0
    pub const DESIGN_EXTENT: f32 = 1000.0;

    /// Goal disc size; the point wins the level when closer than this
    pub const GOAL_SIZE: f32 = 40.0;
    /// Slack added to a wall's length in the contact test
    pub const WALL_TOLERANCE: f32 = 5.0;
    /// Max per-axis offset of a wall's second endpoint from its first
    pub const WALL_PERTURBATION: f32 = 150.0;
    /// Distance of corner spawns/goals from the viewport edge
    pub const CORNER_INSET: f32 = 50.0;
    /// Fixed goal coordinate for level 1
    pub const LEVEL_ONE_GOAL: f32 = 850.0;

    /// Walls per level (levels 1, 2, 3)
    pub const WALL_COUNTS: [usize; 3] = [50, 100, 120];
    /// Last playable level
    pub const FINAL_LEVEL: u8 = 3;

    /// Drawn length of a ray with no contact (rendering only)
    pub const RAY_DISPLAY_LENGTH: f32 = 150.0;
}

/// Scale factor for a viewport: `min(width, height) / 1000`
#[inline]
pub fn scale_factor(width: f32, height: f32) -> f32 {
    width.min(height) / consts::DESIGN_EXTENT
}
