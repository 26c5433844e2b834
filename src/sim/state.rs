//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives here. There are no
//! globals: a host owns a `GameState` and feeds it `TickInput`s.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::wall_tolerance;
use super::level::{Level, LevelLayout, advance_level};
use super::segment::Segment;
use super::sensor::VisibilitySensor;
use crate::consts::GOAL_SIZE;
use crate::settings::{RestartMode, Settings, SettingsError, check_viewport};
use crate::scale_factor;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the start signal
    NotStarted,
    /// Player is steering through a level
    Playing(Level),
    /// All levels cleared (terminal)
    Won,
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start signal accepted
    Started,
    /// Player touched wall `wall` on `level`; level 1 has been rebuilt
    Collided { level: Level, wall: usize },
    /// Goal reached, next level loaded
    LevelCleared { from: Level, to: Level },
    /// Goal of the last level reached
    Won,
}

/// Viewport size and its derived scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `min(width, height) / 1000`
    #[inline]
    pub fn scale(&self) -> f32 {
        scale_factor(self.width, self.height)
    }
}

/// RNG state wrapper for serialization
///
/// Each call to `next_rng` hands out a new PCG stream, so consecutive layouts
/// differ while the whole run replays from `seed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub rng_state: RngState,
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Level whose layout is loaded (shown behind the start screen too)
    pub level: Level,
    /// Walls of the current level
    pub walls: Vec<Segment>,
    pub goal: Vec2,
    pub spawn: Vec2,
    /// Player position and its ray bundle
    pub sensor: VisibilitySensor,
    /// Last pointer position reported by the host
    pub pointer: Option<Vec2>,
    /// Frames stepped so far
    pub frame: u64,
}

impl GameState {
    /// Fresh game on the start screen with level 1 loaded
    ///
    /// An unusable viewport falls back to the default size.
    pub fn new(mut settings: Settings) -> Self {
        if let Err(e) = settings.validate() {
            log::warn!("{}, using default viewport", e);
            let defaults = Settings::default();
            settings.width = defaults.width;
            settings.height = defaults.height;
        }
        let viewport = Viewport::new(settings.width, settings.height);
        let mut rng_state = RngState::new(settings.seed);
        let layout = advance_level(
            Level::FIRST,
            settings.wall_count(Level::FIRST.number()),
            &viewport,
            &mut rng_state.next_rng(),
        );
        Self {
            settings,
            rng_state,
            viewport,
            phase: GamePhase::NotStarted,
            level: layout.level,
            sensor: VisibilitySensor::new(layout.spawn),
            walls: layout.walls,
            goal: layout.goal,
            spawn: layout.spawn,
            pointer: None,
            frame: 0,
        }
    }

    /// Player position
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.sensor.pos()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.viewport.scale()
    }

    /// Wall contact tolerance at the current scale
    #[inline]
    pub fn tolerance(&self) -> f32 {
        wall_tolerance(self.scale())
    }

    /// Goal radius at the current scale
    #[inline]
    pub fn goal_radius(&self) -> f32 {
        GOAL_SIZE * self.scale()
    }

    /// Is the player inside the goal disc?
    pub fn in_goal(&self) -> bool {
        self.pos().distance(self.goal) < self.goal_radius()
    }

    /// Build the layout for `level` with a fresh RNG stream
    pub fn build_layout(&mut self, level: Level) -> LevelLayout {
        let count = self.settings.wall_count(level.number());
        let mut rng = self.rng_state.next_rng();
        advance_level(level, count, &self.viewport, &mut rng)
    }

    /// Swap in a new layout; walls, goal, spawn and position change together
    pub fn load_layout(&mut self, layout: LevelLayout) {
        self.level = layout.level;
        self.walls = layout.walls;
        self.goal = layout.goal;
        self.spawn = layout.spawn;
        self.sensor.move_to(layout.spawn);
        self.sensor.clear();
    }

    /// Back to level 1 after touching a wall
    pub fn reset(&mut self) {
        let layout = self.build_layout(Level::FIRST);
        self.load_layout(layout);
        self.phase = match self.settings.restart_mode {
            RestartMode::Idle => GamePhase::NotStarted,
            RestartMode::Immediate => GamePhase::Playing(Level::FIRST),
        };
    }

    /// New viewport size; the loaded layout stays until the next transition
    ///
    /// A zero, negative or non-finite size is rejected and the current
    /// viewport is kept.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SettingsError> {
        check_viewport(width, height)?;
        self.viewport = Viewport::new(width, height);
        self.settings.width = width;
        self.settings.height = height;
        log::info!("Viewport resized to {}x{} (scale {:.3})", width, height, self.scale());
        Ok(())
    }
}
