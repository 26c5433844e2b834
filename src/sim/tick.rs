//! Per-frame simulation step
//!
//! One call per rendered frame. Order within a frame: pointer write, move,
//! visibility scan, wall contact (reset and stop on a hit), goal test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::first_contact;
use super::level::Level;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position (mouse/touch), if it was reported this frame
    pub pointer: Option<Vec2>,
    /// Start signal (click on the start screen)
    pub start: bool,
    /// New viewport size, if the window was resized
    pub resize: Option<(f32, f32)>,
}

/// What a frame did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
    pub phase: GamePhase,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> FrameReport {
    let mut events = Vec::new();
    state.frame += 1;

    if let Some((width, height)) = input.resize {
        if let Err(e) = state.resize(width, height) {
            log::warn!("Ignoring resize: {}", e);
        }
    }
    if let Some(pointer) = input.pointer {
        state.pointer = Some(pointer);
    }

    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                state.phase = GamePhase::Playing(state.level);
                events.push(GameEvent::Started);
                log::info!("Started on level {}", state.level.number());
            }
        }
        GamePhase::Playing(level) => step_playing(state, level, &mut events),
        GamePhase::Won => {}
    }

    FrameReport {
        events,
        phase: state.phase,
    }
}

fn step_playing(state: &mut GameState, level: Level, events: &mut Vec<GameEvent>) {
    // The player follows the last known pointer position
    if let Some(pointer) = state.pointer {
        state.sensor.move_to(pointer);
    }
    state.sensor.scan(&state.walls);

    if let Some(wall) = first_contact(state.pos(), &state.walls, state.tolerance()) {
        log::debug!(
            "Wall {} touched at ({:.1}, {:.1}) on level {}",
            wall,
            state.pos().x,
            state.pos().y,
            level.number()
        );
        events.push(GameEvent::Collided { level, wall });
        state.reset();
        return;
    }

    if state.in_goal() {
        match level.next() {
            Some(next) => {
                let layout = state.build_layout(next);
                state.load_layout(layout);
                state.phase = GamePhase::Playing(next);
                events.push(GameEvent::LevelCleared { from: level, to: next });
            }
            None => {
                state.phase = GamePhase::Won;
                events.push(GameEvent::Won);
                log::info!("All levels cleared after {} frames", state.frame);
            }
        }
    }
}
