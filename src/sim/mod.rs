//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no timers
//! - Seeded RNG only
//! - Stable iteration order (walls and rays by index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod level;
pub mod ray;
pub mod segment;
pub mod sensor;
pub mod state;
pub mod tick;

pub use autopilot::{pilot_input, steer};
pub use collision::{first_contact, touches, touches_any, wall_tolerance};
pub use level::{Level, LevelLayout, advance_level, scatter_walls};
pub use ray::{Ray, intersect};
pub use segment::Segment;
pub use sensor::VisibilitySensor;
pub use state::{GameEvent, GamePhase, GameState, RngState, Viewport};
pub use tick::{FrameReport, TickInput, tick};
