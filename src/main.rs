//! Sightline entry point
//!
//! Headless run: the demo pilot plays until it wins or the frame budget runs
//! out. Pass a settings JSON path as the first argument to override defaults,
//! and optionally a restart mode (`idle` or `immediate`) as the second.

/// Frame budget for a headless run (~5 minutes at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u64 = 60 * 60 * 5;

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `sim::tick` themselves
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use sightline::{RestartMode, Settings};
    use sightline::sim::{GameEvent, GamePhase, GameState, pilot_input, tick};

    env_logger::init();
    log::info!("Sightline (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    if let Some(mode) = args.next() {
        match RestartMode::from_str(&mode) {
            Some(mode) => settings.restart_mode = mode,
            None => log::warn!("Unknown restart mode '{}', keeping {}", mode, settings.restart_mode.as_str()),
        }
    }
    log::info!("Restart mode: {}", settings.restart_mode.as_str());

    let mut state = GameState::new(settings);
    let mut collisions = 0u32;
    let mut cleared = 0u32;

    while state.frame < MAX_FRAMES {
        let input = pilot_input(&state);
        let report = tick(&mut state, &input);

        for event in &report.events {
            match event {
                GameEvent::Collided { level, wall } => {
                    collisions += 1;
                    log::info!("Hit wall {} on level {}", wall, level.number());
                }
                GameEvent::LevelCleared { from, to } => {
                    cleared += 1;
                    log::info!("Level {} cleared, entering level {}", from.number(), to.number());
                }
                GameEvent::Won | GameEvent::Started => {}
            }
        }

        if report.phase == GamePhase::Won {
            break;
        }
    }

    let visible = state.sensor.contacts().count();
    println!(
        "frames: {}  phase: {:?}  levels cleared: {}  collisions: {}  rays in contact: {}/{}",
        state.frame,
        state.phase,
        cleared,
        collisions,
        visible,
        state.sensor.rays().len()
    );
}
