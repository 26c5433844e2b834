//! Game settings
//!
//! Viewport size, RNG seed and gameplay options. Loaded from JSON on native
//! builds; hosts that do their own storage can use `from_json` directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::WALL_COUNTS;

/// What happens after the player touches a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RestartMode {
    /// Back to the start screen; a new start signal is needed
    #[default]
    Idle,
    /// Straight back into level 1
    Immediate,
}

impl RestartMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartMode::Idle => "Idle",
            RestartMode::Immediate => "Immediate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(RestartMode::Idle),
            "immediate" | "instant" => Some(RestartMode::Immediate),
            _ => None,
        }
    }
}

/// Error type for loading and validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Could not read the settings file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
    /// Viewport must be finite and strictly positive on both axes
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Viewport must be finite and strictly positive on both axes
pub fn check_viewport(width: f32, height: f32) -> Result<(), SettingsError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(SettingsError::InvalidViewport { width, height })
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Seed for wall layouts
    pub seed: u64,
    /// Behaviour after touching a wall
    pub restart_mode: RestartMode,
    /// Walls per level (levels 1, 2, 3)
    pub wall_counts: [usize; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            seed: 0x5EED,
            restart_mode: RestartMode::Idle,
            wall_counts: WALL_COUNTS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_viewport(self.width, self.height)
    }

    /// Wall count for a 1-based level (0 outside 1..=3)
    pub fn wall_count(&self, level: u8) -> usize {
        match level {
            1..=3 => self.wall_counts[usize::from(level) - 1],
            _ => 0,
        }
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.restart_mode, RestartMode::Idle);
        assert_eq!(settings.wall_count(1), 50);
        assert_eq!(settings.wall_count(2), 100);
        assert_eq!(settings.wall_count(3), 120);
        assert_eq!(settings.wall_count(4), 0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1920, "restart_mode": "Immediate" }"#).unwrap();
        assert_eq!(settings.width, 1920.0);
        assert_eq!(settings.height, 1000.0);
        assert_eq!(settings.restart_mode, RestartMode::Immediate);
        assert_eq!(settings.wall_counts, WALL_COUNTS);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.seed = 42;
        settings.wall_counts = [1, 2, 3];
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back.seed, 42);
        assert_eq!(back.wall_counts, [1, 2, 3]);
    }

    #[test]
    fn test_rejects_bad_viewport() {
        let err = Settings::from_json(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidViewport { .. }));

        let settings = Settings {
            height: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::path::Path::new("/nonexistent/sightline.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(path).seed, Settings::default().seed);
    }

    #[test]
    fn test_restart_mode_names() {
        assert_eq!(RestartMode::from_str("IDLE"), Some(RestartMode::Idle));
        assert_eq!(RestartMode::from_str("instant"), Some(RestartMode::Immediate));
        assert_eq!(RestartMode::from_str("later"), None);
        assert_eq!(RestartMode::Immediate.as_str(), "Immediate");
    }
}
