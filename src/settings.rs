//! Game configuration
//!
//! Plain JSON on disk; every field has a default so partial files load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::GameField;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Distance from the bottom edge to the paddle center
    pub paddle_offset_from_bottom: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,

    // === Rules ===
    pub initial_lives: u32,
    /// Largest `dt` the engine integrates in one update
    pub max_dt: f32,
    /// RNG seed for power-up drops
    pub seed: u64,

    // === Power-ups ===
    pub power_ups_enabled: bool,
    pub power_up_fall_speed: f32,

    /// Where the high score is persisted, if anywhere
    pub score_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_offset_from_bottom: PADDLE_OFFSET_FROM_BOTTOM,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            initial_lives: INITIAL_LIVES,
            max_dt: MAX_DT,
            seed: 0,

            power_ups_enabled: true,
            power_up_fall_speed: POWER_UP_FALL_SPEED,

            score_path: None,
        }
    }
}

impl GameConfig {
    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Using default config ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("max_dt", self.max_dt),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.power_up_fall_speed < 0.0 {
            return Err(ConfigError::Invalid("power_up_fall_speed must not be negative".into()));
        }
        if self.paddle_width > self.field_width {
            return Err(ConfigError::Invalid("paddle is wider than the field".into()));
        }
        if self.paddle_offset_from_bottom <= 0.0
            || self.paddle_offset_from_bottom >= self.field_height
        {
            return Err(ConfigError::Invalid(
                "paddle_offset_from_bottom must lie inside the field".into(),
            ));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::Invalid("initial_lives must be at least 1".into()));
        }
        Ok(())
    }

    pub fn field(&self) -> GameField {
        GameField::new(self.field_width, self.field_height)
    }

    /// Paddle rest position (center)
    pub fn paddle_home(&self) -> (f32, f32) {
        (self.field_width / 2.0, self.field_height - self.paddle_offset_from_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("brickfall-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field(), GameField::new(80.0, 30.0));
        assert_eq!(config.paddle_home(), (40.0, 27.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "ball_speed": 12.0, "seed": 9 }"#).unwrap();
        assert_eq!(config.ball_speed, 12.0);
        assert_eq!(config.seed, 9);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.initial_lives, INITIAL_LIVES);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = GameConfig {
            ball_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            paddle_width: 100.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_lives: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            max_dt: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("config.json");
        let config = GameConfig {
            seed: 1234,
            power_ups_enabled: false,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = temp_path("does-not-exist.json");
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io(_))));
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let path = temp_path("garbage.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }
}
