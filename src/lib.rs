//! Brickfall - a breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, collisions, game state)
//! - `settings`: Data-driven game configuration
//! - `highscores`: Score keeping and high score persistence

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::ScoreBoard;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Default field dimensions (character cells)
    pub const FIELD_WIDTH: f32 = 80.0;
    pub const FIELD_HEIGHT: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 1.0;
    pub const PADDLE_SPEED: f32 = 30.0;
    /// Paddle center sits this far above the bottom edge
    pub const PADDLE_OFFSET_FROM_BOTTOM: f32 = 3.0;
    pub const PADDLE_EXPAND_MULTIPLIER: f32 = 1.5;
    pub const PADDLE_SHRINK_MULTIPLIER: f32 = 0.7;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_SPEED: f32 = 8.0;
    /// Ball rests this far above the paddle center before launch
    pub const BALL_REST_OFFSET: f32 = 2.0;

    /// Lives at the start of a game
    pub const INITIAL_LIVES: u32 = 3;
    /// First level number
    pub const INITIAL_LEVEL: u32 = 1;

    /// Largest step the engine will integrate in one update
    pub const MAX_DT: f32 = 0.1;
    /// Fixed runner timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Maximum bounce deflection off the paddle (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Power-up defaults
    pub const POWER_UP_FALL_SPEED: f32 = 5.0;
    pub const POWER_UP_SIZE: f32 = 1.0;
    /// Ball speed change applied by SpeedUp / SlowDown (percent)
    pub const POWER_UP_SPEED_PERCENT: f32 = 30.0;
}
