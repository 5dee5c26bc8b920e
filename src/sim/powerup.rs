//! Power-ups: falling capsules dropped by destroyed bricks
//!
//! Collected by touching the paddle. Timed effects are tracked in
//! [`ActiveEffects`] and revert when their timer runs out.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brick::BrickColor;
use super::paddle::Bounds;
use super::vector::Vector2;
use crate::consts::POWER_UP_SIZE;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    ExpandPaddle,
    ShrinkPaddle,
    SpeedUp,
    SlowDown,
    ExtraLife,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::ExpandPaddle,
        PowerUpKind::ShrinkPaddle,
        PowerUpKind::SpeedUp,
        PowerUpKind::SlowDown,
        PowerUpKind::ExtraLife,
    ];

    pub const fn data(self) -> PowerUpTypeData {
        PowerUpTypeData::of(self)
    }

    /// Uniformly random kind
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Immutable per-kind constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerUpTypeData {
    pub kind: PowerUpKind,
    /// Effect duration in seconds; 0 for instant effects
    pub duration: f32,
    pub color: BrickColor,
    pub symbol: char,
    pub description: &'static str,
}

impl PowerUpTypeData {
    pub const fn of(kind: PowerUpKind) -> Self {
        match kind {
            PowerUpKind::ExpandPaddle => Self {
                kind,
                duration: 10.0,
                color: BrickColor::Green,
                symbol: 'E',
                description: "Widens the paddle",
            },
            PowerUpKind::ShrinkPaddle => Self {
                kind,
                duration: 10.0,
                color: BrickColor::Red,
                symbol: 'S',
                description: "Narrows the paddle",
            },
            PowerUpKind::SpeedUp => Self {
                kind,
                duration: 8.0,
                color: BrickColor::Yellow,
                symbol: 'F',
                description: "Speeds the ball up",
            },
            PowerUpKind::SlowDown => Self {
                kind,
                duration: 8.0,
                color: BrickColor::Cyan,
                symbol: 'L',
                description: "Slows the ball down",
            },
            PowerUpKind::ExtraLife => Self {
                kind,
                duration: 0.0,
                color: BrickColor::Magenta,
                symbol: '+',
                description: "Grants an extra life",
            },
        }
    }

    pub fn is_timed(&self) -> bool {
        self.duration > 0.0
    }
}

/// A falling power-up capsule, positioned by its center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub position: Vector2,
    pub fall_speed: f32,
    pub active: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, position: Vector2, fall_speed: f32) -> Self {
        Self {
            kind,
            position,
            fall_speed,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.active {
            self.position.y += self.fall_speed * dt;
        }
    }

    pub fn bounds(&self) -> Bounds {
        let half = POWER_UP_SIZE / 2.0;
        Bounds {
            left: self.position.x - half,
            top: self.position.y - half,
            right: self.position.x + half,
            bottom: self.position.y + half,
        }
    }

    /// AABB overlap with the paddle
    pub fn touches(&self, paddle: &Bounds) -> bool {
        let b = self.bounds();
        b.left <= paddle.right
            && b.right >= paddle.left
            && b.top <= paddle.bottom
            && b.bottom >= paddle.top
    }
}

/// Remaining time (seconds) of each timed effect; 0 means inactive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub paddle_timer: f32,
    /// Which paddle modifier is running, if any
    pub paddle_kind: Option<PowerUpKind>,
    pub speed_timer: f32,
    pub speed_kind: Option<PowerUpKind>,
    /// Ball speed before the running speed effect
    pub base_ball_speed: f32,
}

/// Effect that ran out during [`ActiveEffects::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expired {
    Paddle,
    Speed,
}

impl ActiveEffects {
    /// Count timers down; returns the effects that just expired
    pub fn tick(&mut self, dt: f32) -> Vec<Expired> {
        let mut expired = Vec::new();
        if self.paddle_kind.is_some() {
            self.paddle_timer -= dt;
            if self.paddle_timer <= 0.0 {
                self.paddle_timer = 0.0;
                self.paddle_kind = None;
                expired.push(Expired::Paddle);
            }
        }
        if self.speed_kind.is_some() {
            self.speed_timer -= dt;
            if self.speed_timer <= 0.0 {
                self.speed_timer = 0.0;
                self.speed_kind = None;
                expired.push(Expired::Speed);
            }
        }
        expired
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
