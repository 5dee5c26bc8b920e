//! The ball: a moving circle whose velocity magnitude is pinned to `speed`

use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f32,
    /// Target velocity magnitude while active
    pub speed: f32,
    pub active: bool,
}

impl Default for Ball {
    /// Inactive ball at rest above the default paddle
    fn default() -> Self {
        Self {
            position: Vector2::new(
                FIELD_WIDTH / 2.0,
                FIELD_HEIGHT - PADDLE_OFFSET_FROM_BOTTOM - BALL_REST_OFFSET,
            ),
            velocity: Vector2::UP,
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            active: false,
        }
    }
}

impl Ball {
    /// Active ball moving with `velocity`; speed is taken from its length
    pub fn new(position: Vector2, velocity: Vector2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            speed: velocity.length(),
            active: true,
        }
    }

    /// Inactive ball with the given radius and speed
    pub fn with_speed(radius: f32, speed: f32) -> Self {
        Self {
            radius,
            speed,
            velocity: Vector2::UP * speed,
            ..Self::default()
        }
    }

    /// Integrate position over `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.position = self.position + self.velocity * dt;
    }

    /// Mirror velocity about `normal`, then pin the magnitude back to `speed`
    pub fn reflect(&mut self, normal: Vector2) {
        let reflected = self.velocity - 2.0 * self.velocity.dot(normal) * normal;
        self.velocity = reflected.normalize() * self.speed;
    }

    /// Negate the X component (vertical surface)
    pub fn reflect_horizontal(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    /// Negate the Y component (horizontal surface)
    pub fn reflect_vertical(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// Set speed, keeping the current direction
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        self.apply_speed();
    }

    /// Scale speed up by `percent` (e.g. 30.0 for +30%)
    pub fn increase_speed(&mut self, percent: f32) {
        self.speed *= 1.0 + percent / 100.0;
        self.apply_speed();
    }

    /// Scale speed down by `percent`
    pub fn decrease_speed(&mut self, percent: f32) {
        self.speed *= 1.0 - percent / 100.0;
        self.apply_speed();
    }

    fn apply_speed(&mut self) {
        self.velocity = self.velocity.normalize() * self.speed;
    }

    /// Park the ball above the paddle, pointing up, inactive
    pub fn reset(&mut self, paddle_x: f32, paddle_y: f32) {
        self.position = Vector2::new(paddle_x, paddle_y - BALL_REST_OFFSET);
        self.velocity = Vector2::new(0.0, -self.speed);
        self.active = false;
    }

    /// Launch at `angle` radians from straight up (positive = rightward)
    pub fn launch(&mut self, angle: f32) {
        self.velocity = Vector2::from_launch_angle(angle) * self.speed;
        self.active = true;
    }
}
