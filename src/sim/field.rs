//! Static rectangular play area
//!
//! Origin at the top-left corner, y grows downward.

use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameField {
    width: f32,
    height: f32,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl GameField {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        0.0
    }

    pub fn top(&self) -> f32 {
        0.0
    }

    pub fn right(&self) -> f32 {
        self.width
    }

    pub fn bottom(&self) -> f32 {
        self.height
    }

    pub fn is_out_of_bounds(&self, p: Vector2) -> bool {
        self.is_out_of_left_bound(p.x)
            || self.is_out_of_right_bound(p.x)
            || self.is_out_of_top_bound(p.y)
            || self.is_out_of_bottom_bound(p.y)
    }

    pub fn is_out_of_left_bound(&self, x: f32) -> bool {
        x < self.left()
    }

    pub fn is_out_of_right_bound(&self, x: f32) -> bool {
        x > self.right()
    }

    pub fn is_out_of_top_bound(&self, y: f32) -> bool {
        y < self.top()
    }

    pub fn is_out_of_bottom_bound(&self, y: f32) -> bool {
        y > self.bottom()
    }

    pub fn clamp_position(&self, p: Vector2) -> Vector2 {
        Vector2::new(self.clamp_x(p.x), self.clamp_y(p.y))
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.left(), self.right())
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(self.top(), self.bottom())
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a rectangle at top-left `position` touches the field at all
    pub fn intersects_bounds(&self, position: Vector2, width: f32, height: f32) -> bool {
        !(position.x + width < self.left()
            || position.x > self.right()
            || position.y + height < self.top()
            || position.y > self.bottom())
    }
}
