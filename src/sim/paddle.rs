//! The player's paddle
//!
//! An axis-aligned rectangle positioned by its center. Width changes from
//! power-ups are always relative to `base_width`, so they never compound.

use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::*;

/// Axis-aligned rectangle edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Closest point of the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            p.x.clamp(self.left, self.right),
            p.y.clamp(self.top, self.bottom),
        )
    }

    /// Circle-vs-AABB overlap without a square root
    #[inline]
    pub fn intersects_circle(&self, center: Vector2, radius: f32) -> bool {
        (center - self.closest_point(center)).length_squared() < radius * radius
    }

    #[inline]
    pub fn contains(&self, p: Vector2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center of the paddle
    pub position: Vector2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (units per second)
    pub speed: f32,
    base_width: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new(
            FIELD_WIDTH / 2.0,
            FIELD_HEIGHT - PADDLE_OFFSET_FROM_BOTTOM,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            PADDLE_SPEED,
        )
    }
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            position: Vector2::new(x, y),
            width,
            height,
            speed,
            base_width: width,
        }
    }

    pub fn base_width(&self) -> f32 {
        self.base_width
    }

    /// Move horizontally; `direction` is -1, 0 or 1
    ///
    /// The paddle is kept fully inside `[0, field_width]`.
    pub fn move_by(&mut self, direction: f32, dt: f32, field_width: f32) {
        if direction == 0.0 {
            return;
        }

        self.position.x += direction * self.speed * dt;
        self.keep_inside(field_width);
    }

    /// Pull the paddle back so it lies fully inside `[0, field_width]`
    ///
    /// A paddle wider than the field is narrowed to the field width.
    pub fn keep_inside(&mut self, field_width: f32) {
        self.width = self.width.min(field_width);
        let half_width = self.width / 2.0;
        if self.position.x - half_width < 0.0 {
            self.position.x = half_width;
        } else if self.position.x + half_width > field_width {
            self.position.x = field_width - half_width;
        }
    }

    pub fn bounds(&self) -> Bounds {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        Bounds {
            left: self.position.x - half_width,
            top: self.position.y - half_height,
            right: self.position.x + half_width,
            bottom: self.position.y + half_height,
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height / 2.0
    }

    /// Widen to `base_width * multiplier`
    pub fn expand(&mut self, multiplier: f32) {
        self.width = self.base_width * multiplier;
    }

    /// Narrow to `base_width * multiplier`
    pub fn shrink(&mut self, multiplier: f32) {
        self.width = self.base_width * multiplier;
    }

    pub fn reset_size(&mut self) {
        self.width = self.base_width;
    }

    /// Back to `(x, y)` at base width
    pub fn reset_position(&mut self, x: f32, y: f32) {
        self.position = Vector2::new(x, y);
        self.reset_size();
    }

    /// Where along the paddle `x` falls: -1 left edge, 0 center, 1 right edge
    pub fn relative_hit_position(&self, x: f32) -> f32 {
        let half_width = self.width / 2.0;
        ((x - self.position.x) / half_width).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_move_right_and_left() {
        let mut paddle = Paddle::new(40.0, 27.0, 10.0, 1.0, 30.0);
        paddle.move_by(1.0, 0.1, 80.0);
        assert!((paddle.position.x - 43.0).abs() < EPS);
        paddle.move_by(-1.0, 0.2, 80.0);
        assert!((paddle.position.x - 37.0).abs() < EPS);
    }

    #[test]
    fn test_move_zero_direction_is_noop() {
        let mut paddle = Paddle::default();
        let before = paddle.position;
        paddle.move_by(0.0, 1.0, 80.0);
        assert_eq!(paddle.position, before);
    }

    #[test]
    fn test_move_clamps_to_field() {
        let mut paddle = Paddle::new(40.0, 27.0, 10.0, 1.0, 30.0);
        paddle.move_by(-1.0, 100.0, 80.0);
        assert_eq!(paddle.left(), 0.0);

        paddle.move_by(1.0, 100.0, 80.0);
        assert_eq!(paddle.right(), 80.0);
    }

    #[test]
    fn test_keep_inside_after_expand() {
        let mut paddle = Paddle::new(76.0, 27.0, 8.0, 1.0, 30.0);
        paddle.expand(1.5);
        paddle.keep_inside(80.0);
        assert_eq!(paddle.right(), 80.0);
        assert_eq!(paddle.position.x, 74.0);
    }

    #[test]
    fn test_keep_inside_caps_width() {
        let mut paddle = Paddle::new(40.0, 27.0, 60.0, 1.0, 30.0);
        paddle.expand(1.5);
        paddle.keep_inside(80.0);
        assert_eq!(paddle.width, 80.0);
        assert_eq!(paddle.left(), 0.0);
        assert_eq!(paddle.right(), 80.0);

        // Base width is untouched, so the effect still reverts
        paddle.reset_size();
        assert_eq!(paddle.width, 60.0);
    }

    #[test]
    fn test_bounds() {
        let paddle = Paddle::new(40.0, 27.0, 10.0, 1.0, 30.0);
        let b = paddle.bounds();
        assert_eq!(b.left, 35.0);
        assert_eq!(b.right, 45.0);
        assert_eq!(b.top, 26.5);
        assert_eq!(b.bottom, 27.5);
        assert_eq!(paddle.top(), b.top);
        assert_eq!(paddle.bottom(), b.bottom);
    }

    #[test]
    fn test_size_modifiers_do_not_compound() {
        let mut paddle = Paddle::new(40.0, 27.0, 10.0, 1.0, 30.0);
        paddle.expand(1.5);
        paddle.expand(1.5);
        assert!((paddle.width - 15.0).abs() < EPS);

        paddle.shrink(0.7);
        assert!((paddle.width - 7.0).abs() < EPS);

        paddle.reset_size();
        assert_eq!(paddle.width, 10.0);
        assert_eq!(paddle.base_width(), 10.0);

        paddle.expand(1.5);
        paddle.position.x = 70.0;
        paddle.reset_position(40.0, 27.0);
        assert_eq!(paddle.position, Vector2::new(40.0, 27.0));
        assert_eq!(paddle.width, 10.0);
    }

    #[test]
    fn test_relative_hit_position() {
        let paddle = Paddle::new(40.0, 27.0, 10.0, 1.0, 30.0);
        assert_eq!(paddle.relative_hit_position(40.0), 0.0);
        assert!((paddle.relative_hit_position(42.5) - 0.5).abs() < EPS);
        assert_eq!(paddle.relative_hit_position(35.0), -1.0);
        assert_eq!(paddle.relative_hit_position(100.0), 1.0);
        assert_eq!(paddle.relative_hit_position(-100.0), -1.0);
    }

    #[test]
    fn test_bounds_circle_intersection() {
        let b = Bounds { left: 0.0, top: 0.0, right: 4.0, bottom: 2.0 };
        assert!(b.intersects_circle(Vector2::new(2.0, -0.4), 0.5));
        assert!(!b.intersects_circle(Vector2::new(2.0, -0.6), 0.5));
        assert!(b.intersects_circle(Vector2::new(2.0, 1.0), 0.5));
        assert!(b.contains(Vector2::new(4.0, 2.0)));
        assert!(!b.contains(Vector2::new(4.1, 2.0)));
    }
}
