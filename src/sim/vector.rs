//! 2D vector used by every simulation entity
//!
//! Thin value type over `glam::Vec2` with zero-safe division and
//! normalization: dividing by exactly zero, or normalizing a zero-length
//! vector, yields the zero vector instead of NaN.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D float vector with value semantics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// Straight up in screen space (y grows downward)
    pub const UP: Self = Self { x: 0.0, y: -1.0 };
    pub const DOWN: Self = Self { x: 0.0, y: 1.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean norm
    #[inline]
    pub fn length(self) -> f32 {
        Vec2::from(self).length()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        Vec2::from(self).length_squared()
    }

    /// Unit vector in the same direction, or zero for the zero vector
    #[inline]
    pub fn normalize(self) -> Self {
        if self.length() > 0.0 {
            Vec2::from(self).normalize_or_zero().into()
        } else {
            Self::ZERO
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Vec2::from(self).dot(other.into())
    }

    /// Unit direction at `angle` radians from straight up, clockwise positive
    ///
    /// Angle 0 is `(0, -1)`; this is the launch and paddle-bounce convention.
    #[inline]
    pub fn from_launch_angle(angle: f32) -> Self {
        Self::new(angle.sin(), -angle.cos()).normalize()
    }
}

impl From<Vec2> for Vector2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector2> for Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        (Vec2::from(self) + Vec2::from(rhs)).into()
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        (Vec2::from(self) - Vec2::from(rhs)).into()
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        (Vec2::from(self) * scalar).into()
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    /// Division by exactly zero yields the zero vector
    #[inline]
    fn div(self, scalar: f32) -> Self {
        if scalar == 0.0 {
            return Self::ZERO;
        }
        (Vec2::from(self) / scalar).into()
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
