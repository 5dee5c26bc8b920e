//! Collision detection and response for the ball
//!
//! Every test is circle-vs-AABB: clamp the ball center onto the rectangle to
//! get the closest point, then compare squared distance with squared radius.
//! `check_*` functions are pure predicates; `handle_*` functions detect,
//! then resolve by reflecting the ball and snapping it just outside the
//! surface it hit.

use super::ball::Ball;
use super::brick::Brick;
use super::field::GameField;
use super::paddle::{Bounds, Paddle};
use super::vector::Vector2;
use crate::consts::MAX_BOUNCE_ANGLE;

/// Which brick edge absorbed an impact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl ImpactSide {
    /// Outward surface normal of this edge
    pub fn normal(self) -> Vector2 {
        match self {
            ImpactSide::Left => Vector2::LEFT,
            ImpactSide::Right => Vector2::RIGHT,
            ImpactSide::Top => Vector2::UP,
            ImpactSide::Bottom => Vector2::DOWN,
        }
    }
}

#[inline]
fn ball_hits_rect(ball: &Ball, bounds: &Bounds) -> bool {
    bounds.intersects_circle(ball.position, ball.radius)
}

/// Check whether an active ball overlaps the paddle
pub fn check_ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    ball.active && ball_hits_rect(ball, &paddle.bounds())
}

/// Bounce the ball off the paddle
///
/// Top-face hits steer the ball by where it struck: the relative hit
/// position maps linearly onto [-45°, 45°] from vertical. Side hits while
/// moving toward the paddle reflect horizontally. Returns true if a
/// collision was resolved.
pub fn handle_ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !check_ball_paddle_collision(ball, paddle) {
        return false;
    }

    let bounds = paddle.bounds();
    let pos = ball.position;

    if pos.y < bounds.top && ball.velocity.y > 0.0 {
        let angle = paddle.relative_hit_position(pos.x) * MAX_BOUNCE_ANGLE;
        ball.reflect(Vector2::from_launch_angle(angle));
        // Tunneling correction
        ball.position.y = bounds.top - ball.radius;
        true
    } else if pos.x < bounds.left && ball.velocity.x > 0.0 {
        ball.reflect_horizontal();
        ball.position.x = bounds.left - ball.radius;
        true
    } else if pos.x > bounds.right && ball.velocity.x < 0.0 {
        ball.reflect_horizontal();
        ball.position.x = bounds.right + ball.radius;
        true
    } else {
        false
    }
}

/// Check whether an active ball overlaps a standing brick
pub fn check_ball_brick_collision(ball: &Ball, brick: &Brick) -> bool {
    ball.active && !brick.is_destroyed() && ball_hits_rect(ball, &brick.bounds())
}

/// Pick the brick edge nearest the ball center
///
/// Ties resolve in left, right, top, bottom order.
pub fn brick_impact_side(ball_pos: Vector2, bounds: &Bounds) -> ImpactSide {
    let candidates = [
        ((ball_pos.x - bounds.left).abs(), ImpactSide::Left),
        ((ball_pos.x - bounds.right).abs(), ImpactSide::Right),
        ((ball_pos.y - bounds.top).abs(), ImpactSide::Top),
        ((ball_pos.y - bounds.bottom).abs(), ImpactSide::Bottom),
    ];

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0 < best.0 {
            best = *candidate;
        }
    }
    best.1
}

/// Bounce the ball off a brick without damaging it
///
/// The caller applies `Brick::hit` after a successful resolution.
pub fn handle_ball_brick_collision(ball: &mut Ball, brick: &Brick) -> bool {
    if !check_ball_brick_collision(ball, brick) {
        return false;
    }

    let bounds = brick.bounds();
    let side = brick_impact_side(ball.position, &bounds);
    match side {
        ImpactSide::Left => ball.position.x = bounds.left - ball.radius,
        ImpactSide::Right => ball.position.x = bounds.right + ball.radius,
        ImpactSide::Top => ball.position.y = bounds.top - ball.radius,
        ImpactSide::Bottom => ball.position.y = bounds.bottom + ball.radius,
    }
    ball.reflect(side.normal());
    true
}

/// Check whether an active ball touches the left, right or top wall
pub fn check_ball_wall_collision(ball: &Ball, field: &GameField) -> bool {
    if !ball.active {
        return false;
    }
    let pos = ball.position;
    pos.x - ball.radius <= field.left()
        || pos.x + ball.radius >= field.right()
        || pos.y - ball.radius <= field.top()
}

/// Bounce the ball off the side and top walls
///
/// The bottom edge is not a wall; crossing it loses the ball
/// (see [`check_ball_out_of_bounds`]).
pub fn handle_ball_wall_collision(ball: &mut Ball, field: &GameField) -> bool {
    if !ball.active {
        return false;
    }

    let mut collided = false;
    let r = ball.radius;

    if ball.position.x - r <= field.left() {
        ball.reflect_horizontal();
        ball.position.x = field.left() + r;
        collided = true;
    } else if ball.position.x + r >= field.right() {
        ball.reflect_horizontal();
        ball.position.x = field.right() - r;
        collided = true;
    }

    if ball.position.y - r <= field.top() {
        ball.reflect_vertical();
        ball.position.y = field.top() + r;
        collided = true;
    }

    collided
}

/// Check whether an active ball has dropped past the bottom edge
pub fn check_ball_out_of_bounds(ball: &Ball, field: &GameField) -> bool {
    ball.active && ball.position.y + ball.radius > field.bottom()
}
