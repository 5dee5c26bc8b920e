//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time advances only through the caller-supplied `dt`
//! - Seeded RNG only
//! - Stable iteration order (brick layout order)
//! - No rendering, input or platform dependencies

pub mod ball;
pub mod brick;
pub mod collision;
pub mod field;
pub mod level;
pub mod paddle;
pub mod powerup;
pub mod state;
pub mod tick;
pub mod vector;

pub use ball::Ball;
pub use brick::{Brick, BrickColor, BrickKind, BrickTypeData};
pub use collision::{
    check_ball_brick_collision, check_ball_out_of_bounds, check_ball_paddle_collision,
    check_ball_wall_collision, handle_ball_brick_collision, handle_ball_paddle_collision,
    handle_ball_wall_collision,
};
pub use field::GameField;
pub use level::{BrickDescriptor, BuiltinLevels, LevelError, LevelLayout, LevelManager, LevelSource};
pub use paddle::{Bounds, Paddle};
pub use powerup::{ActiveEffects, Expired, PowerUp, PowerUpKind, PowerUpTypeData};
pub use state::{GamePhase, GameState};
pub use tick::{BrickView, GameEngine, PowerUpView, Snapshot, TickInput};
pub use vector::Vector2;
