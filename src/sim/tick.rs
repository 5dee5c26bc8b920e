//! Per-frame orchestration
//!
//! `GameEngine::update` advances one frame: integrate the ball, resolve
//! collisions (paddle, then at most one brick, then walls), drop destroyed
//! bricks, check for a lost ball, check for a cleared level. The caller owns
//! the clock and must serialize calls.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::ball::Ball;
use super::brick::{Brick, BrickColor, BrickKind};
use super::collision::{
    check_ball_out_of_bounds, handle_ball_brick_collision, handle_ball_paddle_collision,
    handle_ball_wall_collision,
};
use super::field::GameField;
use super::level::{BuiltinLevels, LevelError, LevelManager, LevelSource};
use super::paddle::{Bounds, Paddle};
use super::powerup::{ActiveEffects, Expired, PowerUp, PowerUpKind};
use super::state::{GamePhase, GameState};
use super::vector::Vector2;
use crate::consts::*;
use crate::highscores::ScoreBoard;
use crate::settings::GameConfig;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle direction: -1 left, 0 still, 1 right
    pub direction: f32,
    /// Launch the parked ball
    pub launch: bool,
    /// Launch angle in radians from straight up
    pub launch_angle: f32,
    /// Pause toggle
    pub pause: bool,
}

/// Read-only view of a standing brick
#[derive(Debug, Clone, Serialize)]
pub struct BrickView {
    pub bounds: Bounds,
    pub kind: BrickKind,
    pub symbol: char,
    pub color: BrickColor,
}

/// Read-only view of a falling power-up
#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub position: Vector2,
    pub kind: PowerUpKind,
    pub symbol: char,
    pub color: BrickColor,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub lives: u32,
    pub level: u32,
    pub score: u64,
    pub high_score: u64,
    pub ball_position: Vector2,
    pub ball_radius: f32,
    pub ball_active: bool,
    pub paddle: Bounds,
    pub bricks: Vec<BrickView>,
    pub power_ups: Vec<PowerUpView>,
}

/// Owns the whole object graph of one game
#[derive(Debug, Clone)]
pub struct GameEngine<S: LevelSource = BuiltinLevels> {
    config: GameConfig,
    field: GameField,
    state: GameState,
    levels: LevelManager<S>,
    ball: Ball,
    paddle: Paddle,
    bricks: Vec<Brick>,
    power_ups: Vec<PowerUp>,
    effects: ActiveEffects,
    score: ScoreBoard,
    rng: Pcg32,
}

impl GameEngine<BuiltinLevels> {
    /// Engine over the built-in levels, initialized and sitting in `Menu`
    pub fn new(config: GameConfig) -> Self {
        Self::with_levels(config, BuiltinLevels)
    }
}

impl<S: LevelSource> GameEngine<S> {
    pub fn with_levels(config: GameConfig, source: S) -> Self {
        let (x, y) = config.paddle_home();
        let mut engine = Self {
            field: config.field(),
            state: GameState::with_lives(config.initial_lives),
            levels: LevelManager::new(source),
            ball: Ball::with_speed(config.ball_radius, config.ball_speed),
            paddle: Paddle::new(
                x,
                y,
                config.paddle_width,
                config.paddle_height,
                config.paddle_speed,
            ),
            bricks: Vec::new(),
            power_ups: Vec::new(),
            effects: ActiveEffects::default(),
            score: ScoreBoard::new(),
            rng: Pcg32::seed_from_u64(config.seed),
            config,
        };
        engine.initialize();
        engine
    }

    /// Reset every entity, return to `Menu` and load level 1
    pub fn initialize(&mut self) {
        self.clear_power_ups();
        self.reset_paddle();
        self.ball = Ball::with_speed(self.config.ball_radius, self.config.ball_speed);
        self.reset_ball();
        self.state.reset();
        self.levels.reset();
        self.score.reset();
        self.rng = Pcg32::seed_from_u64(self.config.seed);
        if let Err(e) = self.levels.load_current_level(&mut self.bricks) {
            log::warn!("No starting level: {}", e);
            self.bricks.clear();
        }
    }

    pub fn start_new_game(&mut self) -> bool {
        self.initialize();
        self.state.start_game(INITIAL_LEVEL)
    }

    /// Launch the parked ball; only while Playing
    pub fn launch_ball(&mut self, angle: f32) -> bool {
        if self.state.phase() != GamePhase::Playing || self.ball.active {
            return false;
        }
        self.ball.launch(angle);
        true
    }

    pub fn pause(&mut self) -> bool {
        self.state.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.state.resume()
    }

    /// Apply one frame of input, then advance the simulation
    pub fn step(&mut self, input: &TickInput, dt: f32) {
        if input.pause {
            match self.state.phase() {
                GamePhase::Playing => {
                    self.state.pause();
                }
                GamePhase::Paused => {
                    self.state.resume();
                }
                _ => {}
            }
        }

        if self.state.phase() != GamePhase::Playing {
            return;
        }

        let dt = self.clamp_dt(dt);
        let direction = if input.direction > 0.0 {
            1.0
        } else if input.direction < 0.0 {
            -1.0
        } else {
            0.0
        };
        self.paddle.move_by(direction, dt, self.field.width());

        if !self.ball.active {
            // Parked ball rides on the paddle
            self.reset_ball();
            if input.launch {
                self.launch_ball(input.launch_angle);
            }
        }

        self.update(dt);
    }

    /// Advance one frame
    ///
    /// Does nothing unless Playing; a paused game stays frozen.
    pub fn update(&mut self, dt: f32) {
        if self.state.phase() != GamePhase::Playing {
            return;
        }
        let dt = self.clamp_dt(dt);

        if self.ball.active {
            self.ball.update(dt);
        }

        self.resolve_collisions();
        self.remove_destroyed_bricks();
        self.update_power_ups(dt);
        self.check_ball_lost();
        self.check_level_complete();
    }

    fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, self.config.max_dt)
        } else {
            0.0
        }
    }

    fn resolve_collisions(&mut self) {
        if !self.ball.active {
            return;
        }

        handle_ball_paddle_collision(&mut self.ball, &self.paddle);

        // One brick per frame
        let mut destroyed = None;
        for (index, brick) in self.bricks.iter_mut().enumerate() {
            if handle_ball_brick_collision(&mut self.ball, brick) {
                if brick.hit() {
                    destroyed = Some(index);
                }
                break;
            }
        }
        if let Some(index) = destroyed {
            self.on_brick_destroyed(index);
        }

        handle_ball_wall_collision(&mut self.ball, &self.field);
    }

    fn on_brick_destroyed(&mut self, index: usize) {
        let brick = &self.bricks[index];
        if self.score.add(brick.points(), self.levels.current_level()) {
            log::debug!("New high score {}", self.score.high_score());
        }

        if self.config.power_ups_enabled && brick.should_drop_power_up(&mut self.rng) {
            let kind = PowerUpKind::random(&mut self.rng);
            log::debug!("Power-up {:?} dropped at {}", kind, brick.center());
            self.power_ups.push(PowerUp::new(
                kind,
                brick.center(),
                self.config.power_up_fall_speed,
            ));
        }
    }

    fn remove_destroyed_bricks(&mut self) -> usize {
        let before = self.bricks.len();
        self.bricks.retain(|b| !b.is_destroyed());
        before - self.bricks.len()
    }

    fn update_power_ups(&mut self, dt: f32) {
        for expired in self.effects.tick(dt) {
            match expired {
                Expired::Paddle => {
                    log::debug!("Paddle effect expired");
                    self.paddle.reset_size();
                    self.paddle.keep_inside(self.field.width());
                }
                Expired::Speed => {
                    log::debug!("Speed effect expired");
                    self.ball.set_speed(self.effects.base_ball_speed);
                }
            }
        }

        let paddle = self.paddle.bounds();
        let bottom = self.field.bottom();
        let mut collected = Vec::new();
        for power_up in &mut self.power_ups {
            power_up.update(dt);
            if power_up.touches(&paddle) {
                power_up.active = false;
                collected.push(power_up.kind);
            } else if power_up.bounds().top > bottom {
                power_up.active = false;
            }
        }
        self.power_ups.retain(|p| p.active);

        for kind in collected {
            self.apply_power_up(kind);
        }
    }

    fn apply_power_up(&mut self, kind: PowerUpKind) {
        log::debug!("Collected {:?}", kind);
        let duration = kind.data().duration;
        match kind {
            PowerUpKind::ExpandPaddle | PowerUpKind::ShrinkPaddle => {
                if kind == PowerUpKind::ExpandPaddle {
                    self.paddle.expand(PADDLE_EXPAND_MULTIPLIER);
                } else {
                    self.paddle.shrink(PADDLE_SHRINK_MULTIPLIER);
                }
                self.paddle.keep_inside(self.field.width());
                self.effects.paddle_kind = Some(kind);
                self.effects.paddle_timer = duration;
            }
            PowerUpKind::SpeedUp | PowerUpKind::SlowDown => {
                if self.effects.speed_kind.is_none() {
                    self.effects.base_ball_speed = self.ball.speed;
                }
                self.ball.set_speed(self.effects.base_ball_speed);
                if kind == PowerUpKind::SpeedUp {
                    self.ball.increase_speed(POWER_UP_SPEED_PERCENT);
                } else {
                    self.ball.decrease_speed(POWER_UP_SPEED_PERCENT);
                }
                self.effects.speed_kind = Some(kind);
                self.effects.speed_timer = duration;
            }
            PowerUpKind::ExtraLife => self.state.add_life(),
        }
    }

    /// Drop falling power-ups and revert running effects
    fn clear_power_ups(&mut self) {
        self.power_ups.clear();
        self.paddle.reset_size();
        self.paddle.keep_inside(self.field.width());
        if self.effects.speed_kind.is_some() {
            self.ball.set_speed(self.effects.base_ball_speed);
        }
        self.effects.clear();
    }

    fn check_ball_lost(&mut self) {
        if !check_ball_out_of_bounds(&self.ball, &self.field) {
            return;
        }

        if self.state.lose_life() {
            self.clear_power_ups();
            self.reset_ball();
        } else {
            self.ball.active = false;
            log::info!("Game over with score {}", self.score.score());
        }
    }

    fn check_level_complete(&mut self) {
        if self.levels.is_level_complete(&self.bricks) && self.state.complete_level() {
            log::info!("Level {} complete", self.levels.current_level());
        }
    }

    /// Load the following level after LevelComplete
    ///
    /// Enters Victory and returns false when no level follows.
    pub fn next_level(&mut self) -> bool {
        if self.state.phase() != GamePhase::LevelComplete {
            return false;
        }
        if !self.levels.has_more_levels() {
            self.state.victory();
            return false;
        }

        let next = self.levels.current_level() + 1;
        if let Err(e) = self.levels.load_level(next, &mut self.bricks) {
            log::warn!("Cannot advance: {}", e);
            self.state.victory();
            return false;
        }

        self.clear_power_ups();
        self.reset_paddle();
        self.reset_ball();
        self.state.next_level(self.levels.total_levels())
    }

    /// Jump straight to `number`, keeping lives and score
    pub fn load_level(&mut self, number: u32) -> Result<(), LevelError> {
        self.levels.load_level(number, &mut self.bricks)?;
        self.state.set_level(number);
        self.clear_power_ups();
        self.reset_paddle();
        self.reset_ball();
        Ok(())
    }

    /// Follow-up transitions the frame loop runs after each update
    pub fn process_state_transitions(&mut self) {
        if self.state.phase() == GamePhase::LevelComplete {
            self.next_level();
        }
    }

    fn reset_ball(&mut self) {
        self.ball.reset(self.paddle.position.x, self.paddle.position.y);
    }

    fn reset_paddle(&mut self) {
        let (x, y) = self.config.paddle_home();
        self.paddle.reset_position(x, y);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &GameField {
        &self.field
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn levels(&self) -> &LevelManager<S> {
        &self.levels
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn bricks_mut(&mut self) -> &mut Vec<Brick> {
        &mut self.bricks
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn power_ups_mut(&mut self) -> &mut Vec<PowerUp> {
        &mut self.power_ups
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Seed the board with a persisted high score
    pub fn set_score_board(&mut self, score: ScoreBoard) {
        self.score = score;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase(),
            lives: self.state.lives(),
            level: self.levels.current_level(),
            score: self.score.score(),
            high_score: self.score.high_score(),
            ball_position: self.ball.position,
            ball_radius: self.ball.radius,
            ball_active: self.ball.active,
            paddle: self.paddle.bounds(),
            bricks: self
                .bricks
                .iter()
                .filter(|b| !b.is_destroyed())
                .map(|b| BrickView {
                    bounds: b.bounds(),
                    kind: b.kind,
                    symbol: b.symbol(),
                    color: b.current_color(),
                })
                .collect(),
            power_ups: self
                .power_ups
                .iter()
                .map(|p| {
                    let data = p.kind.data();
                    PowerUpView {
                        position: p.position,
                        kind: p.kind,
                        symbol: data.symbol,
                        color: data.color,
                    }
                })
                .collect(),
        }
    }
}
