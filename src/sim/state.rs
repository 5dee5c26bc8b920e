//! Game state machine: phase, lives and level counter
//!
//! Transitions are validated against a fixed graph; a rejected request
//! returns false and leaves the state untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_LEVEL, INITIAL_LIVES};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Every breakable brick of the level is gone
    LevelComplete,
    /// Out of lives
    GameOver,
    /// Every level cleared
    Victory,
}

impl GamePhase {
    /// Allowed edges of the transition graph
    pub fn can_transition_to(self, target: GamePhase) -> bool {
        use GamePhase::*;
        match self {
            Menu => target == Playing,
            Playing => matches!(target, Paused | LevelComplete | GameOver | Victory),
            Paused => matches!(target, Playing | Menu),
            LevelComplete => matches!(target, Playing | Victory),
            GameOver | Victory => target == Menu,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    phase: GamePhase,
    lives: u32,
    level: u32,
    /// Lives granted by `start_game`
    starting_lives: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_lives(INITIAL_LIVES)
    }

    /// Start in `Menu` with a custom life count
    pub fn with_lives(lives: u32) -> Self {
        Self {
            phase: GamePhase::Menu,
            lives,
            level: INITIAL_LEVEL,
            starting_lives: lives,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Jump the level counter without touching the phase
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    /// Playing or Paused; a paused game is still "in progress"
    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }

    pub fn can_transition_to(&self, target: GamePhase) -> bool {
        self.phase.can_transition_to(target)
    }

    /// Move to `target` if the graph allows it
    pub fn transition_to(&mut self, target: GamePhase) -> bool {
        if !self.can_transition_to(target) {
            log::debug!("Rejected transition {:?} -> {:?}", self.phase, target);
            return false;
        }
        self.set_phase(target);
        true
    }

    fn set_phase(&mut self, target: GamePhase) {
        if self.phase != target {
            log::info!("Phase {:?} -> {:?}", self.phase, target);
        }
        self.phase = target;
    }

    /// Begin a new game from Menu, GameOver or Victory
    pub fn start_game(&mut self, start_level: u32) -> bool {
        if !matches!(
            self.phase,
            GamePhase::Menu | GamePhase::GameOver | GamePhase::Victory
        ) {
            return false;
        }
        self.lives = self.starting_lives;
        self.level = start_level;
        self.set_phase(GamePhase::Playing);
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.set_phase(GamePhase::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.set_phase(GamePhase::Playing);
        true
    }

    pub fn complete_level(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.set_phase(GamePhase::LevelComplete);
        true
    }

    /// Advance the level counter after LevelComplete
    ///
    /// Enters Victory once the counter passes `max_levels`, else Playing.
    pub fn next_level(&mut self, max_levels: u32) -> bool {
        if self.phase != GamePhase::LevelComplete {
            return false;
        }
        self.level += 1;
        if self.level > max_levels {
            self.set_phase(GamePhase::Victory);
        } else {
            self.set_phase(GamePhase::Playing);
        }
        true
    }

    /// Take a life while Playing
    ///
    /// Returns true if play continues (respawn the ball), false if the game
    /// is over or the call was not valid in the current phase.
    pub fn lose_life(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        log::info!("Life lost, {} remaining", self.lives);
        if self.lives == 0 {
            self.set_phase(GamePhase::GameOver);
            return false;
        }
        true
    }

    pub fn add_life(&mut self) {
        self.lives += 1;
    }

    /// Force GameOver regardless of phase
    pub fn game_over(&mut self) {
        self.set_phase(GamePhase::GameOver);
    }

    /// Force Victory regardless of phase
    pub fn victory(&mut self) {
        self.set_phase(GamePhase::Victory);
    }

    pub fn return_to_menu(&mut self) -> bool {
        if self.phase == GamePhase::Menu {
            return false;
        }
        self.set_phase(GamePhase::Menu);
        true
    }

    /// Back to Menu with starting lives and level 1
    pub fn reset(&mut self) {
        self.phase = GamePhase::Menu;
        self.lives = self.starting_lives;
        self.level = INITIAL_LEVEL;
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameState(phase: {:?}, lives: {}, level: {})",
            self.phase, self.lives, self.level
        )
    }
}
