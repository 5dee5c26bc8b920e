//! Score keeping
//!
//! Tracks the running score and the best score seen. The high score can be
//! persisted as a small JSON file; the simulation never touches the disk.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to access score file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse score file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk form
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u64,
    /// Level reached when the high score was set
    level: u32,
}

/// Running score plus the best score seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    score: u64,
    high_score: u64,
    high_score_level: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously persisted best score
    pub fn with_high_score(high_score: u64) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Add points earned on `level`; returns true if this set a new high score
    pub fn add(&mut self, points: u32, level: u32) -> bool {
        if points == 0 {
            return false;
        }
        self.score += u64::from(points);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.high_score_level = level;
            return true;
        }
        false
    }

    /// Clear the running score, keep the high score
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Load the high score from `path`; a missing file is an empty board
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No high score file at {}, starting fresh", path.display());
            return Ok(Self::new());
        }
        let json = fs::read_to_string(path)?;
        let record: HighScoreRecord = serde_json::from_str(&json)?;
        log::info!("Loaded high score {}", record.high_score);
        Ok(Self {
            score: 0,
            high_score: record.high_score,
            high_score_level: record.level,
        })
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ScoreError> {
        let record = HighScoreRecord {
            high_score: self.high_score,
            level: self.high_score_level,
        };
        fs::write(path.as_ref(), serde_json::to_string(&record)?)?;
        log::info!("High score {} saved", self.high_score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tracks_high_score() {
        let mut board = ScoreBoard::new();
        assert!(board.add(10, 1));
        assert!(board.add(20, 1));
        assert_eq!(board.score(), 30);
        assert_eq!(board.high_score(), 30);

        board.reset();
        assert_eq!(board.score(), 0);
        assert!(!board.add(10, 2));
        assert_eq!(board.high_score(), 30);
    }

    #[test]
    fn test_zero_points_ignored() {
        let mut board = ScoreBoard::with_high_score(5);
        assert!(!board.add(0, 1));
        assert_eq!(board.score(), 0);
        assert_eq!(board.high_score(), 5);
    }

    #[test]
    fn test_persistence() {
        let path = std::env::temp_dir()
            .join(format!("brickfall-score-{}.json", std::process::id()));
        let mut board = ScoreBoard::new();
        board.add(120, 2);
        board.save_to(&path).unwrap();

        let loaded = ScoreBoard::load_from(&path).unwrap();
        assert_eq!(loaded.high_score(), 120);
        assert_eq!(loaded.score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_empty_board() {
        let path = std::env::temp_dir().join("brickfall-score-missing-file.json");
        let board = ScoreBoard::load_from(&path).unwrap();
        assert_eq!(board, ScoreBoard::new());
    }
}
