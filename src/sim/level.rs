//! Level layouts and level sequencing
//!
//! Layout data comes from a [`LevelSource`]; the engine only needs to know
//! whether a level exists and what bricks it contains. Unknown level
//! numbers are always rejected, never substituted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::brick::{Brick, BrickKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level {0} does not exist")]
    NotFound(u32),
}

/// Brick placement within a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickDescriptor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BrickKind,
}

impl BrickDescriptor {
    pub fn build(&self) -> Brick {
        Brick::new(self.x, self.y, self.width, self.height, self.kind)
    }
}

/// An ordered brick layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub number: u32,
    pub difficulty: u32,
    pub bricks: Vec<BrickDescriptor>,
}

impl LevelLayout {
    pub fn destructible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.kind.counts_for_clear()).count()
    }
}

/// Supplier of level layouts
pub trait LevelSource {
    fn level_exists(&self, number: u32) -> bool;

    fn level(&self, number: u32) -> Result<LevelLayout, LevelError>;

    fn level_count(&self) -> u32;
}

/// The three stock layouts on a 10-column grid
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLevels;

impl BuiltinLevels {
    const BRICK_WIDTH: f32 = 7.0;
    const BRICK_HEIGHT: f32 = 2.0;
    const SPACING: f32 = 1.0;
    const START_X: f32 = 1.0;
    const START_Y: f32 = 3.0;
    const COLUMNS: u32 = 10;
    pub const LEVEL_COUNT: u32 = 3;

    fn grid(rows: u32, kind_at: impl Fn(u32, u32) -> BrickKind) -> Vec<BrickDescriptor> {
        let mut bricks = Vec::with_capacity((rows * Self::COLUMNS) as usize);
        for row in 0..rows {
            for col in 0..Self::COLUMNS {
                bricks.push(BrickDescriptor {
                    x: Self::START_X + col as f32 * (Self::BRICK_WIDTH + Self::SPACING),
                    y: Self::START_Y + row as f32 * (Self::BRICK_HEIGHT + Self::SPACING),
                    width: Self::BRICK_WIDTH,
                    height: Self::BRICK_HEIGHT,
                    kind: kind_at(row, col),
                });
            }
        }
        bricks
    }
}

impl LevelSource for BuiltinLevels {
    fn level_exists(&self, number: u32) -> bool {
        (1..=Self::LEVEL_COUNT).contains(&number)
    }

    fn level(&self, number: u32) -> Result<LevelLayout, LevelError> {
        let (difficulty, bricks) = match number {
            1 => (1, Self::grid(5, |_, _| BrickKind::Normal)),
            2 => (
                3,
                Self::grid(6, |row, _| {
                    if row < 2 {
                        BrickKind::Strong
                    } else {
                        BrickKind::Normal
                    }
                }),
            ),
            3 => (
                5,
                Self::grid(7, |row, col| match row {
                    0 if col % 2 == 0 => BrickKind::Unbreakable,
                    0 | 1 => BrickKind::VeryStrong,
                    2 => BrickKind::Strong,
                    _ => BrickKind::Normal,
                }),
            ),
            _ => return Err(LevelError::NotFound(number)),
        };
        Ok(LevelLayout {
            number,
            difficulty,
            bricks,
        })
    }

    fn level_count(&self) -> u32 {
        Self::LEVEL_COUNT
    }
}

/// Tracks the current level and loads layouts into a brick collection
#[derive(Debug, Clone)]
pub struct LevelManager<S: LevelSource = BuiltinLevels> {
    source: S,
    current: u32,
}

impl Default for LevelManager<BuiltinLevels> {
    fn default() -> Self {
        Self::new(BuiltinLevels)
    }
}

impl<S: LevelSource> LevelManager<S> {
    pub fn new(source: S) -> Self {
        Self { source, current: 1 }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn current_level(&self) -> u32 {
        self.current
    }

    pub fn total_levels(&self) -> u32 {
        self.source.level_count()
    }

    /// Replace `bricks` with the layout of `number`
    ///
    /// On failure neither `bricks` nor the current level changes.
    pub fn load_level(&mut self, number: u32, bricks: &mut Vec<Brick>) -> Result<(), LevelError> {
        let layout = match self.source.level(number) {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("Failed to load level {}: {}", number, e);
                return Err(e);
            }
        };

        bricks.clear();
        bricks.extend(layout.bricks.iter().map(BrickDescriptor::build));
        self.current = number;
        log::info!(
            "Loaded level {} ({} bricks, difficulty {})",
            number,
            bricks.len(),
            layout.difficulty
        );
        Ok(())
    }

    pub fn load_current_level(&mut self, bricks: &mut Vec<Brick>) -> Result<(), LevelError> {
        self.load_level(self.current, bricks)
    }

    /// Fresh bricks for `number`, empty if it does not exist
    pub fn generate_bricks(&self, number: u32) -> Vec<Brick> {
        self.source
            .level(number)
            .map(|layout| layout.bricks.iter().map(BrickDescriptor::build).collect())
            .unwrap_or_default()
    }

    /// No breakable bricks left standing
    pub fn is_level_complete(&self, bricks: &[Brick]) -> bool {
        !bricks
            .iter()
            .any(|b| !b.is_destroyed() && b.kind.counts_for_clear())
    }

    /// Bump the level counter if another level follows
    pub fn next_level(&mut self) -> bool {
        if !self.has_more_levels() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn has_more_levels(&self) -> bool {
        self.current < self.total_levels()
    }

    pub fn is_last_level(&self) -> bool {
        self.current >= self.total_levels()
    }

    pub fn set_level(&mut self, number: u32) -> Result<(), LevelError> {
        if !self.source.level_exists(number) {
            return Err(LevelError::NotFound(number));
        }
        self.current = number;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn current_brick_count(&self) -> usize {
        self.source
            .level(self.current)
            .map(|l| l.bricks.len())
            .unwrap_or(0)
    }

    pub fn current_destructible_count(&self) -> usize {
        self.source
            .level(self.current)
            .map(|l| l.destructible_count())
            .unwrap_or(0)
    }

    pub fn current_difficulty(&self) -> Option<u32> {
        self.source.level(self.current).ok().map(|l| l.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layout_sizes() {
        let levels = BuiltinLevels;
        assert_eq!(levels.level(1).unwrap().bricks.len(), 50);
        assert_eq!(levels.level(2).unwrap().bricks.len(), 60);
        assert_eq!(levels.level(3).unwrap().bricks.len(), 70);
        assert_eq!(levels.level(3).unwrap().destructible_count(), 65);
        assert_eq!(levels.level(2).unwrap().difficulty, 3);
    }

    #[test]
    fn test_layout_rows() {
        let l2 = BuiltinLevels.level(2).unwrap();
        assert!(l2.bricks[..20].iter().all(|b| b.kind == BrickKind::Strong));
        assert!(l2.bricks[20..].iter().all(|b| b.kind == BrickKind::Normal));

        let l3 = BuiltinLevels.level(3).unwrap();
        assert_eq!(l3.bricks[0].kind, BrickKind::Unbreakable);
        assert_eq!(l3.bricks[1].kind, BrickKind::VeryStrong);
        assert_eq!(l3.bricks[25].kind, BrickKind::Strong);
        assert_eq!(l3.bricks[69].kind, BrickKind::Normal);
    }

    #[test]
    fn test_grid_positions() {
        let l1 = BuiltinLevels.level(1).unwrap();
        let first = l1.bricks[0];
        assert_eq!((first.x, first.y), (1.0, 3.0));
        let last = l1.bricks[49];
        assert_eq!((last.x, last.y), (73.0, 15.0));
        assert!(last.x + last.width <= 80.0);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let levels = BuiltinLevels;
        assert!(!levels.level_exists(0));
        assert!(!levels.level_exists(4));
        assert_eq!(levels.level(4), Err(LevelError::NotFound(4)));
    }

    #[test]
    fn test_load_level_replaces_bricks() {
        let mut manager = LevelManager::new(BuiltinLevels);
        let mut bricks = Vec::new();
        manager.load_level(2, &mut bricks).unwrap();
        assert_eq!(bricks.len(), 60);
        assert_eq!(manager.current_level(), 2);
    }

    #[test]
    fn test_failed_load_leaves_state() {
        let mut manager = LevelManager::new(BuiltinLevels);
        let mut bricks = manager.generate_bricks(1);
        assert_eq!(manager.load_level(9, &mut bricks), Err(LevelError::NotFound(9)));
        assert_eq!(bricks.len(), 50);
        assert_eq!(manager.current_level(), 1);
        assert!(manager.generate_bricks(9).is_empty());
    }

    #[test]
    fn test_level_complete_ignores_unbreakable() {
        let manager = LevelManager::new(BuiltinLevels);
        let mut bricks = vec![
            Brick::new(0.0, 0.0, 7.0, 2.0, BrickKind::Unbreakable),
            Brick::new(8.0, 0.0, 7.0, 2.0, BrickKind::Normal),
        ];
        assert!(!manager.is_level_complete(&bricks));
        bricks[1].hit();
        assert!(manager.is_level_complete(&bricks));
        assert!(manager.is_level_complete(&[]));
    }

    #[test]
    fn test_sequencing() {
        let mut manager = LevelManager::new(BuiltinLevels);
        assert_eq!(manager.total_levels(), 3);
        assert!(manager.has_more_levels());
        assert!(manager.next_level());
        assert!(manager.next_level());
        assert!(manager.is_last_level());
        assert!(!manager.next_level());
        assert_eq!(manager.current_level(), 3);

        assert!(manager.set_level(5).is_err());
        assert!(manager.set_level(2).is_ok());
        assert_eq!(manager.current_difficulty(), Some(3));
        assert_eq!(manager.current_brick_count(), 60);
        assert_eq!(manager.current_destructible_count(), 60);

        manager.reset();
        assert_eq!(manager.current_level(), 1);
    }
}
