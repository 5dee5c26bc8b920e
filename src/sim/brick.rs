//! Destructible bricks and their per-kind data table

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::Bounds;
use super::vector::Vector2;

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Normal,
    Strong,
    VeryStrong,
    /// Cannot be destroyed, doesn't count for level clear
    Unbreakable,
}

/// Console palette used for bricks and power-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickColor {
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Red,
    DarkRed,
    Cyan,
    Magenta,
    DarkGray,
}

impl BrickColor {
    /// One shade darker, where a darker shade exists
    pub fn darken(self) -> Self {
        match self {
            BrickColor::Green => BrickColor::DarkGreen,
            BrickColor::Yellow => BrickColor::DarkYellow,
            BrickColor::Red => BrickColor::DarkRed,
            other => other,
        }
    }
}

/// Immutable per-kind constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrickTypeData {
    pub kind: BrickKind,
    pub max_health: i32,
    pub points: u32,
    pub color: BrickColor,
    pub power_up_drop_chance: f32,
    pub symbol: char,
}

impl BrickTypeData {
    pub const fn of(kind: BrickKind) -> Self {
        match kind {
            BrickKind::Normal => Self {
                kind,
                max_health: 1,
                points: 10,
                color: BrickColor::Green,
                power_up_drop_chance: 0.2,
                symbol: '#',
            },
            BrickKind::Strong => Self {
                kind,
                max_health: 2,
                points: 20,
                color: BrickColor::Yellow,
                power_up_drop_chance: 0.4,
                symbol: '=',
            },
            BrickKind::VeryStrong => Self {
                kind,
                max_health: 3,
                points: 30,
                color: BrickColor::Red,
                power_up_drop_chance: 0.5,
                symbol: '@',
            },
            BrickKind::Unbreakable => Self {
                kind,
                max_health: i32::MAX,
                points: 0,
                color: BrickColor::DarkGray,
                power_up_drop_chance: 0.0,
                symbol: 'X',
            },
        }
    }
}

impl BrickKind {
    pub const fn data(self) -> BrickTypeData {
        BrickTypeData::of(self)
    }

    /// Returns true if bricks of this kind must be destroyed to clear a level
    pub fn counts_for_clear(self) -> bool {
        self != BrickKind::Unbreakable
    }
}

/// A brick entity, positioned by its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub position: Vector2,
    pub width: f32,
    pub height: f32,
    pub kind: BrickKind,
    health: i32,
    max_health: i32,
    destroyed: bool,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: BrickKind) -> Self {
        let max_health = kind.data().max_health;
        Self {
            position: Vector2::new(x, y),
            width,
            height,
            kind,
            health: max_health,
            max_health,
            destroyed: false,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn type_data(&self) -> BrickTypeData {
        self.kind.data()
    }

    /// Apply one hit. Returns true only for the hit that destroys the brick.
    pub fn hit(&mut self) -> bool {
        if self.kind == BrickKind::Unbreakable {
            return false;
        }

        self.health -= 1;
        if self.health <= 0 {
            self.destroyed = true;
            return true;
        }
        false
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.position.x,
            top: self.position.y,
            right: self.position.x + self.width,
            bottom: self.position.y + self.height,
        }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Inclusive on all edges
    pub fn contains_point(&self, point: Vector2) -> bool {
        self.bounds().contains(point)
    }

    /// Fresh random draw against the kind's drop chance, only once destroyed
    pub fn should_drop_power_up<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        if self.kind == BrickKind::Unbreakable || !self.destroyed {
            return false;
        }
        rng.random::<f32>() < self.type_data().power_up_drop_chance
    }

    /// Base color, one shade darker once damaged
    pub fn current_color(&self) -> BrickColor {
        let base = self.type_data().color;
        if self.health < self.max_health {
            base.darken()
        } else {
            base
        }
    }

    pub fn symbol(&self) -> char {
        self.type_data().symbol
    }

    pub fn points(&self) -> u32 {
        self.type_data().points
    }
}
