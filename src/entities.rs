//! All game entity types — data plus constructors. Behaviour lives in `compute`.

use crate::constants::{column_x, row_y, PLAYER_START_COLUMN, PLAYER_START_ROW};
use crate::geometry::{HitBox, Position};

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Every image the game draws. Closed, so asset lookup can never miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    EnemyBug,
    CharBoy,
    GemBlue,
    GemGreen,
    GemOrange,
    Heart,
}

impl Sprite {
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::GemBlue => "images/gem-blue.png",
            Sprite::GemGreen => "images/gem-green.png",
            Sprite::GemOrange => "images/gem-orange.png",
            Sprite::Heart => "images/heart.png",
        }
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Pixels per second, always rightward.
    pub speed: f32,
}

impl Enemy {
    /// The bug's body, trimmed so bugs never reach into the lanes above or below.
    pub const HIT_BOX: HitBox = HitBox::new(1.0, 77.0, 98.0, 66.0);

    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Enemy { x, y, speed }
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub start_x: f32,
    pub start_y: f32,
    /// Tile the player is heading for; adopted by `update` only when on the board.
    pub goal_x: f32,
    pub goal_y: f32,
}

impl Player {
    pub const HIT_BOX: HitBox = HitBox::new(17.0, 63.0, 67.0, 75.0);

    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            start_x: x,
            start_y: y,
            goal_x: x,
            goal_y: y,
        }
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}

impl Default for Player {
    /// Centre column, bottom grass row.
    fn default() -> Self {
        Player::new(column_x(PLAYER_START_COLUMN), row_y(PLAYER_START_ROW))
    }
}

// ── Treats ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GemColor {
    Blue,
    Green,
    Orange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreatKind {
    Gem(GemColor),
    Heart,
}

impl TreatKind {
    pub const ALL: [TreatKind; 4] = [
        TreatKind::Gem(GemColor::Blue),
        TreatKind::Gem(GemColor::Green),
        TreatKind::Gem(GemColor::Orange),
        TreatKind::Heart,
    ];

    pub fn sprite(&self) -> Sprite {
        match self {
            TreatKind::Gem(GemColor::Blue) => Sprite::GemBlue,
            TreatKind::Gem(GemColor::Green) => Sprite::GemGreen,
            TreatKind::Gem(GemColor::Orange) => Sprite::GemOrange,
            TreatKind::Heart => Sprite::Heart,
        }
    }
}

/// Identity of a treat instance; two treats never share one within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreatId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Treat {
    pub id: TreatId,
    pub x: f32,
    pub y: f32,
    pub kind: TreatKind,
}

impl Treat {
    pub const HIT_BOX: HitBox = HitBox::new(10.0, 60.0, 81.0, 80.0);

    pub fn new(id: TreatId, x: f32, y: f32, kind: TreatKind) -> Self {
        Treat { id, x, y, kind }
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}
