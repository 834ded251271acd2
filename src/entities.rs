//! All game entity types: pure data, no logic.
//!
//! Positions come in two flavours: grid cells (`col`, `row`) for things that
//! snap to tiles, and pixel coordinates (`x`, `y`) used for drawing and for
//! the bounding-box proximity tests.

use rand::Rng;

use crate::random::random_int;

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Tile width in pixel units.
pub const TILE_W: f32 = 101.0;
/// Tile height in pixel units.
pub const TILE_H: f32 = 83.0;

pub const GRID_COLS: i32 = 5;
pub const GRID_ROWS: i32 = 6;

pub const START_COL: i32 = 2;
pub const START_ROW: i32 = 5;

/// Lives at the start of every session.
pub const START_LIVES: u32 = 9;

/// Enemies created at process start.
pub const START_ENEMIES: usize = 5;

/// Vertical drawing offsets so sprites sit inside their tile.
pub const PLAYER_Y_OFFSET: f32 = 10.0;
pub const PRIZE_Y_OFFSET: f32 = 8.0;

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Every named image the game draws.  The presentation layer decides what a
/// sprite looks like; the simulation only picks which one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    WaterBlock,
    StoneBlock,
    GrassBlock,
    /// Bug heading right.
    EnemyRight,
    /// Bug heading left.
    EnemyLeft,
    Player,
    GemBlue,
    GemGreen,
    GemOrange,
    HeartRed,
    HeartGold,
    HeartPurple,
}

impl Sprite {
    pub const ALL: [Sprite; 12] = [
        Sprite::StoneBlock,
        Sprite::WaterBlock,
        Sprite::GrassBlock,
        Sprite::EnemyRight,
        Sprite::EnemyLeft,
        Sprite::Player,
        Sprite::GemBlue,
        Sprite::GemGreen,
        Sprite::GemOrange,
        Sprite::HeartRed,
        Sprite::HeartGold,
        Sprite::HeartPurple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sprite::WaterBlock => "water-block",
            Sprite::StoneBlock => "stone-block",
            Sprite::GrassBlock => "grass-block",
            Sprite::EnemyRight => "enemy-bug",
            Sprite::EnemyLeft => "enemy-bug2",
            Sprite::Player => "char-horn-girl",
            Sprite::GemBlue => "gem-blue",
            Sprite::GemGreen => "gem-green",
            Sprite::GemOrange => "gem-orange",
            Sprite::HeartRed => "heart-red",
            Sprite::HeartGold => "heart-gold",
            Sprite::HeartPurple => "heart-purple",
        }
    }
}

/// Tile drawn for each grid row, top to bottom.
pub const ROW_TILES: [Sprite; GRID_ROWS as usize] = [
    Sprite::WaterBlock,
    Sprite::StoneBlock,
    Sprite::StoneBlock,
    Sprite::StoneBlock,
    Sprite::GrassBlock,
    Sprite::GrassBlock,
];

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// `Idle` before the first start, `GameOver` once lives run out.  Only
/// `Playing` counts as running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrizeKind {
    /// +1 score.
    Gem,
    /// +1 life.
    Heart,
}

impl PrizeKind {
    /// The three sprites a prize of this kind cycles through.
    pub fn palette(self) -> [Sprite; 3] {
        match self {
            PrizeKind::Gem => [Sprite::GemBlue, Sprite::GemGreen, Sprite::GemOrange],
            PrizeKind::Heart => [Sprite::HeartRed, Sprite::HeartGold, Sprite::HeartPurple],
        }
    }

    pub fn initial_sprite(self) -> Sprite {
        self.palette()[0]
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub col: i32,
    pub row: i32,
    /// Pixel position as of the last update; lags `col`/`row` after a reset.
    pub x: f32,
    pub y: f32,
    pub sprite: Sprite,
}

impl Player {
    pub fn new() -> Self {
        Player {
            col: START_COL,
            row: START_ROW,
            x: START_COL as f32 * TILE_W,
            y: START_ROW as f32 * TILE_H - PLAYER_Y_OFFSET,
            sprite: Sprite::Player,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    /// Lane baseline; fixed until the next respawn.
    pub y: f32,
    /// Pixels per second; the sign is the travel direction.
    pub vel: f32,
}

// ── Prizes ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Prize {
    pub kind: PrizeKind,
    pub col: i32,
    pub row: i32,
    pub x: f32,
    pub y: f32,
    pub sprite: Sprite,
}

impl Prize {
    /// Initial sprite for `kind` at a random cell on the stone rows.
    pub fn new(kind: PrizeKind, rng: &mut impl Rng) -> Self {
        let col = random_int(rng, 0, GRID_COLS);
        let row = random_int(rng, 1, 4);
        Prize {
            kind,
            col,
            row,
            x: col as f32 * TILE_W,
            y: row as f32 * TILE_H - PRIZE_Y_OFFSET,
            sprite: kind.initial_sprite(),
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub status: GameStatus,
    /// Ticks since the session started; drives the enemy ramp.
    pub time_playing: u64,
    pub lives: u32,
    pub score: u32,
    /// Times the player reached the water.
    pub crossed: u32,
    pub gems_grabbed: u32,
    pub hearts_grabbed: u32,
    pub last_grab: Option<PrizeKind>,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub gem: Prize,
    pub heart: Prize,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
