//! Bug Crossing: cross the grid, dodge the bugs, grab gems and hearts.
//!
//! - `entities`: pure data (player, enemies, prizes, session state)
//! - `compute`: the simulation step, a set of pure state transitions
//! - `random`: small helpers over an injected RNG
//! - `display`: terminal renderer and glyph resources
//! - `input`: terminal events to game commands

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod random;

pub use error::GameError;
