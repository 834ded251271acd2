//! Glyph cache standing in for image assets.

use std::collections::HashMap;

use crossterm::style::Color;
use log::debug;

use crate::entities::Sprite;
use crate::error::GameError;

/// How one sprite looks on a terminal.  Tiles repeat `text` across the cell;
/// everything else is drawn once, centred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub text: &'static str,
    pub fg: Color,
    pub bg: Option<Color>,
}

fn glyph_for(sprite: Sprite) -> Glyph {
    let (text, fg, bg) = match sprite {
        Sprite::WaterBlock => ("~", Color::Cyan, Some(Color::DarkBlue)),
        Sprite::StoneBlock => (" ", Color::Grey, Some(Color::DarkGrey)),
        Sprite::GrassBlock => ("\"", Color::Green, Some(Color::DarkGreen)),
        Sprite::EnemyRight => ("=[oo]>", Color::Red, None),
        Sprite::EnemyLeft => ("<[oo]=", Color::Red, None),
        Sprite::Player => ("(^_^)", Color::White, None),
        Sprite::GemBlue => ("<◆>", Color::Blue, None),
        Sprite::GemGreen => ("<◆>", Color::Green, None),
        Sprite::GemOrange => ("<◆>", Color::DarkYellow, None),
        Sprite::HeartRed => ("<♥>", Color::Red, None),
        Sprite::HeartGold => ("<♥>", Color::Yellow, None),
        Sprite::HeartPurple => ("<♥>", Color::Magenta, None),
    };
    Glyph { text, fg, bg }
}

#[derive(Debug, Default)]
pub struct Resources {
    glyphs: HashMap<Sprite, Glyph>,
}

impl Resources {
    /// Load every sprite in `sprites`.  The game loop starts once this
    /// returns.
    pub fn load(sprites: &[Sprite]) -> Self {
        let glyphs: HashMap<Sprite, Glyph> =
            sprites.iter().map(|&s| (s, glyph_for(s))).collect();
        debug!("loaded {} sprites", glyphs.len());
        Resources { glyphs }
    }

    pub fn get(&self, sprite: Sprite) -> Result<&Glyph, GameError> {
        self.glyphs
            .get(&sprite)
            .ok_or(GameError::MissingSprite(sprite.name()))
    }

    pub fn is_loaded(&self, sprite: Sprite) -> bool {
        self.glyphs.contains_key(&sprite)
    }
}
