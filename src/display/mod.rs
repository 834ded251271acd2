//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! pixel-space state into terminal cells.

pub mod resources;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

pub use resources::{Glyph, Resources};

use crate::compute::enemy_sprite;
use crate::entities::{
    GameState, Prize, GRID_COLS, GRID_ROWS, ROW_TILES, START_LIVES, TILE_H, TILE_W,
};
use crate::error::GameError;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Terminal columns per tile.
pub const CELL_W: u16 = 12;
/// Terminal rows per tile.
pub const CELL_H: u16 = 3;

pub const BOARD_W: u16 = CELL_W * GRID_COLS as u16;
pub const BOARD_H: u16 = CELL_H * GRID_ROWS as u16;

const HUD_ROW: u16 = BOARD_H;
const HINT_ROW: u16 = BOARD_H + 1;

/// Pixel drop applied before mapping to a terminal row, so every sprite
/// lands on the middle line of its tile.
const SPRITE_DROP: f32 = 55.0;

const C_HUD: Color = Color::DarkBlue;
const C_HINT: Color = Color::DarkGrey;
const C_PANEL_BORDER: Color = Color::Blue;
const C_PANEL_TITLE: Color = Color::DarkRed;
const C_PANEL_TEXT: Color = Color::Black;

/// Terminal cell for a pixel position: the column of the sprite's left
/// edge (may fall off-board) and its row.
pub fn to_cell(x: f32, y: f32) -> (i32, i32) {
    let col = (x * CELL_W as f32 / TILE_W).floor() as i32;
    let row = ((y + SPRITE_DROP) * CELL_H as f32 / TILE_H).floor() as i32;
    (col, row)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    resources: &Resources,
) -> Result<(), GameError> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_tiles(out, resources)?;
    draw_hud(out, state)?;
    draw_controls_hint(out)?;

    if state.is_running() {
        draw_entities(out, state, resources)?;
    } else {
        draw_panel(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HINT_ROW + 1))?;
    out.flush()?;
    Ok(())
}

// ── Board ─────────────────────────────────────────────────────────────────────

fn draw_tiles<W: Write>(out: &mut W, resources: &Resources) -> Result<(), GameError> {
    for (grid_row, tile) in ROW_TILES.iter().enumerate() {
        let glyph = resources.get(*tile)?;
        let line = glyph.text.repeat(BOARD_W as usize / glyph.text.chars().count().max(1));
        out.queue(style::SetForegroundColor(glyph.fg))?;
        if let Some(bg) = glyph.bg {
            out.queue(style::SetBackgroundColor(bg))?;
        }
        for r in 0..CELL_H {
            out.queue(cursor::MoveTo(0, grid_row as u16 * CELL_H + r))?;
            out.queue(Print(&line))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Background of the tile under terminal row `row`.
fn background_at(row: i32, resources: &Resources) -> Option<Color> {
    let grid_row = usize::try_from(row / CELL_H as i32).ok()?;
    let tile = ROW_TILES.get(grid_row)?;
    resources.get(*tile).ok().and_then(|g| g.bg)
}

/// Print `glyph` centred in the tile-wide box starting at `col`, dropping
/// any characters that fall outside the board.
fn draw_sprite<W: Write>(
    out: &mut W,
    glyph: &Glyph,
    col: i32,
    row: i32,
    resources: &Resources,
) -> Result<(), GameError> {
    if row < 0 || row >= BOARD_H as i32 {
        return Ok(());
    }
    let width = glyph.text.chars().count() as i32;
    let start = col + (CELL_W as i32 - width) / 2;
    let visible: String = glyph
        .text
        .chars()
        .enumerate()
        .filter(|(i, _)| {
            let c = start + *i as i32;
            c >= 0 && c < BOARD_W as i32
        })
        .map(|(_, ch)| ch)
        .collect();
    if visible.is_empty() {
        return Ok(());
    }

    out.queue(cursor::MoveTo(start.max(0) as u16, row as u16))?;
    out.queue(style::SetForegroundColor(glyph.fg))?;
    if let Some(bg) = glyph.bg.or_else(|| background_at(row, resources)) {
        out.queue(style::SetBackgroundColor(bg))?;
    }
    out.queue(Print(visible))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entities<W: Write>(
    out: &mut W,
    state: &GameState,
    resources: &Resources,
) -> Result<(), GameError> {
    draw_prize(out, &state.gem, resources)?;
    draw_prize(out, &state.heart, resources)?;

    for enemy in &state.enemies {
        let glyph = resources.get(enemy_sprite(enemy))?;
        let (col, row) = to_cell(enemy.x, enemy.y);
        draw_sprite(out, glyph, col, row, resources)?;
    }

    let p = &state.player;
    let (col, row) = to_cell(p.x, p.y);
    draw_sprite(out, resources.get(p.sprite)?, col, row, resources)
}

fn draw_prize<W: Write>(out: &mut W, prize: &Prize, resources: &Resources) -> Result<(), GameError> {
    let (col, row) = to_cell(prize.x, prize.y);
    draw_sprite(out, resources.get(prize.sprite)?, col, row, resources)
}

// ── HUD (below the board) ─────────────────────────────────────────────────────

pub fn hud_fields(state: &GameState) -> [String; 5] {
    [
        format!("Lives: {}", state.lives),
        format!("Score: {}", state.score),
        format!("Across: {}", state.crossed),
        format!("Gems: {}", state.gems_grabbed),
        format!("Hearts: {}", state.hearts_grabbed),
    ]
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> Result<(), GameError> {
    out.queue(style::SetForegroundColor(C_HUD))?;
    for (i, field) in hud_fields(state).iter().enumerate() {
        out.queue(cursor::MoveTo(1 + i as u16 * CELL_W, HUD_ROW))?;
        out.queue(Print(field))?;
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W) -> Result<(), GameError> {
    out.queue(cursor::MoveTo(1, HINT_ROW))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows / WASD : Move   ENTER : Start   Q : Quit"))?;
    Ok(())
}

// ── Idle / game-over panel ────────────────────────────────────────────────────

/// Headline for the panel shown while no session is running.
pub fn panel_title(state: &GameState) -> &'static str {
    if state.lives == 0 {
        "GAME OVER. PLAY AGAIN!"
    } else {
        "PLAY THE GAME!"
    }
}

fn draw_panel<W: Write>(out: &mut W, state: &GameState) -> Result<(), GameError> {
    let lives_line = format!("{} lives. Grab a heart, gain 1 life.", START_LIVES);
    let body: [&str; 5] = [
        "The game is simple. You start with",
        &lives_line,
        "Grab a gem or cross to the water,",
        "gain 1 point. Use arrow keys to move.",
        "Press ENTER or click to start.",
    ];

    let inner = body.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let left = (BOARD_W as usize).saturating_sub(inner + 2) as u16 / 2;
    let top = CELL_H + 1;

    out.queue(style::SetBackgroundColor(Color::White))?;
    out.queue(style::SetForegroundColor(C_PANEL_BORDER))?;
    out.queue(cursor::MoveTo(left, top))?;
    out.queue(Print(format!("╔{}╗", "═".repeat(inner))))?;

    let title = panel_title(state);
    let mut lines: Vec<(&str, Color)> = vec![(title, C_PANEL_TITLE), ("", C_PANEL_TEXT)];
    lines.extend(body.iter().map(|l| (*l, C_PANEL_TEXT)));

    for (i, (text, color)) in lines.iter().enumerate() {
        let row = top + 1 + i as u16;
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(style::SetForegroundColor(C_PANEL_BORDER))?;
        out.queue(Print("║"))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!(" {:<width$} ", text, width = inner - 2)))?;
        out.queue(style::SetForegroundColor(C_PANEL_BORDER))?;
        out.queue(Print("║"))?;
    }

    out.queue(cursor::MoveTo(left, top + 1 + lines.len() as u16))?;
    out.queue(Print(format!("╚{}╝", "═".repeat(inner))))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

