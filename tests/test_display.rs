use bug_crossing::compute::{init_state, start_game};
use bug_crossing::display::{hud_fields, panel_title, render, to_cell, Resources, BOARD_H, CELL_H, CELL_W};
use bug_crossing::entities::*;
use bug_crossing::GameError;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn idle_state() -> GameState {
    init_state(&mut StdRng::seed_from_u64(3))
}

fn render_to_string(state: &GameState, resources: &Resources) -> String {
    let mut out: Vec<u8> = Vec::new();
    render(&mut out, state, resources).expect("render into a buffer");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn idle_frame_shows_hud_and_invitation() {
    let resources = Resources::load(&Sprite::ALL);
    let frame = render_to_string(&idle_state(), &resources);
    for label in ["Lives: 9", "Score: 0", "Across: 0", "Gems: 0", "Hearts: 0"] {
        assert!(frame.contains(label), "missing {label}");
    }
    assert!(frame.contains("PLAY THE GAME!"));
    assert!(!frame.contains("GAME OVER"));
}

#[test]
fn game_over_frame_says_so() {
    let mut s = idle_state();
    s.status = GameStatus::GameOver;
    s.lives = 0;
    assert_eq!(panel_title(&s), "GAME OVER. PLAY AGAIN!");
    let frame = render_to_string(&s, &Resources::load(&Sprite::ALL));
    assert!(frame.contains("GAME OVER. PLAY AGAIN!"));
}

#[test]
fn running_frame_draws_entities_without_panel() {
    let s = start_game(&idle_state());
    let frame = render_to_string(&s, &Resources::load(&Sprite::ALL));
    assert!(frame.contains("(^_^)"));
    assert!(frame.contains("<◆>"));
    assert!(frame.contains("<♥>"));
    assert!(!frame.contains("PLAY THE GAME!"));
}

#[test]
fn hud_tracks_counters() {
    let mut s = idle_state();
    s.lives = 4;
    s.score = 17;
    s.crossed = 6;
    s.gems_grabbed = 11;
    s.hearts_grabbed = 2;
    assert_eq!(
        hud_fields(&s),
        [
            "Lives: 4".to_string(),
            "Score: 17".to_string(),
            "Across: 6".to_string(),
            "Gems: 11".to_string(),
            "Hearts: 2".to_string(),
        ]
    );
}

#[test]
fn missing_sprite_is_reported() {
    let resources = Resources::load(&[Sprite::WaterBlock]);
    let mut out: Vec<u8> = Vec::new();
    match render(&mut out, &idle_state(), &resources) {
        Err(GameError::MissingSprite(name)) => assert_eq!(name, "stone-block"),
        other => panic!("expected a missing sprite, got {other:?}"),
    }
    assert!(resources.is_loaded(Sprite::WaterBlock));
    assert!(!resources.is_loaded(Sprite::Player));
}

#[test]
fn sprites_land_in_the_middle_of_their_tile() {
    // Player on the start cell and on the water row.
    assert_eq!(to_cell(202.0, 405.0), (2 * CELL_W as i32, 5 * CELL_H as i32 + 1));
    assert_eq!(to_cell(0.0, -10.0).1, 1);
    // Enemy lanes sit on grid rows 1-3.
    for lane in 0..3 {
        let y = 62.0 + lane as f32 * TILE_H;
        assert_eq!(to_cell(0.0, y).1, (lane + 1) * CELL_H as i32 + 1);
    }
    // Prizes on rows 1-3.
    for row in 1..4 {
        let y = row as f32 * TILE_H - PRIZE_Y_OFFSET;
        assert_eq!(to_cell(0.0, y).1, row * CELL_H as i32 + 1);
    }
    assert!(to_cell(0.0, 405.0).1 < BOARD_H as i32);
}
