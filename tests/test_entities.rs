use bug_crossing::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq, so equality comparisons must work
    assert_eq!(PrizeKind::Gem, PrizeKind::Gem);
    assert_ne!(PrizeKind::Gem, PrizeKind::Heart);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Idle, GameStatus::GameOver);
    assert_ne!(Direction::Left, Direction::Right);

    let sprite = Sprite::HeartGold;
    assert_eq!(sprite.clone(), Sprite::HeartGold);
}

#[test]
fn palettes_are_disjoint_and_start_with_initial_sprite() {
    let gems = PrizeKind::Gem.palette();
    let hearts = PrizeKind::Heart.palette();
    assert_eq!(gems[0], PrizeKind::Gem.initial_sprite());
    assert_eq!(hearts[0], PrizeKind::Heart.initial_sprite());
    assert!(gems.iter().all(|g| !hearts.contains(g)));
}

#[test]
fn every_sprite_has_a_unique_name() {
    let mut names: Vec<&str> = Sprite::ALL.iter().map(|s| s.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Sprite::ALL.len());
}

#[test]
fn row_tiles_water_stone_grass() {
    assert_eq!(ROW_TILES[0], Sprite::WaterBlock);
    assert!(ROW_TILES[1..4].iter().all(|t| *t == Sprite::StoneBlock));
    assert!(ROW_TILES[4..].iter().all(|t| *t == Sprite::GrassBlock));
}

#[test]
fn new_player_stands_on_start_cell() {
    let p = Player::new();
    assert_eq!((p.col, p.row), (START_COL, START_ROW));
    assert_eq!(p.x, 202.0);
    assert_eq!(p.y, 405.0);
    assert_eq!(p.sprite, Sprite::Player);
}

#[test]
fn game_state_clone_is_independent() {
    let mut rng = StdRng::seed_from_u64(1);
    let original = GameState {
        status: GameStatus::Playing,
        time_playing: 0,
        lives: 9,
        score: 0,
        crossed: 0,
        gems_grabbed: 0,
        hearts_grabbed: 0,
        last_grab: None,
        player: Player::new(),
        enemies: Vec::new(),
        gem: Prize::new(PrizeKind::Gem, &mut rng),
        heart: Prize::new(PrizeKind::Heart, &mut rng),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.col = 0;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5.0, y: 62.0, vel: 300.0 });

    assert_eq!(original.player.col, 2);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
