//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current state
//! (and, where needed, an RNG handle) and returns a brand-new value.  Side
//! effects are limited to the injected RNG and log output.

use log::{debug, info};
use rand::Rng;

use crate::entities::{
    Direction, Enemy, GameState, GameStatus, Player, Prize, PrizeKind, Sprite, GRID_COLS,
    GRID_ROWS, PLAYER_Y_OFFSET, PRIZE_Y_OFFSET, START_COL, START_ENEMIES, START_LIVES, START_ROW,
    TILE_H, TILE_W,
};
use crate::random::{is_even, random_choice, random_int, random_unit};

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Enemies live while `x` stays inside this span; outside it they respawn.
const ENEMY_MIN_X: f32 = -200.0;
const ENEMY_MAX_X: f32 = 806.0;

/// Baseline of lane 0.
const LANE_TOP: f32 = 62.0;
const LANES: i32 = 3;

const ENEMY_BASE_SPEED: f32 = 300.0;

/// Bounding-box half extents shared by every proximity test.
const HIT_DX: f32 = 80.0;
const HIT_DY: f32 = 60.0;

/// One extra enemy every `RAMP_TICKS`; below it the population is held at
/// `START_ENEMIES`.
pub const RAMP_TICKS: u64 = 3000;
pub const MAX_ENEMIES: usize = 20;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the process-start state: idle, five enemies, one gem, one heart.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let enemies = (0..START_ENEMIES).map(|_| spawn_enemy(rng)).collect();
    GameState {
        status: GameStatus::Idle,
        time_playing: 0,
        lives: START_LIVES,
        score: 0,
        crossed: 0,
        gems_grabbed: 0,
        hearts_grabbed: 0,
        last_grab: None,
        player: Player::new(),
        enemies,
        gem: Prize::new(PrizeKind::Gem, rng),
        heart: Prize::new(PrizeKind::Heart, rng),
    }
}

/// Start (or restart) a session.  No-op while one is already running.
/// Entities keep their positions; only the session counters reset.
pub fn start_game(state: &GameState) -> GameState {
    if state.is_running() {
        return state.clone();
    }
    info!("session started (previous score {})", state.score);
    GameState {
        status: GameStatus::Playing,
        time_playing: 0,
        lives: START_LIVES,
        score: 0,
        crossed: 0,
        gems_grabbed: 0,
        hearts_grabbed: 0,
        last_grab: None,
        ..state.clone()
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Fresh enemy at the edge of a random lane.  Even lanes run left to right,
/// odd lanes right to left.
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    let lane = random_int(rng, 0, LANES);
    let (x, direction) = if is_even(lane) {
        (ENEMY_MIN_X, 1.0)
    } else {
        (ENEMY_MAX_X, -1.0)
    };
    Enemy {
        x,
        y: LANE_TOP + lane as f32 * TILE_H,
        vel: (random_unit(rng) + 0.5) * ENEMY_BASE_SPEED * direction,
    }
}

/// Advance by `dt` seconds, or respawn if the enemy has left the board.
pub fn update_enemy(enemy: &Enemy, dt: f32, rng: &mut impl Rng) -> Enemy {
    if enemy.x >= ENEMY_MIN_X && enemy.x <= ENEMY_MAX_X {
        Enemy {
            x: enemy.x + enemy.vel * dt,
            ..enemy.clone()
        }
    } else {
        spawn_enemy(rng)
    }
}

pub fn turn_around(enemy: &Enemy) -> Enemy {
    Enemy {
        vel: -enemy.vel,
        ..enemy.clone()
    }
}

pub fn enemy_sprite(enemy: &Enemy) -> Sprite {
    if enemy.vel < 0.0 {
        Sprite::EnemyLeft
    } else {
        Sprite::EnemyRight
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Sync the pixel position, then score a crossing if the player stands on
/// the water row.  The pixel position keeps the water row for this tick.
pub fn update_player(state: &GameState) -> GameState {
    let p = &state.player;
    let mut player = Player {
        x: p.col as f32 * TILE_W,
        y: p.row as f32 * TILE_H - PLAYER_Y_OFFSET,
        ..p.clone()
    };
    if player.row != 0 {
        return GameState {
            player,
            ..state.clone()
        };
    }

    player.col = START_COL;
    player.row = START_ROW;
    debug!("crossed ({} so far)", state.crossed + 1);
    GameState {
        player,
        score: state.score + 1,
        crossed: state.crossed + 1,
        ..state.clone()
    }
}

/// Move one cell if the destination stays on the grid.  Ignored unless a
/// session is running.
pub fn handle_input(state: &GameState, direction: Direction) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let p = &state.player;
    let (col, row) = match direction {
        Direction::Left if p.col > 0 => (p.col - 1, p.row),
        Direction::Up if p.row > 0 => (p.col, p.row - 1),
        Direction::Right if p.col < GRID_COLS - 1 => (p.col + 1, p.row),
        Direction::Down if p.row < GRID_ROWS - 1 => (p.col, p.row + 1),
        _ => return state.clone(),
    };
    GameState {
        player: Player { col, row, ..p.clone() },
        ..state.clone()
    }
}

/// Back to the start cell and one life fewer (never below zero).
pub fn die(state: &GameState) -> GameState {
    debug!("player hit with {} lives left", state.lives);
    GameState {
        player: Player {
            col: START_COL,
            row: START_ROW,
            ..state.player.clone()
        },
        lives: state.lives.saturating_sub(1),
        ..state.clone()
    }
}

/// Apply the effect of picking up `kind` and remember it for the overlap
/// tie-break.  A heart cannot bring back a player with no lives left.
pub fn grab(state: &GameState, kind: PrizeKind) -> GameState {
    let mut next = GameState {
        last_grab: Some(kind),
        ..state.clone()
    };
    match kind {
        PrizeKind::Gem => {
            next.score += 1;
            next.gems_grabbed += 1;
        }
        PrizeKind::Heart => {
            if next.lives > 0 {
                next.lives += 1;
            }
            next.hearts_grabbed += 1;
        }
    }
    next
}

// ── Prizes ────────────────────────────────────────────────────────────────────

pub fn update_prize(prize: &Prize) -> Prize {
    Prize {
        x: prize.col as f32 * TILE_W,
        y: prize.row as f32 * TILE_H - PRIZE_Y_OFFSET,
        ..prize.clone()
    }
}

/// New sprite (never the current one) and a new random cell on the stone
/// rows.  The pixel position follows immediately.
pub fn spawn_prize(prize: &Prize, rng: &mut impl Rng) -> Prize {
    let choices: Vec<Sprite> = prize
        .kind
        .palette()
        .into_iter()
        .filter(|s| *s != prize.sprite)
        .collect();
    let sprite = random_choice(rng, &choices)
        .copied()
        .unwrap_or(prize.sprite);
    let col = random_int(rng, 0, GRID_COLS);
    let row = random_int(rng, 1, 4);
    update_prize(&Prize {
        col,
        row,
        sprite,
        ..prize.clone()
    })
}

// ── Per-frame phases ─────────────────────────────────────────────────────────

/// Axis-aligned proximity test used for collisions and pickups.
pub fn overlaps(ax: f32, ay: f32, bx: f32, by: f32) -> bool {
    (ax - bx).abs() < HIT_DX && (ay - by).abs() < HIT_DY
}

/// Move everything, bump the tick counter, then adjust the enemy population.
pub fn update_entities(state: &GameState, dt: f32, rng: &mut impl Rng) -> GameState {
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| update_enemy(e, dt, rng))
        .collect();

    let next = update_player(&GameState {
        enemies,
        ..state.clone()
    });
    let time_playing = next.time_playing + 1;

    // Population changes run only after every enemy has been updated.
    let mut enemies = next.enemies;
    if time_playing % RAMP_TICKS == 0 && enemies.len() < MAX_ENEMIES {
        enemies.push(spawn_enemy(rng));
        debug!("enemy added, {} on the board", enemies.len());
    }
    if time_playing < RAMP_TICKS && enemies.len() > START_ENEMIES {
        enemies.pop();
    }

    GameState {
        time_playing,
        enemies,
        gem: update_prize(&next.gem),
        heart: update_prize(&next.heart),
        ..next
    }
}

/// Every enemy touching the player turns around and costs a life.  Several
/// overlapping enemies cost several lives in the same tick, since the
/// player's pixel position is not refreshed until the next update.
pub fn check_collisions(state: &GameState) -> GameState {
    let (px, py) = (state.player.x, state.player.y);
    let mut next = state.clone();
    for i in 0..next.enemies.len() {
        let enemy = next.enemies[i].clone();
        if overlaps(enemy.x, enemy.y, px, py) {
            next.enemies[i] = turn_around(&enemy);
            next = die(&next);
        }
    }
    next
}

/// Pick up whatever the player is standing on, then make sure the gem and
/// the heart do not sit on top of each other.  Both prizes can be taken in
/// one tick; the overlap check sees their respawned positions.
pub fn check_grabables(state: &GameState, rng: &mut impl Rng) -> GameState {
    let (px, py) = (state.player.x, state.player.y);
    let mut next = state.clone();

    if overlaps(next.gem.x, next.gem.y, px, py) {
        next = grab(&next, PrizeKind::Gem);
        next.gem = spawn_prize(&next.gem, rng);
    }
    if overlaps(next.heart.x, next.heart.y, px, py) {
        next = grab(&next, PrizeKind::Heart);
        next.heart = spawn_prize(&next.heart, rng);
    }

    if overlaps(next.gem.x, next.gem.y, next.heart.x, next.heart.y) {
        match next.last_grab {
            Some(PrizeKind::Gem) => next.heart = spawn_prize(&next.heart, rng),
            Some(PrizeKind::Heart) | None => next.gem = spawn_prize(&next.gem, rng),
        }
    }
    next
}

/// End the session once lives run out.
pub fn check_lives(state: &GameState) -> GameState {
    if state.lives == 0 && state.is_running() {
        info!(
            "game over: score {}, crossed {}, gems {}, hearts {}",
            state.score, state.crossed, state.gems_grabbed, state.hearts_grabbed
        );
        return GameState {
            status: GameStatus::GameOver,
            ..state.clone()
        };
    }
    state.clone()
}

// ── Per-frame tick (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by `dt` seconds.  All randomness comes through
/// `rng` so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, dt: f32, rng: &mut impl Rng) -> GameState {
    let state = update_entities(state, dt, rng);
    let state = check_collisions(&state);
    let state = check_grabables(&state, rng);
    check_lives(&state)
}
