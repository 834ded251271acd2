use bug_crossing::compute::*;
use bug_crossing::entities::*;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Up),
        Just(Direction::Right),
        Just(Direction::Down),
    ]
}

fn running_state(seed: u64) -> GameState {
    start_game(&init_state(&mut StdRng::seed_from_u64(seed)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn input_never_leaves_the_grid(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 0..200),
    ) {
        let mut s = running_state(seed);
        for m in moves {
            s = handle_input(&s, m);
            prop_assert!((0..GRID_COLS).contains(&s.player.col));
            prop_assert!((0..GRID_ROWS).contains(&s.player.row));
        }
    }

    #[test]
    fn crossing_resets_and_scores_once(col in 0..GRID_COLS, score in 0u32..1000, crossed in 0u32..1000) {
        let mut s = running_state(0);
        s.player.col = col;
        s.player.row = 0;
        s.score = score;
        s.crossed = crossed;
        let s2 = update_player(&s);
        prop_assert_eq!((s2.player.col, s2.player.row), (START_COL, START_ROW));
        prop_assert_eq!(s2.score, score + 1);
        prop_assert_eq!(s2.crossed, crossed + 1);
    }

    #[test]
    fn lives_floor_at_zero(lives in 0u32..5, deaths in 0usize..12) {
        let mut s = running_state(0);
        s.lives = lives;
        for _ in 0..deaths {
            s = die(&s);
        }
        prop_assert_eq!(s.lives, lives.saturating_sub(deaths as u32));
    }

    #[test]
    fn prize_never_repeats_previous_sprite(seed in any::<u64>(), heart in any::<bool>(), n in 1usize..50) {
        let mut rng = StdRng::seed_from_u64(seed);
        let kind = if heart { PrizeKind::Heart } else { PrizeKind::Gem };
        let mut p = Prize::new(kind, &mut rng);
        for _ in 0..n {
            let next = spawn_prize(&p, &mut rng);
            prop_assert_ne!(next.sprite, p.sprite);
            prop_assert!(kind.palette().contains(&next.sprite));
            p = next;
        }
    }

    #[test]
    fn enemy_count_follows_ramp(seed in any::<u64>(), dt in 0.0f32..0.1) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = running_state(seed);
        for _ in 0..(RAMP_TICKS + 10) {
            s = tick(&s, dt, &mut rng);
            let expected = START_ENEMIES + (s.time_playing / RAMP_TICKS) as usize;
            prop_assert_eq!(s.enemies.len(), expected.min(MAX_ENEMIES));
        }
    }
}
