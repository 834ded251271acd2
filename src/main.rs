use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{cursor, event, terminal, ExecutableCommand};
use log::{info, warn};
use rand::Rng;

use bug_crossing::compute::{handle_input, init_state, start_game, tick};
use bug_crossing::config::Config;
use bug_crossing::display::{self, Resources};
use bug_crossing::entities::{GameState, Sprite};
use bug_crossing::input::{map_event, Command};
use bug_crossing::GameError;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Apply one command.  Returns `true` when the player asked to quit.
fn apply(state: &mut GameState, command: Command) -> bool {
    match command {
        Command::Quit => return true,
        Command::Start if !state.is_running() => *state = start_game(state),
        Command::Start => {}
        Command::Move(direction) => *state = handle_input(state, direction),
    }
    false
}

/// Runs until the player quits.  Every frame: drain input, advance the
/// simulation by the measured wall-clock delta, draw, then sleep off the rest
/// of the frame budget.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    resources: &Resources,
    rx: &mpsc::Receiver<event::Event>,
    config: &Config,
    rng: &mut impl Rng,
) -> Result<(), GameError> {
    let frame = config.frame();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Some(command) = map_event(&ev) {
                if apply(state, command) {
                    info!("quit requested");
                    return Ok(());
                }
            }
        }

        let dt = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;
        *state = tick(state, dt, rng);

        display::render(out, state, resources)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let config = Config::parse();
    config.init_logging()?;
    info!("starting with {:?}", config);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(event::EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<event::Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!("input reader stopped: {err}");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(event::DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<event::Event>,
    config: &Config,
) -> Result<(), GameError> {
    // The loop only starts once every sprite is available.
    let resources = Resources::load(&Sprite::ALL);

    let mut rng = config.rng();
    let mut state = init_state(&mut rng);
    game_loop(out, &mut state, &resources, rx, config, &mut rng)?;

    info!(
        "exiting: score {}, crossed {}, lives {}",
        state.score, state.crossed, state.lives
    );
    Ok(())
}
