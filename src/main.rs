//! Terminal runner (default binary).
//!
//! Wires the engine to crossterm input and the framebuffer renderer. The
//! engine never sees time; this loop drives gravity and held-key repeats at
//! a fixed tick.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::clock::GravityClock;
use blockfall::core::{EngineConfig, GameEngine, GameSnapshot};
use blockfall::input::{handle_key_event, is_held_action, should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{
    GameAction, GameStatus, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_LEVEL, TICK_MS,
};

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH, value_parser = clap::value_parser!(u16).range(4..=64))]
    width: u16,
    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT, value_parser = clap::value_parser!(u16).range(4..=64))]
    height: u16,
    /// Gravity level; higher levels fall faster.
    #[arg(short, long, default_value_t = DEFAULT_LEVEL, value_parser = clap::value_parser!(u32).range(1..))]
    level: u32,
    /// Seed for piece and color selection. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u32>,
    /// Write logs to this file (filtered by RUST_LOG, default info).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = EngineConfig::new(args.width as usize, args.height as usize).with_level(args.level);
    info!(
        "starting {}x{} game at level {} with seed {}",
        config.width, config.height, config.level, seed
    );
    let mut engine = GameEngine::with_seed(config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting with score {}", engine.score());
    result
}

/// Log to a file only; stderr belongs to the game screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, engine: &mut GameEngine) -> Result<()> {
    let view = GameView::default();
    let mut input_handler = InputHandler::new();
    let mut gravity = GravityClock::for_level(engine.level());
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        match handle_key_event(key) {
                            Some(action) if is_held_action(action) => {
                                if let Some(first) = input_handler.handle_key_press(key.code) {
                                    engine.apply_action(first);
                                }
                            }
                            Some(action) => {
                                engine.apply_action(action);
                                if action == GameAction::Reset {
                                    input_handler.reset();
                                    gravity.reset();
                                }
                            }
                            None => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Only keeps the key alive; DAS/ARR produces the repeats.
                        input_handler.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input_handler.update(TICK_MS) {
                engine.apply_action(action);
            }

            if engine.status() == GameStatus::Running {
                for _ in 0..gravity.advance(TICK_MS) {
                    engine.drop_one_step();
                }
            }
        }
    }
}
