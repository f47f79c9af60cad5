//! Terminal blockfall runner.
//!
//! One thread serializes the two triggers the session reacts to: key presses and the step
//! timer. Input is polled with a timeout equal to the time left until the next step.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::config::{LevelUp, Settings};
use blockfall::core::{GameSession, GameSnapshot, SimpleRng};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{with_restore, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::timer::StepTimer;

#[derive(Parser, Debug, Clone)]
#[command(name = "blockfall")]
#[command(about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Board width in cells
    #[arg(long)]
    width: Option<u8>,

    /// Board height in cells
    #[arg(long)]
    height: Option<u8>,

    /// Starting level
    #[arg(long)]
    level: Option<u32>,

    /// Step interval at level 1 (ms)
    #[arg(long)]
    base_delay: Option<u32>,

    /// Fastest step interval (ms)
    #[arg(long)]
    min_delay: Option<u32>,

    /// Keep score and board across level-ups
    #[arg(long, default_value_t = false)]
    keep_score: bool,
}

impl Cli {
    fn overrides(&self) -> Settings {
        Settings {
            seed: self.seed,
            width: self.width,
            height: self.height,
            start_level: self.level,
            base_step_delay_ms: self.base_delay,
            min_step_delay_ms: self.min_delay,
            level_up: self.keep_score.then_some(LevelUp::Accumulate),
            ..Settings::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => {
            let settings = Settings::load(path)?;
            eprintln!("[config] loaded {}", path.display());
            settings
        }
        None => Settings::default(),
    };
    let settings = file.overlay(cli.overrides());
    let seed = settings.seed.unwrap_or_else(rand::random::<u32>);
    let rules = settings.into_rules()?;
    eprintln!(
        "[config] board {}x{}, level {}, seed {}",
        rules.width, rules.height, rules.start_level, seed
    );

    let mut game =
        GameSession::with_rules(rules, SimpleRng::new(seed)).context("starting game session")?;

    let mut term = TerminalRenderer::new();
    term.enter().context("entering raw mode")?;
    let result = run(&mut term, &mut game);
    // Restore the terminal before reporting anything, including errors from `run`.
    let restored = term.exit().context("restoring terminal");
    with_restore(result, restored)?;

    eprintln!(
        "[blockfall] score {} level {} lines {} episodes {}",
        game.score(),
        game.level(),
        game.lines(),
        game.episode_id() + 1
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;
    let mut timer = StepTimer::new(now_ms(), game.step_delay_ms() as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = Duration::from_millis(timer.remaining_ms(now_ms()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // A hard drop or restart may have changed the level.
        timer.set_interval(now_ms(), game.step_delay_ms() as u64);
        if timer.fire(now_ms()) {
            game.step();
            timer.set_interval(now_ms(), game.step_delay_ms() as u64);
        }
    }
}
