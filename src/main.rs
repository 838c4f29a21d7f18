//! blockfall terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall::term`. Gravity runs
//! off [`GravityTimer`] deadlines: the loop blocks on input until the next one is due.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;

use blockfall::config::Config;
use blockfall::core::GameSnapshot;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::timer::GravityTimer;

/// Poll timeout when no gravity ticket is armed (after game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    info!(seed = ?config.seed, gravity = ?config.gravity(), "starting blockfall");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&config, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal is in raw mode while playing, so logs only ever go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(config.log_level())
        .init();
    Ok(())
}

fn run(config: &Config, term: &mut TerminalRenderer) -> Result<()> {
    let mut board = config.board();
    let mut timer = GravityTimer::new();
    timer.arm_scheduled(&mut board, Instant::now());

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut reported_over = false;

    loop {
        board.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = timer
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = board.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = board.apply_action(action);
                        debug!(action = action.as_str(), changed, "input");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        // An action can lock a piece and level up, which schedules a new ticket.
        timer.arm_scheduled(&mut board, now);
        timer.fire_due(now, &mut board);

        if let Some(event) = board.take_last_event() {
            debug!(?event, "lock");
        }
        if board.is_over() && !reported_over {
            reported_over = true;
            info!(
                score = board.score(),
                lines = board.lines(),
                level = board.level(),
                "game over"
            );
        }
    }
}
