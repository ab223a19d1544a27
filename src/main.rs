//! Blockfall terminal runner (default binary).
//!
//! Single-threaded loop: block on input until the next gravity deadline,
//! apply whatever arrived, fire due ticks, then redraw.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use blockfall::core::{GameState, TickTimer};
use blockfall::input::{should_quit, Dispatch, InputAdapter};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;
use blockfall::{logging, Config};

/// Poll interval while no tick is pending (paused or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(path.as_deref())?;
    logging::init(&config)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(seed, tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let mut timer = TickTimer::new(config.tick_period());
    let view = GameView::new(config.cell_width, 1);
    let adapter = InputAdapter::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        timer.sync(game.phase(), Instant::now());

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = timer.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    info!(score = game.score(), lines = game.lines(), "quit");
                    return Ok(());
                }
                Event::Key(key) => {
                    if let Dispatch::Applied {
                        action: GameAction::Restart,
                        ..
                    } = adapter.dispatch(key, &mut game)
                    {
                        timer.reset(Instant::now());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Input may have paused or ended the game; re-sync before firing.
        if timer.due(game.phase(), Instant::now()) {
            game.tick();
        }

        if let Some(lock) = game.take_last_lock() {
            debug!(
                kind = lock.kind.as_str(),
                lines = lock.lines_cleared,
                points = lock.score_delta,
                game_over = lock.game_over,
                "piece locked"
            );
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
