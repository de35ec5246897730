//! Terminal runner (default binary).
//!
//! Owns everything the simulator deliberately does not: the keyboard, the
//! screen, and the clock. Gravity is driven here by comparing a monotonic
//! `last_fall` instant against the simulator's current fall interval.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{action_for_key, should_quit};
use blockfall::term::{Frame, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(wall_clock_seed());
    game.start();

    let view = GameView::default();
    let mut frame = Frame::new(0, 0);
    let mut snapshot = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut last_fall = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut frame);
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        game.apply_action(action);
                        // A manual drop or a fresh game restarts the gravity clock.
                        if matches!(action, GameAction::SoftDrop | GameAction::Restart) {
                            last_fall = Instant::now();
                        }
                    }
                }
            }
        }

        // Gravity.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let fall_due = last_fall.elapsed() >= Duration::from_millis(game.fall_interval_ms() as u64);
            if !game.game_over() && fall_due {
                game.fall();
                last_fall = Instant::now();
            }
        }
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
