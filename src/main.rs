//! Terminal falling-block game (default binary).
//!
//! Single-threaded select-style loop: render, wait for either a key press
//! or the next gravity tick (whichever comes first), apply the resulting
//! state transition, repeat. Exactly one mutation path runs per iteration,
//! so the engine needs no locks. The session ends on game over or external
//! process termination; there is no quit key.

mod trace;

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;

use term_tetra::core::{Game, Step};
use term_tetra::input::map_key;
use term_tetra::term::{GameView, TerminalRenderer, Viewport};
use term_tetra::types::{GAME_OVER_PAUSE_MS, LINE_CLEAR_PAUSE_MS, TICK_MS};

fn main() -> Result<()> {
    trace::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(seed_from_clock());
    let view = GameView;

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let fb = view.render(&game, viewport());
        term.draw(&fb)?;

        // Wait for input, bounded by the time left until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        let mut step = Step::Blocked;
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = map_key(key) {
                        step = game.apply(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        if !settle(term, &view, &mut game, step)? {
            break;
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let step = game.tick();
            if !settle(term, &view, &mut game, step)? {
                break;
            }
        }
    }

    debug!("session over");
    let fb = view.render(&game, viewport());
    term.draw(&fb)?;
    thread::sleep(Duration::from_millis(GAME_OVER_PAUSE_MS));
    Ok(())
}

/// Resolve a step outcome: run the line-clear flash and sweep when rows
/// completed. Returns false once the session is over.
fn settle(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &mut Game,
    step: Step,
) -> Result<bool> {
    match step {
        Step::GameOver => Ok(false),
        Step::Locked { full_rows } if !full_rows.is_empty() => {
            // Show the blinking rows, hold them briefly, then sweep.
            let fb = view.render(game, viewport());
            term.draw(&fb)?;
            thread::sleep(Duration::from_millis(LINE_CLEAR_PAUSE_MS));
            Ok(game.sweep() != Step::GameOver)
        }
        _ => Ok(true),
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn seed_from_clock() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.subsec_nanos().wrapping_add(d.as_secs() as u32),
        Err(_) => 1,
    }
}
