//! Terminal Blockfall runner (default binary).
//!
//! Drives the core at a fixed frame rate: render, poll input until the frame
//! deadline, then feed the wall clock to the gravity tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameConfig, GameSnapshot, GameState, LockEvent, RandomPieces};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// How long a line clear or level-up stays on screen.
const FLASH_MS: u64 = 1000;

fn main() -> Result<()> {
    let mut game_state =
        GameState::with_source(GameConfig::default(), RandomPieces::from_entropy())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut flash: Option<(LockEvent, u64)> = None;

    loop {
        let frame_start = Instant::now();
        let now_ms = start.elapsed().as_millis() as u64;

        if let Some(event) = game_state.take_last_event() {
            if event.lines_cleared > 0 || event.level_up {
                flash = Some((event, now_ms + FLASH_MS));
            }
        }
        if flash.is_some_and(|(_, until)| now_ms >= until) || game_state.game_over() {
            flash = None;
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        if let Some((event, _)) = flash.as_ref() {
            view.draw_lock_event(&snap, event, viewport, &mut fb);
        }
        term.draw(&fb)?;

        // Input until the frame deadline.
        while let Some(timeout) = frame.checked_sub(frame_start.elapsed()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        game_state.tick(start.elapsed().as_millis() as u64);
    }
}
