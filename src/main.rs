//! Terminal Blockfall runner (default binary).
//!
//! Polls crossterm input until the next frame, feeds the session a frame
//! timestamp, and draws the snapshot through the diffing framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use blockfall::core::{GameSession, GameSnapshot};
use blockfall::input::{action_for_phase, should_quit};
use blockfall::logging::{self, LogSettings};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

const SEED_ENV: &str = "BLOCKFALL_SEED";

fn main() -> Result<()> {
    // Configuration errors surface before the terminal is taken over.
    let settings = LogSettings::from_env()?;
    logging::init(&settings)?;
    let seed = seed_from_env()?;
    info!("starting with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_env() -> Result<u32> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid {} value {:?}", SEED_ENV, raw)),
        Err(_) => Ok(clock_seed()),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut session = GameSession::new(seed);
    let view = GameView::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut next_frame = clock + frame_duration;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested (score {})", session.score());
                        return Ok(());
                    }
                    if let Some(action) = action_for_phase(key, session.phase()) {
                        let changed = session.apply_action(action);
                        debug!("action {} changed={}", action.as_str(), changed);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let now = Instant::now();
        if now >= next_frame {
            next_frame = now + frame_duration;
            session.frame(now.duration_since(clock).as_millis() as u64);
        }

        if let Some(ev) = session.take_last_event() {
            info!(
                "score {} (+{} for {} lines)",
                ev.score, ev.line_clear_score, ev.lines_cleared
            );
        }
    }
}
