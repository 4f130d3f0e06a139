//! Terminal falling-block runner (default binary).
//!
//! Blocks spawn on a timer, drift down the screen and stack per column;
//! clicking a block flips its orientation. The loop is single-threaded:
//! render, poll input until the next tick is due, then tick the simulation
//! with the taps gathered in between.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::{SceneSnapshot, Simulator};
use tui_blockfall::input::{should_quit, InputHandler};
use tui_blockfall::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tui_blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // The world is sized from the terminal once at startup; later resizes
    // only trigger a full redraw, they don't reshape the world.
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let viewport = Viewport::new(w, h);
    let view = SceneView::default();
    let bounds = view.world_bounds(viewport);

    let mut sim = Simulator::new(bounds, clock_seed());
    let mut input_handler = InputHandler::new();

    let mut snap = SceneSnapshot::new(bounds);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        sim.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    input_handler.handle_mouse_event(mouse);
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for tap in input_handler.take_taps() {
                if let Some((wx, wy)) = view.unproject(bounds, viewport, tap) {
                    sim.rotate_at(wx, wy);
                }
            }

            sim.tick(started.elapsed().as_millis() as u64);
        }
    }
}

/// Seed interactive runs from the wall clock so every run stacks
/// differently; tests construct the simulator with fixed seeds instead.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
