//! Pointer input handler for terminal environments.
//!
//! Mouse events can arrive faster than the frame loop drains them. Taps are
//! buffered in a fixed-capacity queue with no per-event allocation and
//! handed to the simulation once per tick, which keeps the single-writer
//! model: the frame loop is the only caller that mutates the simulation.

use arrayvec::ArrayVec;
use crossterm::event::MouseEvent;

use crate::map::tap_from_mouse;
use crate::types::Tap;

/// Taps held between two ticks. Anything beyond this within one frame is
/// dropped.
pub const MAX_PENDING_TAPS: usize = 16;

/// Buffers pointer taps between simulation ticks.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: ArrayVec<Tap, MAX_PENDING_TAPS>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mouse event. Returns true if it was queued as a tap.
    pub fn handle_mouse_event(&mut self, ev: MouseEvent) -> bool {
        match tap_from_mouse(ev) {
            Some(tap) => self.push(tap),
            None => false,
        }
    }

    /// Queue a tap directly. Returns false when the queue is full.
    pub fn push(&mut self, tap: Tap) -> bool {
        self.pending.try_push(tap).is_ok()
    }

    /// Number of taps waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drain all taps queued since the last call, in arrival order.
    pub fn take_taps(&mut self) -> ArrayVec<Tap, MAX_PENDING_TAPS> {
        std::mem::take(&mut self.pending)
    }
}
