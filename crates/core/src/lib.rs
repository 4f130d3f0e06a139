//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains all the falling-block rules and state. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Testable**: Unit tests for every rule, no terminal required
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`block`]: the block entity and its bounding-box hit test
//! - [`sim`]: per-column stacks, the per-frame tick, spawn timer, rotation
//! - [`rng`]: seedable LCG used for spawn column selection
//! - [`snapshot`]: read-only drawable state handed to the renderer
//!
//! # Rules
//!
//! - A new block spawns into a random column once per spawn interval.
//! - Every tick, each block falls by a fixed velocity and is clamped so it
//!   rests on the floor or on the block below it in the same column.
//! - Clicking a block flips its cosmetic orientation flag. Rotation has no
//!   effect on the simulation.
//! - Blocks are never removed; stacks grow for as long as the program runs.
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::Simulator;
//! use tui_blockfall_types::WorldBounds;
//!
//! let mut sim = Simulator::new(WorldBounds::new(60.0, 200.0), 12345);
//!
//! // Drive the simulation from a millisecond clock, once per frame.
//! sim.tick(16);
//! sim.tick(32);
//!
//! // Hit-test a pointer position in world coordinates.
//! let handled = sim.rotate_at(5.0, 195.0);
//! assert!(!handled); // nothing has landed there yet
//! ```
//!
//! # Timing
//!
//! [`Simulator::tick`](sim::Simulator::tick) takes the current monotonic
//! time in milliseconds and should be called once per rendered frame. The
//! fall velocity is applied per call, not per elapsed time, matching the
//! frame-rate-coupled behavior of the original toy.

pub mod block;
pub mod rng;
pub mod sim;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use rng::SimpleRng;
pub use sim::Simulator;
pub use snapshot::{BlockSnapshot, SceneSnapshot};
