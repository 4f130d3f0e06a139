//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into domain input ([`crate::types::Tap`])
//! and buffers pointer taps between simulation ticks, so input handling
//! stays synchronous with the frame loop.

pub mod handler;
pub mod map;

pub use tui_blockfall_types as types;

pub use handler::{InputHandler, MAX_PENDING_TAPS};
pub use map::{should_quit, tap_from_mouse};
