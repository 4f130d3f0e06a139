//! Terminal falling-block toy (workspace facade crate).
//!
//! This package keeps a single `tui_blockfall::{core,term,input,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
