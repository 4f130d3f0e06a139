//! Read-only drawable state handed from the simulation to the renderer.
//!
//! The snapshot carries positions in world units; the renderer owns the
//! projection to terminal cells. `Simulator::snapshot_into` refills a
//! caller-owned snapshot so the per-frame path stops allocating once the
//! block vector's capacity has grown past the live block count.

use tui_blockfall_types::WorldBounds;

use crate::block::Block;
use crate::sim::Simulator;

/// Drawable state of a single block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSnapshot {
    pub column: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotated: bool,
}

impl From<&Block> for BlockSnapshot {
    fn from(value: &Block) -> Self {
        Self {
            column: value.column,
            x: value.x,
            y: value.y,
            size: value.size,
            rotated: value.rotated,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub bounds: WorldBounds,
    pub block_size: f32,
    /// All live blocks, column-major in spawn order.
    pub blocks: Vec<BlockSnapshot>,
}

impl SceneSnapshot {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            block_size: bounds.block_size(),
            blocks: Vec::new(),
        }
    }
}

impl Simulator {
    /// Refill `out` with the current drawable state.
    pub fn snapshot_into(&self, out: &mut SceneSnapshot) {
        out.bounds = self.bounds();
        out.block_size = self.block_size();
        out.blocks.clear();
        out.blocks.extend(self.blocks().map(BlockSnapshot::from));
    }

    /// Allocate a fresh snapshot of the current drawable state.
    pub fn snapshot(&self) -> SceneSnapshot {
        let mut snap = SceneSnapshot::new(self.bounds());
        self.snapshot_into(&mut snap);
        snap
    }
}
