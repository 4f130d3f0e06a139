//! Simulation module - per-column stacks of falling blocks.
//!
//! The simulator owns one ordered block sequence per column. Sequence order
//! is spawn order, and because blocks never reorder, never despawn, and all
//! fall at the same velocity, it is also the stacking order from the floor
//! upward. The tick advances and clamps each column in a single pass, so a
//! block's clamp always sees the post-clamp position of the block below it.

use tui_blockfall_types::{WorldBounds, COLUMNS, SPAWN_INTERVAL_MS};

use crate::block::Block;
use crate::rng::SimpleRng;

/// The falling-block simulation.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// One spawn-ordered block sequence per column.
    columns: [Vec<Block>; COLUMNS],
    /// Time of the last spawn, process-wide (not per column).
    last_spawn_ms: u64,
    bounds: WorldBounds,
    block_size: f32,
    velocity: f32,
    rng: SimpleRng,
}

impl Simulator {
    /// Create an empty simulation for the given world, with a seeded spawn
    /// column sequence.
    pub fn new(bounds: WorldBounds, seed: u32) -> Self {
        Self {
            columns: std::array::from_fn(|_| Vec::new()),
            last_spawn_ms: 0,
            block_size: bounds.block_size(),
            velocity: bounds.velocity(),
            bounds,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current RNG state (for reproducing the remaining spawn sequence).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Total number of live blocks across all columns.
    pub fn block_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Blocks in one column, bottom of the stack first.
    pub fn column(&self, index: usize) -> &[Block] {
        &self.columns[index]
    }

    /// All live blocks in column-major, spawn-order sequence.
    ///
    /// This is the same order the hit test scans, and the order handed to
    /// the renderer.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.columns.iter().flatten()
    }

    /// Advance the simulation by one frame.
    ///
    /// `now_ms` is a monotonic millisecond clock supplied by the caller. It
    /// gates spawning only; the fall advances by a fixed velocity per call.
    pub fn tick(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_spawn_ms) > SPAWN_INTERVAL_MS {
            let column = self.rng.next_range(COLUMNS as u32) as usize;
            self.spawn_into(column);
            self.last_spawn_ms = now_ms;
        }

        for column in self.columns.iter_mut() {
            let mut prev_y: Option<f32> = None;
            for block in column.iter_mut() {
                block.y += self.velocity;

                // Rest on the block below, or on the floor for the first
                // block in the stack. prev_y is already clamped from this
                // same pass.
                let max_y = match prev_y {
                    Some(prev) => prev - block.size,
                    None => self.bounds.height - block.size,
                };

                if block.y > max_y {
                    block.y = max_y;
                }

                prev_y = Some(block.y);
            }
        }
    }

    /// Spawn a block directly into `column`, bypassing the spawn timer.
    ///
    /// Returns false (and spawns nothing) if the column index is out of
    /// range. Scenario tests and benchmarks use this to build exact stacks.
    pub fn spawn_into(&mut self, column: usize) -> bool {
        let Some(lane) = self.columns.get_mut(column) else {
            return false;
        };
        lane.push(Block::spawn(column, self.block_size));
        true
    }

    /// Hit-test a world-space point and toggle the first matching block's
    /// orientation flag.
    ///
    /// Scans columns ascending and blocks in spawn order within each
    /// column, so on (rare) overlap the earliest-spawned block in the
    /// lowest column wins. Returns whether a block was hit.
    pub fn rotate_at(&mut self, x: f32, y: f32) -> bool {
        for column in self.columns.iter_mut() {
            for block in column.iter_mut() {
                if block.contains(x, y) {
                    block.toggle_rotation();
                    return true;
                }
            }
        }
        false
    }
}
