//! Block entity: one falling square, bound to a single column.

/// A falling (or settled) block.
///
/// Position is the top-left corner in y-down world units. `x` is fixed at
/// creation from the column index; only `y` changes over the block's life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Lane index, immutable after creation.
    pub column: usize,
    pub x: f32,
    pub y: f32,
    /// Edge length in world units.
    pub size: f32,
    /// Cosmetic orientation flag, flipped by taps. Does not affect the fall.
    pub rotated: bool,
}

impl Block {
    /// Create a block at the spawn position for `column`: just above the
    /// visible area, horizontally aligned to its lane.
    pub fn spawn(column: usize, size: f32) -> Self {
        Self {
            column,
            x: column as f32 * size,
            y: -size,
            size,
            rotated: false,
        }
    }

    /// Edge-inclusive bounding-box containment test, matching the original
    /// rectangle semantics.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.size && y >= self.y && y <= self.y + self.size
    }

    /// Flip the cosmetic orientation flag.
    pub fn toggle_rotation(&mut self) {
        self.rotated = !self.rotated;
    }
}
