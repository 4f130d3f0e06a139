//! SceneView: maps a core scene snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! It owns both directions of the projection: world-space blocks become
//! cell rectangles for drawing, and pointer taps in terminal cells become
//! world-space points for the core's hit test.

use tui_blockfall_core::{BlockSnapshot, SceneSnapshot};
use tui_blockfall_types::{Tap, WorldBounds, COLUMNS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// One color per lane. The original tints every block with the same
/// texture; a terminal gets a lane palette instead.
const COLUMN_COLORS: [Rgb; COLUMNS] = [
    Rgb::new(97, 175, 239),
    Rgb::new(152, 195, 121),
    Rgb::new(229, 192, 123),
    Rgb::new(198, 120, 221),
    Rgb::new(86, 182, 194),
    Rgb::new(224, 108, 117),
];

/// The original clears the whole screen to solid red; a dark red play area
/// keeps that look without drowning out the block glyphs.
const PLAY_AREA_BG: Rgb = Rgb::new(72, 14, 14);

/// Projects world-space blocks into terminal cells.
pub struct SceneView {
    /// Terminal columns per world unit.
    cell_w: u16,
    /// Terminal rows per world unit.
    cell_h: u16,
}

/// Resolved placement of the play area inside the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    start_x: u16,
    start_y: u16,
    px_w: u16,
    px_h: u16,
}

impl Default for SceneView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl SceneView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// World size that fills this viewport, leaving room for the frame
    /// border and one status line.
    pub fn world_bounds(&self, viewport: Viewport) -> WorldBounds {
        let px_w = viewport.width.saturating_sub(2);
        let px_h = viewport.height.saturating_sub(3);
        WorldBounds::new((px_w / self.cell_w) as f32, (px_h / self.cell_h) as f32)
    }

    fn frame(&self, bounds: WorldBounds, viewport: Viewport) -> Frame {
        let px_w = (bounds.width * self.cell_w as f32).round() as u16;
        let px_h = (bounds.height * self.cell_h as f32).round() as u16;

        // Center the framed play area, keeping the bottom row for status.
        let start_x = viewport.width.saturating_sub(px_w + 2) / 2;
        let start_y = viewport
            .height
            .saturating_sub(1)
            .saturating_sub(px_h + 2)
            / 2;

        Frame {
            start_x,
            start_y,
            px_w,
            px_h,
        }
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized and
    /// cleared here.
    pub fn render_into(&self, snap: &SceneSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(snap.bounds, viewport);

        let play_area = CellStyle {
            fg: Rgb::new(140, 60, 60),
            bg: PLAY_AREA_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(
            frame.start_x + 1,
            frame.start_y + 1,
            frame.px_w,
            frame.px_h,
            ' ',
            play_area,
        );
        self.draw_border(fb, frame, border);

        for block in &snap.blocks {
            self.draw_block(fb, frame, block);
        }

        self.draw_status(fb, viewport, snap.blocks.len());
    }

    /// Inverse projection: a tapped terminal cell becomes a world point.
    ///
    /// Uses the cell's center. Returns None for taps on the border, the
    /// status line, or anywhere outside the play area.
    pub fn unproject(&self, bounds: WorldBounds, viewport: Viewport, tap: Tap) -> Option<(f32, f32)> {
        let frame = self.frame(bounds, viewport);
        let inner_x = frame.start_x + 1;
        let inner_y = frame.start_y + 1;

        if tap.x < inner_x || tap.y < inner_y {
            return None;
        }
        let dx = tap.x - inner_x;
        let dy = tap.y - inner_y;
        if dx >= frame.px_w || dy >= frame.px_h {
            return None;
        }

        let wx = (dx as f32 + 0.5) / self.cell_w as f32;
        let wy = (dy as f32 + 0.5) / self.cell_h as f32;
        Some((wx, wy))
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, block: &BlockSnapshot) {
        let style = CellStyle {
            fg: COLUMN_COLORS[block.column % COLUMNS],
            bg: PLAY_AREA_BG,
            bold: false,
            dim: false,
        };
        // Rotation is cosmetic: a rotated block renders with a lighter fill.
        let ch = if block.rotated { '▒' } else { '█' };

        let x0 = (block.x * self.cell_w as f32).round() as i32;
        let y0 = (block.y * self.cell_h as f32).round() as i32;
        let w = (block.size * self.cell_w as f32).round() as i32;
        let h = (block.size * self.cell_h as f32).round() as i32;

        for dy in 0..h {
            let py = y0 + dy;
            // Rows above the top edge are off-screen while a block is still
            // entering the world.
            if py < 0 || py >= frame.px_h as i32 {
                continue;
            }
            for dx in 0..w {
                let px = x0 + dx;
                if px < 0 || px >= frame.px_w as i32 {
                    continue;
                }
                fb.put_char(
                    frame.start_x + 1 + px as u16,
                    frame.start_y + 1 + py as u16,
                    ch,
                    style,
                );
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let right = frame.start_x + frame.px_w + 1;
        let bottom = frame.start_y + frame.px_h + 1;

        for x in (frame.start_x + 1)..right {
            fb.put_char(x, frame.start_y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in (frame.start_y + 1)..bottom {
            fb.put_char(frame.start_x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        fb.put_char(frame.start_x, frame.start_y, '┌', style);
        fb.put_char(right, frame.start_y, '┐', style);
        fb.put_char(frame.start_x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, viewport: Viewport, block_count: usize) {
        let line = format!(" blocks: {}   click: rotate   q: quit", block_count);
        let style = CellStyle {
            fg: Rgb::new(150, 150, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        fb.put_str(0, viewport.height.saturating_sub(1), &line, style);
    }
}
