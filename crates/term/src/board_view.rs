//! BoardView: lays out the playfield and paints game cells into a
//! framebuffer.
//!
//! This module is pure (no I/O). The engine draws through [`BoardCanvas`],
//! which implements [`RenderSink`] and maps color ids through [`PALETTE`].

use crate::core::RenderSink;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::score_panel::ScorePanel;

/// Color table indexed by cell color id. Index 0 (empty) is the well
/// background.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(30, 30, 40),
    Rgb::new(220, 60, 60),   // red
    Rgb::new(70, 110, 230),  // blue
    Rgb::new(90, 200, 100),  // green
    Rgb::new(240, 220, 80),  // yellow
    Rgb::new(170, 90, 210),  // purple
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(80, 220, 220),  // cyan
];

const WELL_BG: Rgb = PALETTE[0];
const PANEL_MIN_W: u16 = 12;

/// Color for a cell id; None for empty or unknown ids.
pub fn color_for(id: u8) -> Option<Rgb> {
    match id {
        1..=7 => Some(PALETTE[id as usize]),
        _ => None,
    }
}

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

/// Where the board frame sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub cols: u16,
    pub rows: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Terminal position of board cell (x, y), or None when clipped.
    pub fn cell_origin(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return None;
        }
        Some((
            self.frame_x + 1 + x as u16 * self.cell_w,
            self.frame_y + 1 + y as u16 * self.cell_h,
        ))
    }
}

/// Terminal renderer for the playfield and its side panel.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Center a `cols x rows` board in the viewport, leaving room for the
    /// panel on the right when it fits.
    pub fn layout(&self, viewport: Viewport, cols: usize, rows: usize) -> BoardLayout {
        let cols = cols.min(u16::MAX as usize) as u16;
        let rows = rows.min(u16::MAX as usize) as u16;
        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(self.cell_h).saturating_add(2);

        let total_w = frame_w.saturating_add(2 + PANEL_MIN_W);
        let used_w = if total_w <= viewport.width {
            total_w
        } else {
            frame_w
        };

        BoardLayout {
            frame_x: viewport.width.saturating_sub(used_w) / 2,
            frame_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
            cols,
            rows,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Clear the framebuffer, draw the well and border, and hand back a
    /// canvas for the game cells.
    pub fn begin_frame<'a>(
        &self,
        fb: &'a mut FrameBuffer,
        viewport: Viewport,
        layout: BoardLayout,
    ) -> BoardCanvas<'a> {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let well = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);
        for y in 0..layout.rows as i32 {
            for x in 0..layout.cols as i32 {
                if let Some((px, py)) = layout.cell_origin(x, y) {
                    fb.fill_rect(px, py, layout.cell_w, layout.cell_h, ' ', well);
                    fb.set(px, py, well.into_cell('·'));
                }
            }
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, &layout, border);

        BoardCanvas { fb, layout }
    }

    /// Draw the score lines beside the board, or under it when the
    /// viewport is too narrow.
    pub fn draw_panel(&self, fb: &mut FrameBuffer, layout: &BoardLayout, panel: &ScorePanel) {
        let label = CellStyle::default().bold();
        let right_x = layout.frame_x + layout.frame_w + 2;

        let (x, y) = if right_x.saturating_add(PANEL_MIN_W) <= fb.width() {
            (right_x, layout.frame_y + 1)
        } else {
            (layout.frame_x, layout.frame_y + layout.frame_h)
        };
        fb.put_str(x, y, panel.score_text(), label);
        fb.put_str(x, y.saturating_add(1), panel.best_text(), label);
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
    if w < 2 || h < 2 {
        return;
    }
    fb.set(x, y, style.into_cell('┌'));
    fb.set(x + w - 1, y, style.into_cell('┐'));
    fb.set(x, y + h - 1, style.into_cell('└'));
    fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.into_cell('─'));
        fb.set(x + dx, y + h - 1, style.into_cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.into_cell('│'));
        fb.set(x + w - 1, y + dy, style.into_cell('│'));
    }
}

/// Render sink painting board cells as filled blocks.
pub struct BoardCanvas<'a> {
    fb: &'a mut FrameBuffer,
    layout: BoardLayout,
}

impl BoardCanvas<'_> {
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }
}

impl RenderSink for BoardCanvas<'_> {
    fn draw_cell(&mut self, x: i32, y: i32, color_id: u8) {
        let (Some((px, py)), Some(fg)) = (self.layout.cell_origin(x, y), color_for(color_id)) else {
            return;
        };
        let style = CellStyle::new(fg, WELL_BG);
        let l = self.layout;
        self.fb.fill_rect(px, py, l.cell_w, l.cell_h, '█', style);
    }
}
