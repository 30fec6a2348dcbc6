//! Render sink seam
//!
//! The engine knows color ids, not colors. A sink receives one call per
//! occupied cell with absolute board coordinates; piece cells above the top
//! edge arrive with a negative `y` and are the sink's to clip.

use crate::board::Board;
use crate::player::Player;
use crate::types::EMPTY;

pub trait RenderSink {
    fn draw_cell(&mut self, x: i32, y: i32, color_id: u8);
}

/// Collects calls; handy for tests and snapshots.
impl RenderSink for Vec<(i32, i32, u8)> {
    fn draw_cell(&mut self, x: i32, y: i32, color_id: u8) {
        self.push((x, y, color_id));
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn draw_cell(&mut self, x: i32, y: i32, color_id: u8) {
        (**self).draw_cell(x, y, color_id)
    }
}

/// Draw the locked cells, then the active piece on top.
pub fn draw_frame(board: &Board, player: &Player, sink: &mut impl RenderSink) {
    for (y, row) in board.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v != EMPTY {
                sink.draw_cell(x as i32, y as i32, v);
            }
        }
    }
    for (x, y, v) in player.cells() {
        sink.draw_cell(x, y, v);
    }
}
