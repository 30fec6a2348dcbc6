//! Terminal rendering for the falling-block game.
//!
//! A small game-oriented layer: the engine paints into a [`FrameBuffer`]
//! through [`BoardCanvas`], the [`ScorePanel`] collects the score lines, and
//! [`TerminalRenderer`] flushes only the cells that changed since the last
//! frame.

pub mod board_view;
pub mod fb;
pub mod renderer;
pub mod score_panel;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use board_view::{color_for, BoardCanvas, BoardLayout, BoardView, Viewport, PALETTE};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use score_panel::ScorePanel;
