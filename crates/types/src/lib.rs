//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used across the workspace. They
//! carry no game behavior, so the core engine, the terminal view and the
//! input mapping can all depend on them.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Cell Values
//!
//! A cell is a `u8` tag: `0` is empty, `1..=7` is occupied and names the
//! color class of the piece that filled it.
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, Position, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color_id(), 1);
//! assert_eq!(Position::default(), Position::new(0, 0));
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Automatic drop interval in milliseconds.
///
/// The drop counter must strictly exceed this before a drop happens.
pub const DROP_INTERVAL_MS: u64 = 1000;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Empty cell tag
pub const EMPTY: u8 = 0;

/// A cell on the board or inside a piece shape.
///
/// - `0`: empty
/// - `1..=7`: occupied, value is the color id
pub type CellValue = u8;

/// Integer grid position.
///
/// For a piece this is the board coordinate of the shape's top-left cell;
/// `y` may be negative while a piece hangs above the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The seven tetromino kinds, in catalog order.
///
/// The catalog order fixes the color id of each kind:
/// - **T**: 1
/// - **I**: 2
/// - **O**: 3
/// - **S**: 4
/// - **Z**: 5
/// - **J**: 6
/// - **L**: 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    I,
    O,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color id written into board cells by this kind (1..=7).
    pub const fn color_id(self) -> CellValue {
        match self {
            PieceKind::T => 1,
            PieceKind::I => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// Player actions.
///
/// Each action invokes exactly one player operation; key repeat is the
/// input source's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° (no wall kicks)
    Rotate,
}
