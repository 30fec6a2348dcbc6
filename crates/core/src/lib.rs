//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and has no UI, terminal or file I/O.
//! The outside world is reached only through small traits:
//!
//! - [`RenderSink`]: receives one `draw_cell(x, y, color_id)` per occupied
//!   cell
//! - [`ScoreDisplay`]: receives the `Score: N` / `Best: M` lines
//! - [`KeyValueStore`]: holds the best score under `"highscore"`
//! - [`PieceSource`]: supplies new falling pieces
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision, merge and line clearing
//! - [`piece`]: the seven catalog shapes and the rotation transform
//! - [`rng`]: seedable LCG and piece sources
//! - [`player`]: active piece movement, locking and spawning
//! - [`score`]: best-score bookkeeping and the store/display traits
//! - [`render`]: the render sink and frame drawing
//! - [`session`]: [`GameSession`], the owned bundle the host drives
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random from the catalog
//! - Rotation has no wall kicks; a blocked rotation is simply refused
//! - A piece that cannot fall further locks, full rows clear, and each
//!   cleared row is worth one point
//! - A piece that collides on spawn wipes the board and the score; play
//!   continues
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameSession, MemoryStore, SessionConfig};
//! use tui_blockfall_core::types::GameAction;
//!
//! let mut game = GameSession::new(SessionConfig::default(), MemoryStore::new(), ());
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // One frame after more than a second has passed drops the piece a row.
//! let mut cells: Vec<(i32, i32, u8)> = Vec::new();
//! assert!(game.update(1001, &mut cells).is_some());
//! assert_eq!(game.drop_counter_ms(), 0);
//! assert!(!cells.is_empty());
//! ```

pub mod board;
pub mod piece;
pub mod player;
pub mod render;
pub mod rng;
pub mod score;
pub mod session;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::{get_shape, random_piece, Shape};
pub use player::{DropOutcome, Player};
pub use render::{draw_frame, RenderSink};
pub use rng::{PieceSource, RandomPieces, SimpleRng};
pub use score::{KeyValueStore, MemoryStore, ScoreDisplay, HIGHSCORE_KEY};
pub use session::{GameSession, SessionConfig};
