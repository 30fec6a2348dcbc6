//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]. There is no
//! repeat or debounce logic here: each key press (or terminal auto-repeat)
//! yields at most one action.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
