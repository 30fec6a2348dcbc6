//! Falling-block puzzle game for the terminal (workspace facade crate).
//!
//! Re-exports the member crates under short module names and adds the
//! host-side pieces the binary needs: environment configuration and the
//! file logger.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_store as store;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod config;
pub mod logging;

pub use config::AppConfig;
