//! Runtime configuration from environment variables.
//!
//! Every setting has a default; values that fail to parse fall back to it.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::core::SessionConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS};

/// Smallest accepted board side; anything smaller cannot hold the I piece
/// in both orientations.
pub const MIN_BOARD_SIDE: usize = 4;

const HIGHSCORE_FILE: &str = "highscore.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub highscore_path: PathBuf,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub seed: u32,
    pub board_width: usize,
    pub board_height: usize,
    pub drop_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(HIGHSCORE_FILE),
            log_path: None,
            log_level: LevelFilter::Info,
            seed: 1,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_HIGHSCORE_PATH`: store file (default
    ///   `$HOME/.tui-blockfall/highscore.json`, or `highscore.json` without
    ///   `HOME`)
    /// - `TETRIS_LOG_PATH`, `TETRIS_LOG_LEVEL`
    /// - `TETRIS_SEED` (default: derived from the clock)
    /// - `TETRIS_BOARD_WIDTH`, `TETRIS_BOARD_HEIGHT`
    /// - `TETRIS_DROP_INTERVAL_MS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let highscore_path = var("TETRIS_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .or_else(|| {
                var("HOME").map(|home| {
                    PathBuf::from(home)
                        .join(".tui-blockfall")
                        .join(HIGHSCORE_FILE)
                })
            })
            .unwrap_or(defaults.highscore_path);

        let log_path = var("TETRIS_LOG_PATH").map(PathBuf::from);

        let log_level = var("TETRIS_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level);

        let seed = var("TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let side = |key: &str, default: usize| {
            var(key)
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|&n| n >= MIN_BOARD_SIDE)
                .unwrap_or(default)
        };

        let drop_interval_ms = var("TETRIS_DROP_INTERVAL_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.drop_interval_ms);

        Self {
            highscore_path,
            log_path,
            log_level,
            seed,
            board_width: side("TETRIS_BOARD_WIDTH", defaults.board_width),
            board_height: side("TETRIS_BOARD_HEIGHT", defaults.board_height),
            drop_interval_ms,
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            width: self.board_width,
            height: self.board_height,
            drop_interval_ms: self.drop_interval_ms,
            seed: self.seed,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_from(&[("TETRIS_SEED", "5")]);
        assert_eq!(config.highscore_path, PathBuf::from("highscore.json"));
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.seed, 5);
        assert_eq!((config.board_width, config.board_height), (10, 20));
        assert_eq!(config.drop_interval_ms, 1000);
    }

    #[test]
    fn highscore_defaults_under_home() {
        let config = config_from(&[("HOME", "/home/player")]);
        assert_eq!(
            config.highscore_path,
            PathBuf::from("/home/player/.tui-blockfall/highscore.json")
        );
    }

    #[test]
    fn explicit_values_win() {
        let config = config_from(&[
            ("HOME", "/home/player"),
            ("TETRIS_HIGHSCORE_PATH", "/tmp/best.json"),
            ("TETRIS_LOG_PATH", "/tmp/game.log"),
            ("TETRIS_LOG_LEVEL", "debug"),
            ("TETRIS_BOARD_WIDTH", "12"),
            ("TETRIS_BOARD_HEIGHT", "24"),
            ("TETRIS_DROP_INTERVAL_MS", "500"),
        ]);
        assert_eq!(config.highscore_path, PathBuf::from("/tmp/best.json"));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/game.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);

        let session = config.session_config();
        assert_eq!((session.width, session.height), (12, 24));
        assert_eq!(session.drop_interval_ms, 500);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("TETRIS_BOARD_WIDTH", "3"),
            ("TETRIS_BOARD_HEIGHT", "tall"),
            ("TETRIS_DROP_INTERVAL_MS", "0"),
            ("TETRIS_LOG_LEVEL", "loud"),
            ("TETRIS_LOG_PATH", "   "),
        ]);
        assert_eq!((config.board_width, config.board_height), (10, 20));
        assert_eq!(config.drop_interval_ms, 1000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.log_path, None);
    }
}
