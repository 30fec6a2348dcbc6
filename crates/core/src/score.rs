//! Score persistence and display seams
//!
//! The best score lives in an external key-value store under
//! [`HIGHSCORE_KEY`]. Stores are best-effort: a missing value reads as 0 and
//! writes never fail from the engine's point of view.

use std::collections::HashMap;

/// Key under which the best score is stored
pub const HIGHSCORE_KEY: &str = "highscore";

/// Integer key-value storage that outlives a game session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<u32>;
    fn set(&mut self, key: &str, value: u32);
}

/// Receives the formatted score lines whenever they are republished.
pub trait ScoreDisplay {
    fn show_score(&mut self, score: &str, best: &str);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a best score
    pub fn with_highscore(best: u32) -> Self {
        let mut store = Self::new();
        store.set(HIGHSCORE_KEY, best);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<u32> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u32) {
        (**self).set(key, value)
    }
}

/// Discards everything; for headless sessions.
impl ScoreDisplay for () {
    fn show_score(&mut self, _score: &str, _best: &str) {}
}

impl<D: ScoreDisplay + ?Sized> ScoreDisplay for &mut D {
    fn show_score(&mut self, score: &str, best: &str) {
        (**self).show_score(score, best)
    }
}

/// Raise the stored best to `score` if it is higher, and return the best.
pub fn record_best(store: &mut impl KeyValueStore, score: u32) -> u32 {
    let best = store.get(HIGHSCORE_KEY).unwrap_or(0);
    if best < score {
        store.set(HIGHSCORE_KEY, score);
        return score;
    }
    best
}

pub fn format_score(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn format_best(best: u32) -> String {
    format!("Best: {}", best)
}
