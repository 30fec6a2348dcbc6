//! Store tests - best score persisted through the JSON file store

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use tui_blockfall::core::{
    get_shape, GameSession, KeyValueStore, SessionConfig, HIGHSCORE_KEY,
};
use tui_blockfall::store::JsonFileStore;
use tui_blockfall::types::{GameAction, PieceKind};

fn scratch_dir() -> PathBuf {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("blockfall-it-{}-{}", std::process::id(), n))
}

/// Clear two rows on a 4x6 board with two O pieces.
fn play_two_lines(store: JsonFileStore) -> JsonFileStore {
    let config = SessionConfig {
        width: 4,
        height: 6,
        ..SessionConfig::default()
    };
    let mut game = GameSession::with_pieces(config, store, (), || get_shape(PieceKind::O));
    for dir in [GameAction::MoveLeft, GameAction::MoveRight] {
        game.apply_action(dir);
        game.apply_action(dir);
        while !game.soft_drop().locked() {}
    }
    assert_eq!(game.score(), 2);
    game.store().clone()
}

#[test]
fn test_best_survives_restart() {
    let dir = scratch_dir();
    let path = dir.join("nested").join("highscore.json");

    let store = play_two_lines(JsonFileStore::open(&path).unwrap());
    assert_eq!(store.get(HIGHSCORE_KEY), Some(2));

    let reopened = JsonFileStore::open(&path).unwrap();
    let game = GameSession::new(SessionConfig::default(), reopened, ());
    assert_eq!(game.best_score(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_layout() {
    let dir = scratch_dir();
    let path = dir.join("highscore.json");
    play_two_lines(JsonFileStore::open(&path).unwrap());

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["values"]["highscore"], 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_lower_score_does_not_overwrite() {
    let dir = scratch_dir();
    let path = dir.join("highscore.json");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, r#"{ "values": { "highscore": 50 } }"#).unwrap();

    let store = play_two_lines(JsonFileStore::open(&path).unwrap());
    assert_eq!(store.get(HIGHSCORE_KEY), Some(50));
    assert_eq!(JsonFileStore::open(&path).unwrap().get(HIGHSCORE_KEY), Some(50));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_unknown_keys_are_kept() {
    let dir = scratch_dir();
    let path = dir.join("highscore.json");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, r#"{ "values": { "games": 4 } }"#).unwrap();

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(HIGHSCORE_KEY, 9);

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("games"), Some(4));
    assert_eq!(reopened.get(HIGHSCORE_KEY), Some(9));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_malformed_file_falls_back_to_empty() {
    let dir = scratch_dir();
    let path = dir.join("highscore.json");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, "not json").unwrap();

    assert!(JsonFileStore::open(&path).is_err());
    let store = JsonFileStore::empty(&path);
    assert_eq!(store.get(HIGHSCORE_KEY), None);
    assert_eq!(store.path(), path.as_path());

    let _ = std::fs::remove_dir_all(&dir);
}
