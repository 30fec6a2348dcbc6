//! JSON file store for the best score.
//!
//! Implements [`KeyValueStore`] on top of a small JSON document:
//!
//! ```json
//! { "values": { "highscore": 42 } }
//! ```
//!
//! Reads happen once at [`JsonFileStore::open`]. Every `set` rewrites the
//! file; a failed write is logged and otherwise ignored so gameplay never
//! stalls on the disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tui_blockfall_core::KeyValueStore;

pub use tui_blockfall_core as core;

/// On-disk document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    values: BTreeMap<String, u32>,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    doc: StoreDocument,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or malformed file is
    /// an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let doc = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("store: malformed {}", path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => StoreDocument::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("store: read {} failed", path.display()))
            }
        };
        Ok(Self { path, doc })
    }

    /// Empty store bound to `path`; the file is only touched on `set`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            doc: StoreDocument::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document, creating the parent directory if needed.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("store: create {} failed", dir.display()))?;
        }
        let text = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, text)
            .with_context(|| format!("store: write {} failed", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.doc.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.doc.values.insert(key.to_string(), value);
        if let Err(e) = self.save() {
            log::warn!("{:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tui_blockfall_core::HIGHSCORE_KEY;

    fn scratch_path(name: &str) -> PathBuf {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir()
            .join(format!("blockfall-store-{}-{}", std::process::id(), n))
            .join(name)
    }

    #[test]
    fn missing_file_is_empty() {
        let store = JsonFileStore::open(scratch_path("none.json")).unwrap();
        assert_eq!(store.get(HIGHSCORE_KEY), None);
    }

    #[test]
    fn set_persists_and_reopens() {
        let path = scratch_path("best.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set(HIGHSCORE_KEY, 17);
        assert!(path.exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(HIGHSCORE_KEY), Some(17));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_path("bad.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("malformed"));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn document_without_values_is_empty() {
        let doc: StoreDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.values.is_empty());
    }
}
