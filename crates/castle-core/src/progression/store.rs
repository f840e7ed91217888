// progression/store.rs
//
// Durable storage for the progress aggregate. Loading never fails: any
// missing, unreadable, or invalid payload falls back to defaults. Saving
// is best-effort with no retry — the in-memory state stays authoritative
// for the rest of the session.

use std::fs;
use std::path::PathBuf;

use super::state::ProgressState;

/// Save-slot identifier; also the default file stem for file storage.
pub const STORAGE_KEY: &str = "bblearn_v1";

/// A single-slot string store, the shape of a browser localStorage entry.
/// Embedders implement this over whatever durable medium they have.
pub trait ProgressStorage {
    /// Read the stored payload, or `None` if absent/unreadable.
    fn read(&self) -> Option<String>;
    /// Write the payload; returns whether the write succeeded.
    fn write(&mut self, payload: &str) -> bool;
}

/// In-memory storage for tests and ephemeral embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.slot.clone()
    }

    fn write(&mut self, payload: &str) -> bool {
        self.slot = Some(payload.to_string());
        true
    }
}

/// File-backed storage for native embedders.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store the save under `dir` using the default slot name.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressStorage for FileStorage {
    fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, payload: &str) -> bool {
        fs::write(&self.path, payload).is_ok()
    }
}

/// Load/save gateway for [`ProgressState`].
pub struct ProgressStore<S: ProgressStorage> {
    storage: S,
}

impl<S: ProgressStorage> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the persisted state. Never fails: a missing or corrupt payload
    /// yields the default state, and structural invariants are restored
    /// on whatever was read.
    pub fn load(&self) -> ProgressState {
        let mut state = match self.storage.read() {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(err) => {
                    log::warn!("corrupt save discarded, starting fresh: {err}");
                    ProgressState::default()
                }
            },
            None => ProgressState::default(),
        };
        state.sanitize();
        state
    }

    /// Persist the full state. Failures are swallowed (warn-logged); the
    /// caller's in-memory state remains authoritative either way.
    pub fn save(&mut self, state: &ProgressState) {
        let payload = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("save serialization failed: {err}");
                return;
            }
        };
        if !self.storage.write(&payload) {
            log::warn!("save write failed; continuing with in-memory state");
        }
    }

    /// Hand back the underlying storage (e.g., to rebuild a store across
    /// a simulated restart in tests).
    pub fn into_inner(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage whose writes always fail.
    struct BrokenStorage;

    impl ProgressStorage for BrokenStorage {
        fn read(&self) -> Option<String> {
            None
        }
        fn write(&mut self, _payload: &str) -> bool {
            false
        }
    }

    #[test]
    fn load_missing_returns_defaults() {
        let store = ProgressStore::new(MemoryStorage::new());
        let state = store.load();
        assert!(!state.has_save());
        assert!(state.is_room_unlocked("ballroom"));
    }

    #[test]
    fn load_corrupt_returns_defaults() {
        let mut storage = MemoryStorage::new();
        storage.write("{not json!");
        let store = ProgressStore::new(storage);
        let state = store.load();
        assert!(!state.module1.key_earned);
        assert_eq!(state.module2.rooms_unlocked, vec!["ballroom"]);
    }

    #[test]
    fn load_partial_schema_backfills() {
        let mut storage = MemoryStorage::new();
        storage.write(r#"{"module1":{"words_mastered":["bell"],"key_earned":true}}"#);
        let store = ProgressStore::new(storage);
        let state = store.load();
        assert!(state.is_word_mastered("bell"));
        assert!(state.module1.key_earned);
        // Missing module2/settings come back as defaults.
        assert!(state.is_room_unlocked("ballroom"));
        assert_eq!(state.settings.bgm_vol, 0.5);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = ProgressStore::new(MemoryStorage::new());
        let mut state = store.load();
        state.module1.words_mastered.push("rose".to_string());
        state.module1.key_earned = true;
        store.save(&state);

        let reopened = ProgressStore::new(store.into_inner());
        let reloaded = reopened.load();
        assert!(reloaded.is_word_mastered("rose"));
        assert!(reloaded.module1.key_earned);
    }

    #[test]
    fn failed_save_is_swallowed() {
        let mut store = ProgressStore::new(BrokenStorage);
        let state = ProgressState::default();
        // Must not panic or surface an error.
        store.save(&state);
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = std::env::temp_dir().join("castle-core-store-test");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("slot.json");
        let _ = fs::remove_file(&path);

        let mut store = ProgressStore::new(FileStorage::at_path(&path));
        let mut state = store.load();
        state.module1.words_mastered.push("beast".to_string());
        store.save(&state);

        let reloaded = ProgressStore::new(FileStorage::at_path(&path)).load();
        assert!(reloaded.is_word_mastered("beast"));
        let _ = fs::remove_file(&path);
    }
}
