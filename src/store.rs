//! Persistence gateway: string-keyed slots holding the JSON-encoded
//! roster and fixture. The pure logic never touches storage; callers go
//! through the typed load/save helpers below.

use crate::models::{Match, Player};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Slot holding the JSON-encoded roster.
pub const PLAYERS_KEY: &str = "fifa25-players";
/// Slot holding the JSON-encoded fixture.
pub const MATCHES_KEY: &str = "fifa25-matches";

/// String key-value storage. Serializing read-modify-write sequences
/// against one store is the caller's job.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a single JSON file of `{key: value}`. The file is read
/// once at open (an unreadable or corrupt file degrades to an empty
/// store) and rewritten through a temp-file rename on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = read_slots(&path).unwrap_or_default();
        Self { path, slots }
    }

    fn flush(&self) {
        let json = match serde_json::to_string(&self.slots) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode store file: {}", e);
                return;
            }
        };
        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
            log::warn!("Failed to write {}: {}", self.path.display(), e);
        }
    }
}

fn read_slots(path: &Path) -> Option<HashMap<String, String>> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

/// Read the roster slot; absent or malformed contents read as empty.
pub fn load_players(store: &dyn KeyValueStore) -> Vec<Player> {
    load_slot(store, PLAYERS_KEY)
}

/// Read the fixture slot; absent or malformed contents read as empty.
pub fn load_matches(store: &dyn KeyValueStore) -> Vec<Match> {
    load_slot(store, MATCHES_KEY)
}

/// Overwrite the roster slot.
pub fn save_players(store: &mut dyn KeyValueStore, players: &[Player]) {
    save_slot(store, PLAYERS_KEY, players);
}

/// Overwrite the fixture slot, replacing any previous fixture.
pub fn save_matches(store: &mut dyn KeyValueStore, matches: &[Match]) {
    save_slot(store, MATCHES_KEY, matches);
}

fn load_slot<T: serde::de::DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Slot '{}' holds malformed data, treating as empty: {}", key, e);
            Vec::new()
        }
    }
}

fn save_slot<T: serde::Serialize>(store: &mut dyn KeyValueStore, key: &str, items: &[T]) {
    match serde_json::to_string(items) {
        Ok(json) => store.set(key, &json),
        Err(e) => log::error!("Failed to encode slot '{}': {}", key, e),
    }
}
