//! Persisted session state: the auth token and the cached subscription tier.
//!
//! Storage is a pluggable key-value interface so callers choose where the
//! session lives — in memory, in a JSON file surviving restarts, or in a
//! store of their own. Access is last-write-wins; storage failures are
//! logged and never surface on the request path.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Error, Result};

/// Storage key for the auth token.
const TOKEN_KEY: &str = "mg_token";

/// Storage key for the cached subscription tier.
const TIER_KEY: &str = "mg_tier";

/// Subscription tier as last reported by the server.
///
/// The cached value is opportunistic, never authoritative: a 403 from a
/// gated endpoint always wins over whatever is cached here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tier {
    /// Free tier.
    #[default]
    Free,
    /// Premium tier.
    Premium,
}

impl Tier {
    /// Parse a wire or stored value.
    ///
    /// Anything other than the two known strings normalizes to `Free`.
    pub fn from_wire(value: &str) -> Self {
        if value == "premium" {
            Tier::Premium
        } else {
            Tier::Free
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pluggable persisted key-value storage.
///
/// Implementations must be safe to share across tasks. Writes are
/// fire-and-forget: an implementation that can fail should log and drop
/// the error rather than propagate it.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, overwriting unconditionally.
    fn set(&self, key: &str, value: &str);
    /// Remove a value if present.
    fn remove(&self, key: &str);
}

/// In-memory store.
///
/// The default store, and the one tests inject.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

/// JSON-file-backed store.
///
/// The whole map lives in a single JSON object. It is read once at open
/// and written through on every mutation, which fits the single-process,
/// last-write-wins access pattern this crate assumes.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing or unreadable file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed session file");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Open the store at the platform default location
    /// (`<data dir>/mindgarden/session.json`).
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("no platform data directory".to_string()))?
            .join("mindgarden");
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::Config(format!("cannot create {}: {}", dir.display(), e)))?;
        Ok(Self::open(dir.join("session.json")))
    }

    /// Path the store persists to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(text) => {
                if let Err(e) = std::fs::write(&self.path, text) {
                    tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session file");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session file");
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock();
        entries.remove(key);
        self.flush(&entries);
    }
}

/// Typed view over the store: the auth token and the cached tier.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    /// Create a session over an injected store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Create a session backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Current auth token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Overwrite the auth token.
    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    /// Drop the token and the cached tier together.
    ///
    /// The tier is meaningless without a session, so the two always clear
    /// as a unit.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(TIER_KEY);
    }

    /// Last-known tier; `Free` when nothing (or something unrecognized)
    /// is stored.
    pub fn tier(&self) -> Tier {
        self.store
            .get(TIER_KEY)
            .map(|v| Tier::from_wire(&v))
            .unwrap_or_default()
    }

    /// Cache the tier reported by the server.
    pub fn set_tier(&self, tier: Tier) {
        self.store.set(TIER_KEY, tier.as_str());
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token().map(|_| "<set>"))
            .field("tier", &self.tier())
            .finish()
    }
}
