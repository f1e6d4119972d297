//! Store module - external key-value persistence
//!
//! The engine treats persistence as an opaque `get(key)`/`set(key, value)`
//! store. It only ever touches [`HIGH_SCORE_KEY`]; the same store can carry
//! presentation-layer settings under other keys. Store failures are part of
//! the contract: the engine logs and continues, it never blocks a phase
//! transition on a write.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Key under which the engine persists the high score.
pub const HIGH_SCORE_KEY: &str = "high_score";

/// String-keyed persistence seam between the engine and the outside world.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

/// In-memory store with a shared handle: clones see the same data, so a
/// test (or host) can hand one clone to the engine and inspect the other.
/// Every successful `set` is also recorded in a write log.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    /// Insert a value directly, bypassing the write log.
    pub fn seed_entry(&self, key: &str, value: &str) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.entries.insert(key.to_string(), value.to_string());
    }

    /// Current value for a key, if any.
    pub fn value(&self, key: &str) -> Option<String> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.entries.get(key).cloned()
    }

    /// All writes performed through [`KvStore::set`], in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.writes.clone()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// File-backed store holding a single JSON object of string entries.
///
/// Reads happen once at `open`; every `set` rewrites the file. Suited to the
/// handful of tiny values this game persists (high score, user settings).
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`. A missing file is an empty store; a present
    /// but unparsable file is an error (better to fail loudly at startup
    /// than to silently wipe existing data on the next write).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("malformed store file {}", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("reading store file {}", path.display()))
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing store file {}", self.path.display()))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
