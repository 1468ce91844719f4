// seed_store.rs - Seed lifecycle: generate, persist, load

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::error::{SeedError, StoreError};

/// Key the question presentation writes and the answer presentation reads.
pub const DEFAULT_SEED_KEY: &str = "randomSeed";

/// A string-to-string store scoped to one user/session.
pub trait SeedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeedStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A JSON object on disk, `{"randomSeed": "1712345678"}`.
///
/// Every call reads the file afresh so separate processes (question run,
/// later answer run) see each other's writes. A missing file is empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SeedStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_owned(), value.to_owned());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Fresh seed from the wall clock: Unix milliseconds, low 32 bits.
pub fn generate_seed() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    millis as u32
}

/// Overwrite whatever seed is stored under `key`.
pub fn persist_seed<S: SeedStore + ?Sized>(store: &mut S, key: &str, seed: u32) -> Result<(), StoreError> {
    store.set(key, &seed.to_string())?;
    debug!(key, seed, "persisted seed");
    Ok(())
}

/// Decimal string to seed. Values wider than 32 bits (raw millisecond
/// timestamps) keep their low 32 bits.
pub fn parse_seed(value: &str) -> Option<u32> {
    value.trim().parse::<u64>().ok().map(|v| v as u32)
}

/// Read the seed under `key` without touching the store.
pub fn load_seed<S: SeedStore + ?Sized>(store: &S, key: &str) -> Result<u32, SeedError> {
    let value = store
        .get(key)?
        .ok_or_else(|| SeedError::Missing { key: key.to_owned() })?;
    let seed = parse_seed(&value).ok_or_else(|| SeedError::Malformed {
        key: key.to_owned(),
        value: value.clone(),
    })?;
    debug!(key, seed, "loaded seed");
    Ok(seed)
}

/// Like `load_seed`, but any failure yields `fallback`.
pub fn load_seed_or<S: SeedStore + ?Sized>(store: &S, key: &str, fallback: u32) -> u32 {
    match load_seed(store, key) {
        Ok(seed) => seed,
        Err(e) => {
            warn!(error = %e, fallback, "using fallback seed");
            fallback
        }
    }
}
