//! Namespaced key-value persistence.
//!
//! The core only ever stores two values: the selected zodiac sign and the
//! dream diary. Both go through [`Storage`], which prefixes keys with the
//! application namespace and (de)serializes values as JSON. Backends only
//! move strings around.
//!
//! Write failures never abort a reading. Callers receive them inside a
//! [`Persisted`] alongside the value that is still valid in memory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{DfError, DfResult};

/// Key of the last selected zodiac sign.
pub const SELECTED_ZODIAC_KEY: &str = "selectedZodiac";
/// Key of the serialized diary.
pub const DREAM_DIARY_KEY: &str = "dreamDiary";

/// A string-to-string store.
pub trait KeyValueStore: std::fmt::Debug {
    /// Read a value; `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> DfResult<Option<String>>;
    /// Write a value, replacing any previous one.
    fn set_item(&mut self, key: &str, value: &str) -> DfResult<()>;
    /// Delete a value; absent keys are not an error.
    fn remove_item(&mut self, key: &str) -> DfResult<()>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    fail_writes: bool,
    fail_reads: bool,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// A store that can neither be read nor written.
    pub fn unreadable() -> Self {
        Self {
            fail_writes: true,
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Seed a raw value, bypassing the failure switch.
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    fn check_writable(&self) -> DfResult<()> {
        if self.fail_writes {
            return Err(DfError::Storage("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> DfResult<Option<String>> {
        if self.fail_reads {
            return Err(DfError::Storage("store is unreadable".to_string()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> DfResult<()> {
        self.check_writable()?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> DfResult<()> {
        self.check_writable()?;
        self.items.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory.
///
/// Writes go to a `.tmp` sibling first and are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir`, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> DfResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened file store");
        Ok(Self { dir })
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> DfResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(DfError::Storage(format!("invalid key {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> DfResult<Option<String>> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> DfResult<()> {
        let path = self.path(key)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "wrote value");
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> DfResult<()> {
        let path = self.path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// A value plus the persistence failure that accompanied it, if any.
#[derive(Debug)]
pub struct Persisted<T> {
    /// The in-memory result, valid whether or not the write succeeded.
    pub value: T,
    /// The write failure, if the value could not be saved.
    pub warning: Option<DfError>,
}

impl<T> Persisted<T> {
    /// Pair `value` with the outcome of saving it. Failures are logged.
    pub fn from_write(value: T, write: DfResult<()>) -> Self {
        let warning = match write {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "persistence failed; continuing in memory");
                Some(e)
            }
        };
        Self { value, warning }
    }

    /// Whether the write succeeded.
    pub fn is_saved(&self) -> bool {
        self.warning.is_none()
    }

    /// Transform the value, keeping the warning.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Persisted<U> {
        Persisted {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

/// Typed, namespaced access to a [`KeyValueStore`].
#[derive(Debug)]
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
    prefix: String,
}

impl Storage {
    /// Wrap `backend`, prefixing every key with `"{namespace}."`.
    pub fn new(backend: Box<dyn KeyValueStore>, namespace: &str) -> Self {
        Self {
            backend,
            prefix: format!("{namespace}."),
        }
    }

    /// A fresh in-memory storage.
    pub fn memory(namespace: &str) -> Self {
        Self::new(Box::new(MemoryStore::new()), namespace)
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    /// Load and deserialize `key`. Missing, unreadable, and corrupt values
    /// all come back as `None`; the latter two are logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let full = self.key(key);
        let raw = match self.backend.get_item(&full) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %full, error = %e, "could not read stored value");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %full, error = %e, "ignoring corrupt stored value");
                None
            }
        }
    }

    /// Serialize and write `value` under `key`.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> DfResult<()> {
        let raw = serde_json::to_string(value)?;
        let full = self.key(key);
        self.backend.set_item(&full, &raw)
    }

    /// Delete `key`.
    pub fn remove(&mut self, key: &str) -> DfResult<()> {
        let full = self.key(key);
        self.backend.remove_item(&full)
    }
}
