//! The key/value store itself.
//!
//! Two backends behind one type: a directory of `<key>.json` files, or a plain
//! map for tests and throwaway use. The public `get`/`set`/`remove` surface
//! never fails: storage errors are logged and degrade to "value absent" on
//! read and "write dropped" on write, so a broken disk costs data, not uptime.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::Result;

enum Backend {
    Disk { dir: PathBuf },
    Memory { values: HashMap<String, String> },
}

/// A browser-local-style key/value store holding JSON-encoded values.
pub struct LocalStore {
    backend: Backend,
    latency: Duration,
}

impl LocalStore {
    /// Opens (creating if needed) an on-disk store rooted at `dir`.
    ///
    /// # Errors
    /// Returns `Error::Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>, latency: Duration) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!("Opened disk store at {:?}", dir);
        Ok(Self {
            backend: Backend::Disk { dir },
            latency,
        })
    }

    /// Creates an empty in-memory store with zero latency.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self {
            backend: Backend::Memory {
                values: HashMap::new(),
            },
            latency: Duration::ZERO,
        }
    }

    /// The simulated backend latency applied to facade operations.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Changes the simulated backend latency.
    pub fn set_latency(&mut self, latency: Duration) {
        self.latency = latency;
    }

    /// Reads and decodes the value under `key`.
    ///
    /// Missing keys, unreadable files, and corrupt JSON all come back as
    /// `None`; failures are logged, never returned.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.try_get_raw(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read '{}' from local store: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Stored value for '{}' is not valid JSON, treating as absent: {}", key, e);
                None
            }
        }
    }

    /// Encodes and writes `value` under `key`.
    ///
    /// A failed write is logged and dropped; the previous value (if any)
    /// stays in place.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode value for '{}', write dropped: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.try_set_raw(key, &encoded) {
            warn!("Failed to write '{}' to local store, write dropped: {}", key, e);
        }
    }

    /// Removes the value under `key`, if any. Failures are logged and dropped.
    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.try_remove_raw(key) {
            warn!("Failed to remove '{}' from local store: {}", key, e);
        }
    }

    fn try_get_raw(&self, key: &str) -> Result<Option<String>> {
        match &self.backend {
            Backend::Disk { dir } => match fs::read_to_string(Self::file_for(dir, key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            },
            Backend::Memory { values } => Ok(values.get(key).cloned()),
        }
    }

    fn try_set_raw(&mut self, key: &str, value: &str) -> Result<()> {
        match &mut self.backend {
            Backend::Disk { dir } => {
                fs::write(Self::file_for(dir, key), value)?;
                Ok(())
            }
            Backend::Memory { values } => {
                values.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    fn try_remove_raw(&mut self, key: &str) -> Result<()> {
        match &mut self.backend {
            Backend::Disk { dir } => match fs::remove_file(Self::file_for(dir, key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            },
            Backend::Memory { values } => {
                values.remove(key);
                Ok(())
            }
        }
    }

    fn file_for(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }

    /// Writes a raw string under `key`, bypassing JSON encoding.
    /// Test hook for planting corrupt values.
    #[cfg(test)]
    pub(crate) fn set_raw_for_test(&mut self, key: &str, value: &str) {
        if let Err(e) = self.try_set_raw(key, value) {
            warn!("Failed to plant raw test value for '{}': {}", key, e);
        }
    }
}
