use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

/// String-keyed JSON persistence.
///
/// Implementations report failures as `Err`; deciding whether a failure
/// matters is the caller's business (the store logs and continues).
pub trait CacheAdapter {
    /// Serialize `value` to JSON and write it under `key`.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;

    /// Read and parse the value under `key`. `Ok(None)` when the key is
    /// absent; read or parse failures are `Err`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;

    /// Delete the entry under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed cache: one `<key>.json` per key under a single directory.
pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

impl CacheAdapter for FileCache {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        std::fs::write(self.entry_path(key), contents)
            .with_context(|| format!("Failed to write cache entry: {}", key))?;
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache entry: {}", key))?;

        let value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache entry: {}", key))?;

        Ok(Some(value))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove cache entry: {}", key)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
