// src/storage/mod.rs
//! Local key-value state: saved API keys and recently used pages.
//!
//! Values are JSON strings under fixed keys, the way the browser build kept
//! them in extension storage. [`FileStore`] keeps one file per key,
//! [`MemoryStore`] keeps them for the life of the process.

mod keys;
mod recent;

pub use keys::{KeyRing, SavedKey};
pub use recent::{RecentPage, RecentPages};

use crate::constants::APP_DIR_NAME;
use crate::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// String blobs under string keys.
///
/// # Laws
///
/// - **L1 (Read-your-write)**: `set(k, v)` then `get(k)` yields `Some(v)`.
/// - **L2 (Absence)**: a key never written reads as `None`, not an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Reads a JSON value, treating a missing key as `T::default()`.
pub async fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| AppError::Storage {
            key: key.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(T::default()),
    }
}

pub async fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// One `<key>.json` file per key under a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$XDG_CONFIG_HOME/notion2blocknote` (or `~/.config/notion2blocknote`).
    pub fn default_dir() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".config")
            })
            .join(APP_DIR_NAME)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match tokio::fs::read_to_string(self.key_to_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.key_to_path(key), value).await?;
        log::debug!("Stored '{}' in {}", key, self.dir.display());
        Ok(())
    }
}

/// Process-local store.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
