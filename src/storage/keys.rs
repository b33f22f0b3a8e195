use super::{read_json, write_json, KeyValueStore};
use crate::constants::STORAGE_KEY_NOTION_KEYS;
use crate::error::AppError;
use crate::types::ApiKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named integration key, stored as `{id, name, key}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedKey {
    pub id: String,
    pub name: String,
    pub key: String,
}

impl SavedKey {
    pub fn api_key(&self) -> Result<ApiKey, AppError> {
        Ok(ApiKey::new(self.key.as_str())?)
    }
}

impl fmt::Debug for SavedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedKey")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Saved API keys under `notionKeys`.
pub struct KeyRing<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> KeyRing<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<SavedKey>, AppError> {
        read_json(self.store, STORAGE_KEY_NOTION_KEYS).await
    }

    async fn save(&self, keys: &[SavedKey]) -> Result<(), AppError> {
        write_json(self.store, STORAGE_KEY_NOTION_KEYS, keys).await
    }

    /// Saves a key under a fresh id.
    pub async fn add(&self, name: &str, key: &ApiKey) -> Result<SavedKey, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(crate::types::ValidationError::EmptyField("name").into());
        }
        let saved = SavedKey {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.as_str().to_string(),
        };
        let mut keys = self.list().await?;
        keys.push(saved.clone());
        self.save(&keys).await?;
        log::info!("Saved key '{}' ({})", saved.name, saved.id);
        Ok(saved)
    }

    pub async fn rename(&self, id: &str, name: &str) -> Result<SavedKey, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(crate::types::ValidationError::EmptyField("name").into());
        }
        let mut keys = self.list().await?;
        let entry = keys
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or_else(|| AppError::KeyNotFound(id.to_string()))?;
        entry.name = name.to_string();
        let renamed = entry.clone();
        self.save(&keys).await?;
        Ok(renamed)
    }

    pub async fn remove(&self, id: &str) -> Result<SavedKey, AppError> {
        let mut keys = self.list().await?;
        let index = keys
            .iter()
            .position(|k| k.id == id)
            .ok_or_else(|| AppError::KeyNotFound(id.to_string()))?;
        let removed = keys.remove(index);
        self.save(&keys).await?;
        Ok(removed)
    }

    /// Finds a key by id, else by name.
    pub async fn find(&self, selector: &str) -> Result<Option<SavedKey>, AppError> {
        let keys = self.list().await?;
        Ok(keys
            .iter()
            .find(|k| k.id == selector)
            .or_else(|| keys.iter().find(|k| k.name == selector))
            .cloned())
    }

    /// The API key a selection refers to.
    ///
    /// An unknown selection is a connection problem the user can fix, not a
    /// hard failure.
    pub async fn select(&self, selector: &str) -> Result<ApiKey, AppError> {
        match self.find(selector).await? {
            Some(saved) => saved.api_key(),
            None => Err(AppError::NotConnected {
                reason: format!("no saved key named '{}'", selector),
            }),
        }
    }
}
