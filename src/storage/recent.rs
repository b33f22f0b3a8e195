use super::{read_json, write_json, KeyValueStore};
use crate::constants::{RECENT_PAGES_LIMIT, STORAGE_KEY_RECENT_EXPORTS, STORAGE_KEY_RECENT_IMPORTS};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPage {
    pub id: String,
    pub title: String,
}

/// A most-recent-first page list capped at [`RECENT_PAGES_LIMIT`].
pub struct RecentPages<'a> {
    store: &'a dyn KeyValueStore,
    key: &'static str,
}

impl<'a> RecentPages<'a> {
    /// Pages imported from Notion.
    pub fn imports(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            key: STORAGE_KEY_RECENT_IMPORTS,
        }
    }

    /// Parent pages exported under.
    pub fn exports(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            key: STORAGE_KEY_RECENT_EXPORTS,
        }
    }

    pub async fn list(&self) -> Result<Vec<RecentPage>, AppError> {
        read_json(self.store, self.key).await
    }

    /// Moves `page` to the front, dropping an older entry with the same id.
    pub async fn push(&self, page: RecentPage) -> Result<Vec<RecentPage>, AppError> {
        let mut pages = self.list().await?;
        pages.retain(|existing| existing.id != page.id);
        pages.insert(0, page);
        pages.truncate(RECENT_PAGES_LIMIT);
        write_json(self.store, self.key, &pages).await?;
        Ok(pages)
    }
}
