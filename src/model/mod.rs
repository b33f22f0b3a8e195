mod block;
pub mod blocks;
pub mod common;

pub use block::Block;
pub use blocks::*;
pub use common::*;

use crate::types::{BlockId, PageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A page's title together with its top-level blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: PageTitle,
    pub results: Vec<Block>,
}

/// Kind of object a search hit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Page,
    Database,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: PageId,
    pub kind: ObjectKind,
    pub title: PageTitle,
    pub url: Option<String>,
    pub last_edited_time: Option<DateTime<Utc>>,
}

/// The workspace a key belongs to, as reported by `users/me`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

/// A page just created in Notion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
    pub id: PageId,
    pub url: Option<String>,
}

impl CreatedPage {
    /// Id of the page as a block, for appending children.
    pub fn as_block_id(&self) -> BlockId {
        BlockId::from_raw(self.id.as_str())
    }
}
