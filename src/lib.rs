// src/lib.rs
//! notion2blocknote library: converts Notion pages into BlockNote documents and back.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `FetchError`, `ValidationError`
//! - **Configuration**: `AppConfig`, `CommandLineInput`
//! - **Notion model**: `Block` and its per-type structs
//! - **Local model**: `LocalBlock`, `InlineSpan`, `Styles`, `TableContent`
//! - **Conversion**: `notion_to_blocknote`, `blocknote_to_notion`
//! - **API client**: `NotionHttpClient`, `NotionRepository`
//! - **Local state**: `KeyRing`, `RecentPages`, `ArticleList`

pub mod algebras;
pub mod api;
pub mod articles;
pub mod blocknote;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod model;
pub mod storage;
pub mod types;

// --- Error Handling ---
pub use crate::algebras::FetchError;
pub use crate::error::{AppError, NotionClientError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{AppConfig, CommandLineInput};

// --- Notion Model ---
pub use crate::model::{
    Block, BlockCommon, CreatedPage, ObjectKind, PageContent, PageTitle, SearchResult, Workspace,
};

// --- Local Model ---
pub use crate::blocknote::{
    BlockContent, InlineSpan, LocalBlock, LocalBlockType, Props, Styles, TableContent, TableRow,
    TextAlignment,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Color, NotionId, PageId, RichTextItem, RichTextType,
};

// --- Conversion ---
pub use crate::conversion::{blocknote_to_notion, map_type, notion_to_blocknote};

// --- API Client ---
pub use crate::api::{BlockRequest, NotionHttpClient, NotionRepository};

// --- Algebras (Capability Traits) ---
pub use crate::algebras::NotionContent;

// --- Local State ---
pub use crate::articles::{Article, ArticleList};
pub use crate::storage::{FileStore, KeyRing, KeyValueStore, MemoryStore, RecentPages};
