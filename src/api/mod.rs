// src/api/mod.rs
//! Notion API interaction: reading pages, writing new ones, searching.
//!
//! This module keeps I/O, parsing and request shapes apart: `client` talks
//! HTTP, `parser` turns bodies into types, `requests` builds what is sent.

pub mod client;
pub mod parser;
pub mod requests;
pub mod responses;
mod simple_pagination;

use crate::error::AppError;
use crate::model::{Block, CreatedPage, PageContent, SearchResult, Workspace};
use crate::types::{BlockId, PageId};
use requests::{CreatePageRequest, SearchQuery};

/// The ability to read from and write to a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details. Conversion
/// only ever needs the narrower [`NotionContent`](crate::algebras::NotionContent).
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// A page's title and its top-level blocks.
    async fn retrieve_page_content(&self, id: &PageId) -> Result<PageContent, AppError>;

    /// All direct children of a block or page, following every cursor.
    async fn retrieve_children(&self, block_id: &BlockId) -> Result<Vec<Block>, AppError>;

    /// Creates a page; children past the per-request limit are appended in batches.
    async fn create_page(&self, request: CreatePageRequest) -> Result<CreatedPage, AppError>;

    /// Pages or databases matching a query, most recently edited first.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError>;

    /// The workspace the key belongs to; fails when the key is rejected.
    async fn current_user(&self) -> Result<Workspace, AppError>;
}

// Re-export the public interface
pub use client::NotionHttpClient;
pub use requests::{BlockRequest, RichTextRequest};
