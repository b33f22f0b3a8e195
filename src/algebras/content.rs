//! Content retrieval algebra for Notion API.
//!
//! This module defines the [`NotionContent`] capability trait: the one thing
//! block conversion is allowed to ask of Notion. It carries no HTTP, retry or
//! caching detail.

use crate::model::Block;
use crate::types::BlockId;
use async_trait::async_trait;

use super::error::FetchError;

/// Content retrieval capability for Notion API.
///
/// This trait is **object-safe** and is passed to the converter as
/// `&dyn NotionContent`.
///
/// # Laws
///
/// - **L1 (Order)**: children come back in the order Notion lists them.
/// - **L2 (Completeness)**: every page of results is followed; callers never
///   see a cursor.
/// - **L3 (Direct children)**: grandchildren are not included.
#[async_trait]
pub trait NotionContent: Send + Sync {
    /// Retrieve the direct children of a block or page.
    async fn retrieve_children(&self, block_id: &BlockId) -> Result<Vec<Block>, FetchError>;
}
