//! Notion ⇄ BlockNote conversion.
//!
//! - [`block_types`]: block type table and per-type props
//! - [`rich_text`]: runs ⇄ spans, annotations ⇄ styles
//! - [`table`]: table rows fetched through [`NotionContent`](crate::algebras::NotionContent)
//! - [`document`]: both whole-document directions

pub mod block_types;
pub mod document;
pub mod rich_text;
pub mod table;

pub use block_types::{extract_props, map_type, notion_type_for};
pub use document::{blocknote_to_notion, notion_to_blocknote};
pub use rich_text::{decode_spans, encode_span, extract_styles};
pub use table::{decode_table, encode_table};
