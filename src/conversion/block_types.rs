//! Notion block types ⇄ local block types, plus per-type props.
//!
//! The forward direction is total: every Notion type lands somewhere, unknown
//! ones on `paragraph`. The reverse is the inverse of that table with the
//! first listed Notion type winning, so it is lossy: a `quote` comes back as
//! a `paragraph`.

use crate::blocknote::{LocalBlockType, Props};
use crate::model::Block;

/// Notion types with an explicit local counterpart, in inversion priority.
const MAPPED_NOTION_TYPES: [&str; 11] = [
    "paragraph",
    "heading_1",
    "heading_2",
    "heading_3",
    "bulleted_list_item",
    "numbered_list_item",
    "quote",
    "to_do",
    "embed",
    "code",
    "table",
];

/// Local counterpart of a Notion block type name. Never fails.
pub fn map_type(notion_type: &str) -> LocalBlockType {
    match notion_type {
        "paragraph" | "quote" => LocalBlockType::Paragraph,
        "heading_1" | "heading_2" | "heading_3" => LocalBlockType::Heading,
        "bulleted_list_item" => LocalBlockType::BulletListItem,
        "numbered_list_item" => LocalBlockType::NumberedListItem,
        "to_do" => LocalBlockType::CheckListItem,
        "embed" => LocalBlockType::Image,
        "code" => LocalBlockType::CodeBlock,
        "table" => LocalBlockType::Table,
        other => {
            log::debug!("Unsupported Notion block type '{}', using paragraph", other);
            LocalBlockType::Paragraph
        }
    }
}

/// Canonical Notion type for a local type.
///
/// One-way: `heading` answers `heading_1` (export refines it by level) and
/// types with no counterpart answer `paragraph`.
pub fn notion_type_for(local: &LocalBlockType) -> &'static str {
    MAPPED_NOTION_TYPES
        .iter()
        .copied()
        .find(|notion_type| map_type(notion_type) == *local)
        .unwrap_or("paragraph")
}

impl Block {
    /// Local block type this block converts to.
    pub fn local_type(&self) -> LocalBlockType {
        match self {
            Block::Paragraph(_) | Block::Quote(_) => LocalBlockType::Paragraph,
            Block::Heading1(_) | Block::Heading2(_) | Block::Heading3(_) => LocalBlockType::Heading,
            Block::BulletedListItem(_) => LocalBlockType::BulletListItem,
            Block::NumberedListItem(_) => LocalBlockType::NumberedListItem,
            Block::ToDo(_) => LocalBlockType::CheckListItem,
            Block::Embed(_) => LocalBlockType::Image,
            Block::Code(_) => LocalBlockType::CodeBlock,
            Block::Table(_) => LocalBlockType::Table,
            Block::TableRow(_) | Block::Unsupported(_) => map_type(self.block_type()),
        }
    }
}

/// Local props for a Notion block.
pub fn extract_props(block: &Block) -> Props {
    let mut props = Props {
        text_color: block
            .text_content()
            .map(|content| content.color)
            .unwrap_or_default(),
        ..Props::default()
    };

    match block {
        Block::Heading1(_) => props.level = Some(1),
        Block::Heading2(_) => props.level = Some(2),
        Block::Heading3(_) => props.level = Some(3),
        Block::ToDo(to_do) => props.checked = Some(to_do.checked),
        Block::Embed(embed) => props.url = Some(embed.url.clone()),
        Block::Code(code) => props.language = Some(local_language(&code.language)),
        _ => {}
    }
    props
}

/// Editor name of a Notion code language.
pub fn local_language(notion_language: &str) -> String {
    match notion_language {
        "" | "plain text" => "plaintext".to_string(),
        other => other.to_string(),
    }
}

/// Notion name of an editor code language.
pub fn notion_language(local_language: &str) -> String {
    match local_language {
        "" | "plaintext" | "text" => "plain text".to_string(),
        other => other.to_string(),
    }
}
