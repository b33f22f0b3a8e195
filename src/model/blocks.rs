use super::common::BlockCommon;
use crate::types::{Color, RichTextItem};
use serde::Deserialize;

/// Text content block
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
    pub color: Color,
}

impl Default for TextBlockContent {
    fn default() -> Self {
        Self {
            rich_text: Vec::new(),
            color: Color::Default,
        }
    }
}

/// Paragraph block
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 1 block
#[derive(Debug, Clone, PartialEq)]
pub struct Heading1Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 2 block
#[derive(Debug, Clone, PartialEq)]
pub struct Heading2Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 3 block
#[derive(Debug, Clone, PartialEq)]
pub struct Heading3Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Bulleted list item block
#[derive(Debug, Clone, PartialEq)]
pub struct BulletedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Numbered list item block
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Quote block
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// To-do block
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
    pub checked: bool,
}

/// Embed block
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedBlock {
    pub common: BlockCommon,
    pub url: String,
    pub caption: Vec<RichTextItem>,
}

/// Code block
///
/// `language` is Notion's language name verbatim; empty when the payload
/// omitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub language: String,
    pub caption: Vec<RichTextItem>,
    pub content: TextBlockContent,
}

/// Table block. Rows are separate `table_row` children fetched on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub common: BlockCommon,
    pub table_width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
}

/// Table row block
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowBlock {
    pub common: BlockCommon,
    pub cells: Vec<Vec<RichTextItem>>,
}

/// Any block type outside the supported vocabulary.
///
/// Whatever `rich_text` and `color` the payload carried are kept so the
/// block can still degrade to a paragraph with its text intact.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
    pub content: TextBlockContent,
}

// --- Payload shapes, one per `<type>` object in the API JSON ---

#[derive(Debug, Default, Deserialize)]
pub(super) struct ToDoPayload {
    #[serde(flatten)]
    pub text: TextBlockContent,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct EmbedPayload {
    pub url: String,
    pub caption: Vec<RichTextItem>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CodePayload {
    #[serde(flatten)]
    pub text: TextBlockContent,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct TablePayload {
    pub table_width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableRowPayload {
    pub cells: Vec<Vec<RichTextItem>>,
}
