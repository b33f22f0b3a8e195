use super::inline::InlineSpan;
use super::table::TableContent;
use crate::types::{BlockId, Color};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block types of the local editor document.
///
/// Anything else found in an editor document is kept by name in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocalBlockType {
    Paragraph,
    Heading,
    BulletListItem,
    NumberedListItem,
    CheckListItem,
    Image,
    CodeBlock,
    Table,
    Other(String),
}

impl LocalBlockType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::BulletListItem => "bulletListItem",
            Self::NumberedListItem => "numberedListItem",
            Self::CheckListItem => "checkListItem",
            Self::Image => "image",
            Self::CodeBlock => "codeBlock",
            Self::Table => "table",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for LocalBlockType {
    fn from(name: &str) -> Self {
        match name {
            "paragraph" => Self::Paragraph,
            "heading" => Self::Heading,
            "bulletListItem" => Self::BulletListItem,
            "numberedListItem" => Self::NumberedListItem,
            "checkListItem" => Self::CheckListItem,
            "image" => Self::Image,
            "codeBlock" => Self::CodeBlock,
            "table" => Self::Table,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LocalBlockType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<LocalBlockType> for String {
    fn from(block_type: LocalBlockType) -> Self {
        block_type.as_str().to_string()
    }
}

impl fmt::Display for LocalBlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Block-level properties.
///
/// The three presentation props are always present; the rest only on the
/// block types that use them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    #[serde(default)]
    pub text_color: Color,
    #[serde(default)]
    pub background_color: Color,
    #[serde(default)]
    pub text_alignment: TextAlignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Block body: inline spans for text blocks, a grid for tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Inline(Vec<InlineSpan>),
    Table(TableContent),
}

impl Default for BlockContent {
    fn default() -> Self {
        BlockContent::Inline(Vec::new())
    }
}

impl BlockContent {
    /// Inline spans, empty for table content.
    pub fn spans(&self) -> &[InlineSpan] {
        match self {
            BlockContent::Inline(spans) => spans,
            BlockContent::Table(_) => &[],
        }
    }

    pub fn as_table(&self) -> Option<&TableContent> {
        match self {
            BlockContent::Table(table) => Some(table),
            BlockContent::Inline(_) => None,
        }
    }
}

/// A block of the local editor document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BlockId>,
    #[serde(rename = "type")]
    pub block_type: LocalBlockType,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub content: BlockContent,
    #[serde(default)]
    pub children: Vec<LocalBlock>,
}

impl LocalBlock {
    pub fn new(block_type: LocalBlockType) -> Self {
        Self {
            id: None,
            block_type,
            props: Props::default(),
            content: BlockContent::default(),
            children: Vec::new(),
        }
    }

    /// An id-less paragraph holding `spans`.
    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        Self {
            content: BlockContent::Inline(spans),
            ..Self::new(LocalBlockType::Paragraph)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocknote::Styles;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_block_type_names() {
        for name in [
            "paragraph",
            "heading",
            "bulletListItem",
            "numberedListItem",
            "checkListItem",
            "image",
            "codeBlock",
            "table",
        ] {
            let block_type = LocalBlockType::from(name);
            assert!(!matches!(block_type, LocalBlockType::Other(_)), "{}", name);
            assert_eq!(block_type.as_str(), name);
        }
        assert_eq!(
            LocalBlockType::from("toggleListItem"),
            LocalBlockType::Other("toggleListItem".to_string())
        );
    }

    #[test]
    fn test_parses_editor_document() {
        let blocks: Vec<LocalBlock> = serde_json::from_value(json!([
            {
                "id": "a1",
                "type": "heading",
                "props": {"textColor": "default", "backgroundColor": "default", "textAlignment": "center", "level": 2},
                "content": [{"type": "text", "text": "Title", "styles": {"bold": true}}],
                "children": []
            },
            {
                "id": "a2",
                "type": "table",
                "props": {"textColor": "default"},
                "content": {"type": "tableContent", "columnWidths": [null], "rows": [{"cells": [[]]}]},
                "children": []
            },
            {"type": "image", "props": {"url": "https://example.com/cat.png", "caption": "ignored"}}
        ]))
        .unwrap();

        assert_eq!(blocks[0].block_type, LocalBlockType::Heading);
        assert_eq!(blocks[0].props.level, Some(2));
        assert_eq!(blocks[0].props.text_alignment, TextAlignment::Center);
        assert_eq!(
            blocks[0].content.spans(),
            &[InlineSpan::text(
                "Title",
                Styles {
                    bold: true,
                    ..Styles::plain()
                }
            )]
        );
        assert_eq!(blocks[1].content.as_table().map(|t| t.width()), Some(1));
        assert_eq!(blocks[2].id, None);
        assert_eq!(blocks[2].content, BlockContent::default());
    }

    #[test]
    fn test_serializes_only_present_props() {
        let block = LocalBlock::paragraph(vec![]);
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "paragraph",
                "props": {"textColor": "default", "backgroundColor": "default", "textAlignment": "left"},
                "content": [],
                "children": []
            })
        );
    }
}
