use super::blocks::*;
use super::common::BlockCommon;
use crate::types::{BlockId, RichTextItem};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Embed($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::TableRow($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// A Notion block, keyed by its block type.
///
/// Parsing never fails on an unknown `type`: such blocks land in
/// [`Block::Unsupported`] with whatever text they carried.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBlock")]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(Heading1Block),
    Heading2(Heading2Block),
    Heading3(Heading3Block),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    Quote(QuoteBlock),
    ToDo(ToDoBlock),
    Embed(EmbedBlock),
    Code(CodeBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Check if block has children
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// Get block type name as Notion spells it
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::Quote(_) => "quote",
            Block::ToDo(_) => "to_do",
            Block::Embed(_) => "embed",
            Block::Code(_) => "code",
            Block::Table(_) => "table",
            Block::TableRow(_) => "table_row",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// The block's text payload, if its type has one.
    pub fn text_content(&self) -> Option<&TextBlockContent> {
        match self {
            Block::Paragraph(b) => Some(&b.content),
            Block::Heading1(b) => Some(&b.content),
            Block::Heading2(b) => Some(&b.content),
            Block::Heading3(b) => Some(&b.content),
            Block::BulletedListItem(b) => Some(&b.content),
            Block::NumberedListItem(b) => Some(&b.content),
            Block::Quote(b) => Some(&b.content),
            Block::ToDo(b) => Some(&b.content),
            Block::Code(b) => Some(&b.content),
            Block::Unsupported(b) => Some(&b.content),
            Block::Embed(_) | Block::Table(_) | Block::TableRow(_) => None,
        }
    }

    /// The block's rich text runs; empty for types without text.
    pub fn rich_text(&self) -> &[RichTextItem] {
        self.text_content()
            .map(|content| content.rich_text.as_slice())
            .unwrap_or(&[])
    }
}

/// The API shape: common fields plus one object named after `type`.
#[derive(Deserialize)]
struct RawBlock {
    id: BlockId,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    has_children: bool,
    #[serde(default)]
    archived: bool,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawBlock> for Block {
    type Error = String;

    fn try_from(mut raw: RawBlock) -> Result<Self, Self::Error> {
        let payload = raw
            .rest
            .remove(&raw.block_type)
            .filter(|value| value.is_object())
            .unwrap_or_else(|| Value::Object(Map::new()));
        let common = BlockCommon {
            id: raw.id,
            has_children: raw.has_children,
            archived: raw.archived,
        };

        let block = match raw.block_type.as_str() {
            "paragraph" => Block::Paragraph(ParagraphBlock {
                common,
                content: payload_of(&raw.block_type, payload)?,
            }),
            "heading_1" => Block::Heading1(Heading1Block {
                common,
                content: payload_of(&raw.block_type, payload)?,
            }),
            "heading_2" => Block::Heading2(Heading2Block {
                common,
                content: payload_of(&raw.block_type, payload)?,
            }),
            "heading_3" => Block::Heading3(Heading3Block {
                common,
                content: payload_of(&raw.block_type, payload)?,
            }),
            "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock {
                common,
                content: payload_of(&raw.block_type, payload)?,
            }),
            "numbered_list_item" => Block::NumberedListItem(NumberedListItemBlock {
                common,
                content: payload_of(&raw.block_type, payload)?,
            }),
            "quote" => Block::Quote(QuoteBlock {
                common,
                content: payload_of(&raw.block_type, payload)?,
            }),
            "to_do" => {
                let to_do: ToDoPayload = payload_of(&raw.block_type, payload)?;
                Block::ToDo(ToDoBlock {
                    common,
                    content: to_do.text,
                    checked: to_do.checked,
                })
            }
            "embed" => {
                let embed: EmbedPayload = payload_of(&raw.block_type, payload)?;
                Block::Embed(EmbedBlock {
                    common,
                    url: embed.url,
                    caption: embed.caption,
                })
            }
            "code" => {
                let code: CodePayload = payload_of(&raw.block_type, payload)?;
                Block::Code(CodeBlock {
                    common,
                    language: code.language,
                    caption: code.caption,
                    content: code.text,
                })
            }
            "table" => {
                let table: TablePayload = payload_of(&raw.block_type, payload)?;
                Block::Table(TableBlock {
                    common,
                    table_width: table.table_width,
                    has_column_header: table.has_column_header,
                    has_row_header: table.has_row_header,
                })
            }
            "table_row" => {
                let row: TableRowPayload = payload_of(&raw.block_type, payload)?;
                Block::TableRow(TableRowBlock {
                    common,
                    cells: row.cells,
                })
            }
            _ => {
                // Best effort: many unsupported types (toggle, callout, ...) still carry rich_text.
                let content = serde_json::from_value(payload).unwrap_or_default();
                Block::Unsupported(UnsupportedBlock {
                    common,
                    block_type: raw.block_type,
                    content,
                })
            }
        };
        Ok(block)
    }
}

fn payload_of<T: DeserializeOwned>(block_type: &str, payload: Value) -> Result<T, String> {
    serde_json::from_value(payload)
        .map_err(|e| format!("invalid '{}' block payload: {}", block_type, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use serde_json::json;

    #[test]
    fn test_parses_to_do_block() {
        let block: Block = serde_json::from_value(json!({
            "object": "block",
            "id": "b1",
            "type": "to_do",
            "has_children": false,
            "to_do": {
                "checked": true,
                "color": "default",
                "rich_text": [{"type": "text", "text": {"content": "buy milk"}, "annotations": {}}]
            }
        }))
        .unwrap();

        match &block {
            Block::ToDo(to_do) => {
                assert!(to_do.checked);
                assert_eq!(to_do.content.rich_text.len(), 1);
            }
            other => panic!("expected to_do, got {:?}", other),
        }
        assert_eq!(block.id().as_str(), "b1");
        assert_eq!(block.block_type(), "to_do");
    }

    #[test]
    fn test_unknown_type_keeps_text() {
        let block: Block = serde_json::from_value(json!({
            "id": "t1",
            "type": "toggle",
            "toggle": {
                "color": "blue",
                "rich_text": [{"type": "text", "text": {"content": "more"}}]
            }
        }))
        .unwrap();

        match &block {
            Block::Unsupported(unsupported) => {
                assert_eq!(unsupported.block_type, "toggle");
                assert_eq!(unsupported.content.color, Color::Blue);
            }
            other => panic!("expected unsupported, got {:?}", other),
        }
        assert_eq!(block.rich_text()[0].content(), "more");
    }

    #[test]
    fn test_unknown_type_without_text_still_parses() {
        let block: Block = serde_json::from_value(json!({
            "id": "d1",
            "type": "divider",
            "divider": {}
        }))
        .unwrap();
        assert_eq!(block.block_type(), "divider");
        assert!(block.rich_text().is_empty());
    }

    #[test]
    fn test_parses_table_and_rows() {
        let table: Block = serde_json::from_value(json!({
            "id": "tbl",
            "type": "table",
            "has_children": true,
            "table": {"table_width": 3, "has_column_header": true, "has_row_header": false}
        }))
        .unwrap();
        assert!(table.has_children());
        assert!(matches!(table, Block::Table(TableBlock { table_width: 3, .. })));

        let row: Block = serde_json::from_value(json!({
            "id": "r1",
            "type": "table_row",
            "table_row": {"cells": [[{"type": "text", "text": {"content": "a"}}], []]}
        }))
        .unwrap();
        match row {
            Block::TableRow(row) => {
                assert_eq!(row.cells.len(), 2);
                assert!(row.cells[1].is_empty());
            }
            other => panic!("expected table_row, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_payload_defaults() {
        let block: Block = serde_json::from_value(json!({"id": "c1", "type": "code"})).unwrap();
        match block {
            Block::Code(code) => {
                assert!(code.language.is_empty());
                assert!(code.content.rich_text.is_empty());
            }
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_known_payload_is_an_error() {
        let result: Result<Block, _> = serde_json::from_value(json!({
            "id": "p1",
            "type": "paragraph",
            "paragraph": {"rich_text": "not a list"}
        }));
        assert!(result.is_err());
    }
}
