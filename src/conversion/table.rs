//! Notion tables ⇄ local table content.
//!
//! A Notion table block holds only its shape; the rows are child blocks and
//! have to be fetched through the content capability.

use super::rich_text::{clamp_content, decode_spans};
use crate::algebras::{FetchError, NotionContent};
use crate::api::requests::{BlockRequest, RichTextRequest, TableBody, TableRowBody};
use crate::blocknote::{spans_plain_text, InlineSpan, TableContent, TableRow};
use crate::model::{Block, TableBlock};

/// Fetches the rows of `table` and decodes them into a grid.
///
/// `columnWidths` follows the declared `table_width`; rows are taken as they
/// come, without checking their length against it.
pub async fn decode_table(
    table: &TableBlock,
    source: &dyn NotionContent,
) -> Result<TableContent, FetchError> {
    let children = source.retrieve_children(&table.common.id).await?;
    log::debug!(
        "Table {} has {} child blocks",
        table.common.id,
        children.len()
    );

    let mut content = TableContent::with_width(table.table_width);
    for child in children {
        match child {
            Block::TableRow(row) => content.rows.push(TableRow {
                cells: row
                    .cells
                    .iter()
                    .map(|cell| decode_spans(cell, false))
                    .collect(),
            }),
            other => log::warn!(
                "Skipping non-row child '{}' ({}) of table {}",
                other.id(),
                other.block_type(),
                table.common.id
            ),
        }
    }
    Ok(content)
}

/// Builds the Notion table request for local table content.
///
/// Each cell becomes a single unstyled run of its concatenated text.
pub fn encode_table(content: &TableContent) -> BlockRequest {
    let rows = content
        .rows
        .iter()
        .map(|row| BlockRequest::TableRow {
            table_row: TableRowBody {
                cells: row.cells.iter().map(|cell| encode_cell(cell)).collect(),
            },
        })
        .collect();

    BlockRequest::Table {
        table: TableBody {
            table_width: content.width(),
            has_column_header: false,
            has_row_header: false,
            children: rows,
        },
    }
}

fn encode_cell(cell: &[InlineSpan]) -> Vec<RichTextRequest> {
    if cell.is_empty() {
        return Vec::new();
    }
    vec![RichTextRequest::plain(clamp_content(&spans_plain_text(cell)))]
}
