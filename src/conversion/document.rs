// src/conversion/document.rs
//! Whole-document conversion in both directions.

use super::block_types::{extract_props, notion_language, notion_type_for};
use super::rich_text::{decode_spans, encode_first_span};
use super::table::{decode_table, encode_table};
use crate::algebras::{FetchError, NotionContent};
use crate::api::requests::{BlockRequest, CodeBody, EmbedBody, RichTextBody, ToDoBody};
use crate::blocknote::{BlockContent, InlineSpan, LocalBlock, Props, TableContent};
use crate::constants::NOTION_MAX_REQUEST_DEPTH;
use crate::error::AppError;
use crate::model::Block;
use crate::types::Color;
use futures::future::try_join_all;

/// Where a block's decoded text ends up.
enum DecodedBody {
    /// Spans go to `content`.
    Inline(Vec<InlineSpan>),
    /// Quote runs go to `children`, one paragraph per span, and `content`
    /// stays empty. Editors reading these documents rely on that layout.
    QuoteBody(Vec<InlineSpan>),
    Table(TableContent),
}

/// Converts Notion blocks into local blocks.
///
/// All blocks are converted concurrently and come back in input order. Tables
/// fetch their rows through `source`; if any fetch fails the whole batch
/// fails with the first error and no partial document is produced.
pub async fn notion_to_blocknote(
    blocks: &[Block],
    source: &dyn NotionContent,
) -> Result<Vec<LocalBlock>, AppError> {
    log::debug!("Converting {} Notion blocks", blocks.len());
    try_join_all(blocks.iter().map(|block| convert_block(block, source))).await
}

async fn convert_block(block: &Block, source: &dyn NotionContent) -> Result<LocalBlock, AppError> {
    let body = decode_body(block, source)
        .await
        .map_err(|source| AppError::ConversionFailed {
            block_id: block.id().to_string(),
            source,
        })?;

    let mut local = LocalBlock {
        id: Some(block.id().clone()),
        block_type: block.local_type(),
        props: extract_props(block),
        content: BlockContent::default(),
        children: Vec::new(),
    };
    match body {
        DecodedBody::Inline(spans) => local.content = BlockContent::Inline(spans),
        DecodedBody::QuoteBody(spans) => {
            local.children = spans
                .into_iter()
                .map(|span| LocalBlock::paragraph(vec![span]))
                .collect();
        }
        DecodedBody::Table(table) => local.content = BlockContent::Table(table),
    }
    Ok(local)
}

async fn decode_body(block: &Block, source: &dyn NotionContent) -> Result<DecodedBody, FetchError> {
    let body = match block {
        Block::Table(table) => DecodedBody::Table(decode_table(table, source).await?),
        Block::Quote(quote) => DecodedBody::QuoteBody(decode_spans(&quote.content.rich_text, false)),
        Block::Code(code) => DecodedBody::Inline(decode_spans(&code.content.rich_text, true)),
        other => DecodedBody::Inline(decode_spans(other.rich_text(), false)),
    };
    Ok(body)
}

/// Converts local blocks into Notion create requests.
///
/// Lossy by construction: only the first span of each block is exported, and
/// block types Notion has no counterpart for are written as paragraphs.
///
/// Notion takes two levels of blocks per request, so anything nested below a
/// top-level block's children is lifted to sit after its ancestor at the
/// second level.
pub fn blocknote_to_notion(blocks: &[LocalBlock]) -> Vec<BlockRequest> {
    encode_level(blocks, 1)
}

fn encode_level(blocks: &[LocalBlock], depth: usize) -> Vec<BlockRequest> {
    if depth < NOTION_MAX_REQUEST_DEPTH {
        return blocks.iter().map(|block| block_request(block, depth)).collect();
    }
    let mut flat = Vec::with_capacity(blocks.len());
    for block in blocks {
        flatten_into(block, &mut flat);
    }
    flat
}

/// Pre-order walk, so lifted blocks keep their reading order.
fn flatten_into(block: &LocalBlock, flat: &mut Vec<BlockRequest>) {
    flat.push(block_request(block, NOTION_MAX_REQUEST_DEPTH));
    if !block.children.is_empty() {
        log::warn!(
            "Lifting {} nested block(s) to nesting level {}",
            block.children.len(),
            NOTION_MAX_REQUEST_DEPTH
        );
        for child in &block.children {
            flatten_into(child, flat);
        }
    }
}

fn block_request(block: &LocalBlock, depth: usize) -> BlockRequest {
    match notion_type_for(&block.block_type) {
        "embed" => BlockRequest::Embed {
            embed: EmbedBody {
                url: block.props.url.clone().unwrap_or_default(),
            },
        },
        "code" => BlockRequest::Code {
            code: CodeBody {
                rich_text: encode_first_span(block.content.spans()),
                language: notion_language(block.props.language.as_deref().unwrap_or_default()),
            },
        },
        "table" => match block.content.as_table() {
            Some(table) => encode_table(table),
            None => {
                log::warn!("Table block without table content, exporting as paragraph");
                BlockRequest::Paragraph {
                    paragraph: text_body(block, Some(depth)),
                }
            }
        },
        "heading_1" => heading_request(block),
        "to_do" => BlockRequest::ToDo {
            to_do: ToDoBody {
                text: text_body(block, Some(depth)),
                checked: block.props.checked.unwrap_or(false),
            },
        },
        "bulleted_list_item" => BlockRequest::BulletedListItem {
            bulleted_list_item: text_body(block, Some(depth)),
        },
        "numbered_list_item" => BlockRequest::NumberedListItem {
            numbered_list_item: text_body(block, Some(depth)),
        },
        _ => {
            if let crate::blocknote::LocalBlockType::Other(name) = &block.block_type {
                log::debug!("No Notion counterpart for '{}', exporting as paragraph", name);
            }
            BlockRequest::Paragraph {
                paragraph: text_body(block, Some(depth)),
            }
        }
    }
}

fn heading_request(block: &LocalBlock) -> BlockRequest {
    let body = text_body(block, None);
    match block.props.level.unwrap_or(1).clamp(1, 3) {
        1 => BlockRequest::Heading1 { heading_1: body },
        2 => BlockRequest::Heading2 { heading_2: body },
        _ => BlockRequest::Heading3 { heading_3: body },
    }
}

/// `depth` is the block's own nesting level; `None` drops its children.
fn text_body(block: &LocalBlock, depth: Option<usize>) -> RichTextBody {
    let children = match depth {
        Some(depth) if depth < NOTION_MAX_REQUEST_DEPTH => encode_level(&block.children, depth + 1),
        _ => Vec::new(),
    };
    RichTextBody {
        rich_text: encode_first_span(block.content.spans()),
        color: block_color(&block.props),
        children,
    }
}

/// Notion block colour: the text colour, or the background variant when
/// only a background is set.
fn block_color(props: &Props) -> Color {
    if props.text_color.is_default() && !props.background_color.is_default() {
        props.background_color.as_background()
    } else {
        props.text_color
    }
}
