// tests/notion_to_blocknote.rs
//! Importing recorded Notion responses into BlockNote documents.

mod common;

use common::{blocks, blocks_fixture, text, InMemoryContent};
use notion2blocknote::{
    notion_to_blocknote, AppError, BlockContent, FetchError, InlineSpan, LocalBlockType,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

const PAGE_BLOCKS: &str = include_str!("fixtures/api_responses/page_blocks.json");
const TABLE_ROWS: &str = include_str!("fixtures/api_responses/table_rows.json");
const TABLE_ID: &str = "1a2b3c4d-0000-4000-8000-000000000006";

fn page_source() -> InMemoryContent {
    InMemoryContent::new().with_children(TABLE_ID, blocks_fixture(TABLE_ROWS))
}

#[tokio::test]
async fn test_recorded_page_converts_in_order() {
    let input = blocks_fixture(PAGE_BLOCKS);
    let source = page_source();

    let output = notion_to_blocknote(&input, &source).await.unwrap();

    let types: Vec<&str> = output.iter().map(|b| b.block_type.as_str()).collect();
    assert_eq!(
        types,
        vec![
            "heading",
            "paragraph",
            "checkListItem",
            "paragraph",
            "codeBlock",
            "table",
            "paragraph",
            "paragraph"
        ]
    );
    let ids: Vec<String> = output
        .iter()
        .map(|b| b.id.as_ref().map(|id| id.to_string()).unwrap_or_default())
        .collect();
    let expected: Vec<String> = input.iter().map(|b| b.id().to_string()).collect();
    assert_eq!(ids, expected);

    // Only the table needed a follow-up fetch.
    assert_eq!(source.calls(), vec![TABLE_ID.to_string()]);
}

#[tokio::test]
async fn test_text_blocks_match_editor_shape() {
    let input = blocks_fixture(PAGE_BLOCKS);
    let output = notion_to_blocknote(&input, &page_source()).await.unwrap();

    insta::assert_json_snapshot!(&output[..3], @r###"
    [
      {
        "id": "1a2b3c4d-0000-4000-8000-000000000001",
        "type": "heading",
        "props": {
          "textColor": "blue",
          "backgroundColor": "default",
          "textAlignment": "left",
          "level": 2
        },
        "content": [
          {
            "type": "text",
            "text": "Release notes",
            "styles": {
              "textColor": "default",
              "backgroundColor": "default"
            }
          }
        ],
        "children": []
      },
      {
        "id": "1a2b3c4d-0000-4000-8000-000000000002",
        "type": "paragraph",
        "props": {
          "textColor": "default",
          "backgroundColor": "default",
          "textAlignment": "left"
        },
        "content": [
          {
            "type": "text",
            "text": "Read the ",
            "styles": {
              "bold": true,
              "textColor": "default",
              "backgroundColor": "default"
            }
          },
          {
            "type": "link",
            "href": "https://example.com/changelog",
            "content": [
              {
                "type": "text",
                "text": "changelog",
                "styles": {
                  "italic": true,
                  "textColor": "red",
                  "backgroundColor": "default"
                }
              }
            ]
          }
        ],
        "children": []
      },
      {
        "id": "1a2b3c4d-0000-4000-8000-000000000003",
        "type": "checkListItem",
        "props": {
          "textColor": "default",
          "backgroundColor": "default",
          "textAlignment": "left",
          "checked": false
        },
        "content": [
          {
            "type": "text",
            "text": "Ship it",
            "styles": {
              "strike": true,
              "textColor": "default",
              "backgroundColor": "default"
            }
          }
        ],
        "children": []
      }
    ]
    "###);
}

#[tokio::test]
async fn test_quote_code_and_table() {
    let input = blocks_fixture(PAGE_BLOCKS);
    let output = notion_to_blocknote(&input, &page_source()).await.unwrap();

    let quote = &output[3];
    assert_eq!(quote.content, BlockContent::Inline(vec![]));
    let lines: Vec<String> = quote
        .children
        .iter()
        .map(|child| child.content.spans()[0].plain_text())
        .collect();
    assert_eq!(lines, vec!["Simple things ", "should be simple."]);
    assert_eq!(
        serde_json::to_value(&quote.children[1].content).unwrap(),
        json!([{
            "type": "text",
            "text": "should be simple.",
            "styles": {"underline": true, "textColor": "default", "backgroundColor": "default"}
        }])
    );

    let code = &output[4];
    assert_eq!(code.props.language.as_deref(), Some("shell"));
    assert_eq!(
        serde_json::to_value(&code.content).unwrap(),
        json!([{"type": "text", "text": "cargo install notion2blocknote", "styles": {}}])
    );

    let table = output[5].content.as_table().expect("table content");
    assert_eq!(
        serde_json::to_value(table).unwrap(),
        json!({
            "type": "tableContent",
            "columnWidths": [null, null],
            "rows": [
                {"cells": [
                    [{"type": "text", "text": "Version", "styles": {"textColor": "default", "backgroundColor": "default"}}],
                    [{"type": "text", "text": "Date", "styles": {"textColor": "default", "backgroundColor": "default"}}]
                ]},
                {"cells": [
                    [{"type": "text", "text": "1.0", "styles": {"bold": true, "textColor": "default", "backgroundColor": "default"}}],
                    []
                ]}
            ]
        })
    );
}

#[tokio::test]
async fn test_unsupported_blocks_keep_their_text() {
    let input = blocks_fixture(PAGE_BLOCKS);
    let output = notion_to_blocknote(&input, &page_source()).await.unwrap();

    let callout = &output[6];
    assert_eq!(callout.block_type, LocalBlockType::Paragraph);
    assert_eq!(callout.content.spans()[0].plain_text(), "Heads up");

    let divider = &output[7];
    assert_eq!(divider.block_type, LocalBlockType::Paragraph);
    assert!(divider.content.spans().is_empty());
}

#[tokio::test]
async fn test_slow_tables_keep_document_order() {
    let row = |id: &str, cell: &str| {
        json!({"id": id, "type": "table_row", "table_row": {"cells": [[text(cell)]]}})
    };
    let input = blocks(json!([
        {"id": "slow", "type": "table", "has_children": true, "table": {"table_width": 1}},
        {"id": "p", "type": "paragraph", "paragraph": {"rich_text": [text("between")]}},
        {"id": "fast", "type": "table", "has_children": true, "table": {"table_width": 1}}
    ]));
    let source = InMemoryContent::new()
        .with_children("slow", blocks(json!([row("r1", "slow row")])))
        .with_children("fast", blocks(json!([row("r2", "fast row")])))
        .with_delay("slow", Duration::from_millis(50))
        .with_delay("fast", Duration::from_millis(10));

    let output = notion_to_blocknote(&input, &source).await.unwrap();

    let first_cell = |i: usize| -> String {
        output[i].content.as_table().expect("table").rows[0].cells[0][0].plain_text()
    };
    assert_eq!(first_cell(0), "slow row");
    assert_eq!(output[1].content.spans()[0].plain_text(), "between");
    assert_eq!(first_cell(2), "fast row");
    assert_eq!(source.calls(), vec!["slow".to_string(), "fast".to_string()]);
    // Both row fetches were pending at once.
    assert_eq!(source.max_in_flight(), 2);
}

#[tokio::test]
async fn test_one_failing_table_rejects_the_document() {
    let input = blocks(json!([
        {"id": "ok", "type": "table", "has_children": true, "table": {"table_width": 1}},
        {"id": "locked", "type": "table", "has_children": true, "table": {"table_width": 1}}
    ]));
    let source = InMemoryContent::new().failing("locked");

    match notion_to_blocknote(&input, &source).await {
        Err(AppError::ConversionFailed { block_id, source }) => {
            assert_eq!(block_id, "locked");
            assert!(matches!(source, FetchError::RestrictedResource { .. }));
        }
        other => panic!("expected ConversionFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_page() {
    let output = notion_to_blocknote(&[], &InMemoryContent::new())
        .await
        .unwrap();
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_link_spans_wrap_one_text_span() {
    let input = blocks(json!([{
        "id": "p",
        "type": "bulleted_list_item",
        "bulleted_list_item": {"rich_text": [{
            "type": "text",
            "text": {"content": "docs", "link": {"url": "https://docs.rs"}},
            "annotations": {"code": true},
            "plain_text": "docs"
        }]}
    }]));
    let output = notion_to_blocknote(&input, &InMemoryContent::new())
        .await
        .unwrap();

    assert_eq!(output[0].block_type, LocalBlockType::BulletListItem);
    match &output[0].content.spans()[0] {
        InlineSpan::Link { href, content } => {
            assert_eq!(href, "https://docs.rs");
            assert_eq!(content.len(), 1);
            assert_eq!(content[0].plain_text(), "docs");
        }
        other => panic!("expected a link span, got {:?}", other),
    }
}
