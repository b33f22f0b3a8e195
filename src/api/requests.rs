//! Request bodies sent to the Notion API.
//!
//! Block requests mirror the response shape: a `type` tag plus one object
//! named after it.

use crate::types::{Color, PageId};
use serde::Serialize;

/// Annotations written on an outgoing rich-text run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnnotationsRequest {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkRequest>,
}

/// One outgoing `text` run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextRequest {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: TextRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<AnnotationsRequest>,
}

impl RichTextRequest {
    /// An unannotated run.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: TextRequest {
                content: content.into(),
                link: None,
            },
            annotations: None,
        }
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.text.link = Some(LinkRequest { url: url.into() });
        self
    }

    pub fn with_annotations(mut self, annotations: AnnotationsRequest) -> Self {
        self.annotations = Some(annotations);
        self
    }
}

/// Payload shared by the text-bearing block types.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RichTextBody {
    pub rich_text: Vec<RichTextRequest>,
    pub color: Color,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockRequest>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ToDoBody {
    #[serde(flatten)]
    pub text: RichTextBody,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedBody {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBody {
    pub rich_text: Vec<RichTextRequest>,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBody {
    pub table_width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
    /// Only `table_row` requests; Notion requires them inline on create.
    pub children: Vec<BlockRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRowBody {
    pub cells: Vec<Vec<RichTextRequest>>,
}

/// A block to create in Notion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum BlockRequest {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextBody },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextBody },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextBody },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextBody },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: RichTextBody },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: RichTextBody },
    #[serde(rename = "to_do")]
    ToDo { to_do: ToDoBody },
    #[serde(rename = "embed")]
    Embed { embed: EmbedBody },
    #[serde(rename = "code")]
    Code { code: CodeBody },
    #[serde(rename = "table")]
    Table { table: TableBody },
    #[serde(rename = "table_row")]
    TableRow { table_row: TableRowBody },
}

impl BlockRequest {
    pub fn block_type(&self) -> &'static str {
        match self {
            BlockRequest::Paragraph { .. } => "paragraph",
            BlockRequest::Heading1 { .. } => "heading_1",
            BlockRequest::Heading2 { .. } => "heading_2",
            BlockRequest::Heading3 { .. } => "heading_3",
            BlockRequest::BulletedListItem { .. } => "bulleted_list_item",
            BlockRequest::NumberedListItem { .. } => "numbered_list_item",
            BlockRequest::ToDo { .. } => "to_do",
            BlockRequest::Embed { .. } => "embed",
            BlockRequest::Code { .. } => "code",
            BlockRequest::Table { .. } => "table",
            BlockRequest::TableRow { .. } => "table_row",
        }
    }

    /// Rich text of the block's payload; empty for embeds, tables and rows.
    pub fn rich_text(&self) -> &[RichTextRequest] {
        match self {
            BlockRequest::Paragraph { paragraph: body }
            | BlockRequest::Heading1 { heading_1: body }
            | BlockRequest::Heading2 { heading_2: body }
            | BlockRequest::Heading3 { heading_3: body }
            | BlockRequest::BulletedListItem {
                bulleted_list_item: body,
            }
            | BlockRequest::NumberedListItem {
                numbered_list_item: body,
            } => &body.rich_text,
            BlockRequest::ToDo { to_do } => &to_do.text.rich_text,
            BlockRequest::Code { code } => &code.rich_text,
            BlockRequest::Embed { .. } | BlockRequest::Table { .. } | BlockRequest::TableRow { .. } => &[],
        }
    }
}

/// Parent reference of a page to create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageParentRequest {
    pub page_id: PageId,
}

/// `POST pages` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageRequest {
    pub parent: PageParentRequest,
    pub properties: serde_json::Value,
    pub children: Vec<BlockRequest>,
}

impl CreatePageRequest {
    pub fn new(parent: PageId, title: &str, children: Vec<BlockRequest>) -> Self {
        Self {
            parent: PageParentRequest { page_id: parent },
            properties: serde_json::json!({
                "title": {
                    "title": [{"type": "text", "text": {"content": title}}]
                }
            }),
            children,
        }
    }
}

/// `PATCH blocks/{id}/children` body.
#[derive(Debug, Clone, Serialize)]
pub struct AppendChildrenRequest<'a> {
    pub children: &'a [BlockRequest],
}

/// Which kind of object a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFilter {
    #[default]
    Page,
    Database,
}

impl SearchFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFilter::Page => "page",
            SearchFilter::Database => "database",
        }
    }
}

/// Parameters of a workspace search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub filter: SearchFilter,
    pub page_size: usize,
}

impl SearchQuery {
    pub fn pages(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filter: SearchFilter::Page,
            page_size: crate::constants::SEARCH_DEFAULT_LIMIT,
        }
    }

    pub fn databases(query: impl Into<String>) -> Self {
        Self {
            filter: SearchFilter::Database,
            ..Self::pages(query)
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.page_size = limit.clamp(1, crate::constants::NOTION_API_PAGE_SIZE);
        self
    }

    /// The `POST search` body.
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "filter": {"property": "object", "value": self.filter.as_str()},
            "sort": {"direction": "descending", "timestamp": "last_edited_time"},
            "page_size": self.page_size,
        });
        if !self.query.is_empty() {
            body["query"] = serde_json::json!(self.query);
        }
        body
    }
}
