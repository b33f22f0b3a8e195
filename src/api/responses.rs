// src/api/responses.rs
//! API response types.
//!
//! Only the fields this crate reads are modelled; everything else in a
//! response is ignored. Error envelopes are parsed with notion-client's
//! error object.

use crate::constants::{UNNAMED_WORKSPACE, UNTITLED};
use crate::model::{CreatedPage, ObjectKind, PageTitle, SearchResult, Workspace};
use crate::types::{PageId, RichTextItem};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

pub use notion_client::objects::error::Error as NotionError;

/// Generic paginated response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// A page property; only `title` properties carry runs we read.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyObject {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "runs_or_empty")]
    pub title: Vec<RichTextItem>,
}

/// Database schemas describe a title property as `{}`; only arrays hold runs.
fn runs_or_empty<'de, D>(deserializer: D) -> Result<Vec<RichTextItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}

/// A page or database as returned by `pages/{id}`, `search` and `POST pages`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectResponse {
    #[serde(default = "default_object_kind")]
    pub object: ObjectKind,
    pub id: PageId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: HashMap<String, PropertyObject>,
    /// Databases carry their title at the top level.
    #[serde(default)]
    pub title: Vec<RichTextItem>,
}

fn default_object_kind() -> ObjectKind {
    ObjectKind::Page
}

impl ObjectResponse {
    /// Plain-text title, falling back to "Untitled".
    pub fn title(&self) -> PageTitle {
        let runs = match self.object {
            ObjectKind::Database => &self.title,
            ObjectKind::Page => self
                .properties
                .values()
                .find(|property| property.kind == "title")
                .map(|property| &property.title)
                .unwrap_or(&self.title),
        };
        let text: String = runs.iter().map(|run| run.plain_text.as_str()).collect();
        if text.trim().is_empty() {
            PageTitle::new(UNTITLED)
        } else {
            PageTitle::new(text)
        }
    }

    pub fn into_search_result(self) -> SearchResult {
        SearchResult {
            title: self.title(),
            kind: self.object,
            id: self.id,
            url: self.url,
            last_edited_time: self.last_edited_time,
        }
    }

    pub fn into_created_page(self) -> CreatedPage {
        CreatedPage {
            id: self.id,
            url: self.url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BotInfo {
    #[serde(default)]
    pub workspace_name: Option<String>,
}

/// `users/me`
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bot: Option<BotInfo>,
}

impl UserResponse {
    pub fn into_workspace(self) -> Workspace {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .or_else(|| self.bot.and_then(|bot| bot.workspace_name))
            .unwrap_or_else(|| UNNAMED_WORKSPACE.to_string());
        Workspace { id: self.id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_title_from_title_property() {
        let page: ObjectResponse = serde_json::from_value(json!({
            "object": "page",
            "id": "p1",
            "url": "https://www.notion.so/p1",
            "properties": {
                "Tags": {"id": "t", "type": "multi_select", "multi_select": []},
                "Name": {"id": "title", "type": "title", "title": [
                    {"type": "text", "text": {"content": "Road"}, "plain_text": "Road"},
                    {"type": "text", "text": {"content": "map"}, "plain_text": "map"}
                ]}
            }
        }))
        .unwrap();
        assert_eq!(page.title().as_str(), "Roadmap");
    }

    #[test]
    fn test_untitled_fallback() {
        let page: ObjectResponse = serde_json::from_value(json!({
            "object": "page",
            "id": "p2",
            "properties": {"title": {"type": "title", "title": []}}
        }))
        .unwrap();
        assert_eq!(page.title().as_str(), UNTITLED);
    }

    #[test]
    fn test_database_title_and_search_result() {
        let db: ObjectResponse = serde_json::from_value(json!({
            "object": "database",
            "id": "d1",
            "last_edited_time": "2024-03-01T10:00:00.000Z",
            "title": [{"type": "text", "text": {"content": "Tasks"}, "plain_text": "Tasks"}],
            "properties": {"Name": {"type": "title", "title": {}}}
        }))
        .unwrap();
        let result = db.into_search_result();
        assert_eq!(result.kind, ObjectKind::Database);
        assert_eq!(result.title.as_str(), "Tasks");
        assert!(result.last_edited_time.is_some());
    }

    #[test]
    fn test_pagination_defaults_without_results() {
        let page: PaginatedResponse<ObjectResponse> =
            serde_json::from_value(json!({"object": "list"})).unwrap();
        assert!(page.results.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.next_cursor, None);

        let page: PaginatedResponse<crate::model::Block> = serde_json::from_value(json!({
            "results": [{"id": "b1", "type": "divider", "divider": {}}],
            "next_cursor": "c2",
            "has_more": true
        }))
        .unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.next_cursor.as_deref(), Some("c2"));
    }

    #[test]
    fn test_workspace_name_fallbacks() {
        let user: UserResponse =
            serde_json::from_value(json!({"id": "u1", "name": "Integration"})).unwrap();
        assert_eq!(user.into_workspace().name, "Integration");

        let user: UserResponse = serde_json::from_value(json!({
            "id": "u2", "name": null, "bot": {"workspace_name": "Acme"}
        }))
        .unwrap();
        assert_eq!(user.into_workspace().name, "Acme");

        let user: UserResponse = serde_json::from_value(json!({"id": "u3"})).unwrap();
        assert_eq!(user.into_workspace().name, UNNAMED_WORKSPACE);
    }
}
