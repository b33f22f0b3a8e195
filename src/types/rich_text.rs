//! Notion rich-text runs as they arrive from the API.

use super::Color;
use serde::{Deserialize, Serialize};

/// The kind of rich text content.
///
/// Only `text` runs carry their content inline; mentions and equations are
/// read through `plain_text`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextType {
    Text {
        text: TextContent,
    },
    Mention {
        #[serde(default)]
        mention: serde_json::Value,
    },
    Equation {
        equation: EquationData,
    },
    #[serde(other)]
    Unknown,
}

/// Rich text item with formatting annotations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextItem {
    #[serde(flatten)]
    pub text_type: RichTextType,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    /// The run's visible text.
    ///
    /// Text runs use `text.content`; every other kind falls back to `plain_text`.
    pub fn content(&self) -> &str {
        match &self.text_type {
            RichTextType::Text { text } => &text.content,
            _ => &self.plain_text,
        }
    }

    /// Link target of the run, if any.
    pub fn link_target(&self) -> Option<&str> {
        if let Some(href) = self.href.as_deref() {
            return Some(href);
        }
        match &self.text_type {
            RichTextType::Text { text } => text.link.as_ref().map(|link| link.url.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationData {
    pub expression: String,
}

/// Notion run annotations; any missing field reads as off / default colour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_minimal_text_run() {
        let item: RichTextItem = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "buy milk"},
            "annotations": {}
        }))
        .unwrap();
        assert_eq!(item.content(), "buy milk");
        assert_eq!(item.annotations, Annotations::default());
        assert_eq!(item.link_target(), None);
    }

    #[test]
    fn test_mention_falls_back_to_plain_text() {
        let item: RichTextItem = serde_json::from_value(json!({
            "type": "mention",
            "mention": {"type": "user", "user": {"id": "u1"}},
            "annotations": {"bold": true, "color": "red"},
            "plain_text": "@Ada",
            "href": null
        }))
        .unwrap();
        assert_eq!(item.content(), "@Ada");
        assert!(item.annotations.bold);
        assert_eq!(item.annotations.color, Color::Red);
    }

    #[test]
    fn test_link_from_text_or_href() {
        let item: RichTextItem = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "docs", "link": {"url": "https://example.com"}},
            "plain_text": "docs",
            "href": "https://example.com"
        }))
        .unwrap();
        assert_eq!(item.link_target(), Some("https://example.com"));
    }

    #[test]
    fn test_unknown_run_type_is_tolerated() {
        let item: RichTextItem = serde_json::from_value(json!({
            "type": "something_new",
            "plain_text": "fallback"
        }))
        .unwrap();
        assert_eq!(item.text_type, RichTextType::Unknown);
        assert_eq!(item.content(), "fallback");
    }
}
