//! Styled inline content inside a BlockNote block.

use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Inline formatting of a text span.
///
/// Flags are plain booleans in memory. On the wire they are sparse: written
/// only when set and read as `false` when missing. Colours are optional so
/// that code-block spans can carry the empty style record `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Styles {
    /// The empty style record, `{}`.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Text colour, reading a missing one as the default colour.
    pub fn text_color(&self) -> Color {
        self.text_color.unwrap_or_default()
    }

    /// Background colour, reading a missing one as the default colour.
    pub fn background_color(&self) -> Color {
        self.background_color.unwrap_or_default()
    }
}

/// One piece of inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineSpan {
    Text {
        text: String,
        #[serde(default)]
        styles: Styles,
    },
    /// A hyperlink. Decoded links always wrap exactly one text span.
    Link {
        href: String,
        #[serde(default)]
        content: Vec<InlineSpan>,
    },
}

impl InlineSpan {
    pub fn text(text: impl Into<String>, styles: Styles) -> Self {
        InlineSpan::Text {
            text: text.into(),
            styles,
        }
    }

    pub fn link(href: impl Into<String>, inner: InlineSpan) -> Self {
        InlineSpan::Link {
            href: href.into(),
            content: vec![inner],
        }
    }

    /// Visible text of the span, links included.
    pub fn plain_text(&self) -> String {
        match self {
            InlineSpan::Text { text, .. } => text.clone(),
            InlineSpan::Link { content, .. } => content.iter().map(InlineSpan::plain_text).collect(),
        }
    }

    /// The first text leaf and its styles.
    ///
    /// Links resolve to their first nested text span; an empty link yields `None`.
    pub fn leaf(&self) -> Option<(&str, &Styles)> {
        match self {
            InlineSpan::Text { text, styles } => Some((text, styles)),
            InlineSpan::Link { content, .. } => content.first().and_then(InlineSpan::leaf),
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            InlineSpan::Link { href, .. } => Some(href),
            InlineSpan::Text { .. } => None,
        }
    }
}

/// Concatenated visible text of a span list.
pub fn spans_plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::plain_text).collect()
}
