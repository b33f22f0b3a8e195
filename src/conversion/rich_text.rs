// src/conversion/rich_text.rs
//! Notion rich-text runs ⇄ local inline spans.

use crate::api::requests::{AnnotationsRequest, RichTextRequest};
use crate::blocknote::{InlineSpan, Styles};
use crate::constants::NOTION_TEXT_CONTENT_LIMIT;
use crate::types::{Annotations, Color, RichTextItem};

/// Decodes a block's runs into spans, one span per run.
///
/// Runs inside code blocks keep their text but lose all styling.
pub fn decode_spans(runs: &[RichTextItem], code_block: bool) -> Vec<InlineSpan> {
    runs.iter().map(|run| decode_span(run, code_block)).collect()
}

/// Decodes one run: a `link` wrapping a single text span when the run has a
/// target, a `text` span otherwise.
pub fn decode_span(run: &RichTextItem, code_block: bool) -> InlineSpan {
    let styles = if code_block {
        Styles::plain()
    } else {
        extract_styles(&run.annotations)
    };
    let text = InlineSpan::text(run.content(), styles);
    match run.link_target() {
        Some(href) => InlineSpan::link(href, text),
        None => text,
    }
}

/// Local styles of Notion annotations.
///
/// Notion keeps a single colour per run; it lands in `textColor` as is and
/// the background is always the default.
pub fn extract_styles(annotations: &Annotations) -> Styles {
    Styles {
        bold: annotations.bold,
        italic: annotations.italic,
        underline: annotations.underline,
        strike: annotations.strikethrough,
        code: annotations.code,
        text_color: Some(annotations.color),
        background_color: Some(Color::Default),
    }
}

/// Notion annotations for local styles.
pub fn annotations_for(styles: &Styles) -> AnnotationsRequest {
    let text_color = styles.text_color();
    let background = styles.background_color();
    let color = if text_color.is_default() && !background.is_default() {
        background.as_background()
    } else {
        text_color
    };

    AnnotationsRequest {
        bold: styles.bold,
        italic: styles.italic,
        strikethrough: styles.strike,
        underline: styles.underline,
        code: styles.code,
        color,
    }
}

/// Encodes one span as a Notion text run.
///
/// Links take their text and styles from the first nested span.
pub fn encode_span(span: &InlineSpan) -> RichTextRequest {
    let (text, styles) = span.leaf().unwrap_or(("", &EMPTY_STYLES));
    let request =
        RichTextRequest::plain(clamp_content(text)).with_annotations(annotations_for(styles));
    match span.href() {
        Some(href) => request.with_link(href),
        None => request,
    }
}

/// Cuts `text` to the longest prefix Notion accepts as one run.
pub(crate) fn clamp_content(text: &str) -> &str {
    match text.char_indices().nth(NOTION_TEXT_CONTENT_LIMIT) {
        Some((cut, _)) => {
            log::warn!(
                "Truncating a {}-character text run to {} characters",
                text.chars().count(),
                NOTION_TEXT_CONTENT_LIMIT
            );
            &text[..cut]
        }
        None => text,
    }
}

static EMPTY_STYLES: Styles = Styles {
    bold: false,
    italic: false,
    underline: false,
    strike: false,
    code: false,
    text_color: None,
    background_color: None,
};

/// Rich text for an exported block: its first span only.
pub fn encode_first_span(spans: &[InlineSpan]) -> Vec<RichTextRequest> {
    if spans.len() > 1 {
        log::debug!(
            "Exporting only the first of {} inline spans; the rest are dropped",
            spans.len()
        );
    }
    spans.first().map(encode_span).into_iter().collect()
}
