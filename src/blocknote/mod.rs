//! The local block-document model, in the BlockNote editor's JSON shape.

mod block;
mod inline;
mod table;

pub use block::{BlockContent, LocalBlock, LocalBlockType, Props, TextAlignment};
pub use inline::{spans_plain_text, InlineSpan, Styles};
pub use table::{TableContent, TableRow};
