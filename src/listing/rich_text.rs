//! Rich-text helpers.

use crate::models::RichTextBlock;

/// Block type holding body text.
pub const PARAGRAPH: &str = "paragraph";

/// Plain-text rendition of a rich-text field: text-bearing blocks joined by `separator`.
pub fn as_text(blocks: &[RichTextBlock], separator: &str) -> String {
    blocks
        .iter()
        .filter_map(|block| block.text.as_deref())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Text of the first paragraph block, or `""` when the field has none.
pub fn first_paragraph(blocks: &[RichTextBlock]) -> &str {
    blocks
        .iter()
        .find(|block| block.kind == PARAGRAPH)
        .and_then(|block| block.text.as_deref())
        .unwrap_or("")
}
