//! Shared builders for the integration tests.

use gdoc_babel::model::{GlyphType, HeadingLevel, InlineImage, ListItem, Paragraph};
use gdoc_babel::{RenderOptions, SourceElement};

pub fn p(text: &str) -> SourceElement {
    Paragraph::plain(text).into()
}

pub fn h(level: HeadingLevel, text: &str) -> SourceElement {
    Paragraph::heading(level, text).into()
}

pub fn bullet(depth: usize, text: &str) -> SourceElement {
    ListItem::plain(depth, GlyphType::Bullet, text).into()
}

pub fn numbered(depth: usize, text: &str) -> SourceElement {
    ListItem::plain(depth, GlyphType::Number, text).into()
}

pub fn image(content_type: &str, bytes: &[u8]) -> SourceElement {
    InlineImage::new(content_type, bytes.to_vec()).into()
}

/// Two-space indentation keeps expected markup readable.
pub fn spaces() -> RenderOptions {
    RenderOptions::with_indent("  ")
}
