//! Source document model.
//!
//! This mirrors what the document API hands out: a flat body of paragraphs, list items and
//! inline images. List structure is not part of the model, see [`crate::tree`].

pub mod elements;
pub mod text;

pub use elements::{GlyphType, HeadingLevel, InlineImage, ListItem, Paragraph, SourceElement};
pub use text::{RichText, SpanStart, TextRun, TextStyle};
