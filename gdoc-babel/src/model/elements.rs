//! Source document elements.

use super::text::{raw_text, RichText};
use serde::{Deserialize, Serialize};

/// A top-level child of the source document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceElement {
    Paragraph(Paragraph),
    ListItem(ListItem),
    InlineImage(InlineImage),
}

impl SourceElement {
    /// Short name used in logs and tree visualizations.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceElement::Paragraph(_) => "Paragraph",
            SourceElement::ListItem(_) => "ListItem",
            SourceElement::InlineImage(_) => "InlineImage",
        }
    }
}

impl From<Paragraph> for SourceElement {
    fn from(paragraph: Paragraph) -> Self {
        SourceElement::Paragraph(paragraph)
    }
}

impl From<ListItem> for SourceElement {
    fn from(item: ListItem) -> Self {
        SourceElement::ListItem(item)
    }
}

impl From<InlineImage> for SourceElement {
    fn from(image: InlineImage) -> Self {
        SourceElement::InlineImage(image)
    }
}

/// Paragraph heading levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// A paragraph, optionally styled as a heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingLevel>,
    #[serde(default)]
    pub children: Vec<RichText>,
}

impl Paragraph {
    pub fn new(children: Vec<RichText>) -> Self {
        Self {
            heading: None,
            children,
        }
    }

    /// A normal paragraph holding one unstyled text child.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![RichText::plain(text)])
    }

    /// A heading holding one unstyled text child.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            heading: Some(level),
            ..Self::plain(text)
        }
    }

    /// Raw text of all children, without formatting.
    pub fn text(&self) -> String {
        raw_text(&self.children)
    }
}

/// Glyph used by a list item's bullet or number.
///
/// Only the glyph of the first item in a list group decides how the group is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphType {
    #[default]
    Bullet,
    HollowBullet,
    SquareBullet,
    Number,
    LatinUpper,
    LatinLower,
    RomanUpper,
    RomanLower,
}

impl GlyphType {
    /// Filled, hollow and square bullets. Everything else is an ordinal glyph.
    pub fn is_bullet(self) -> bool {
        matches!(
            self,
            GlyphType::Bullet | GlyphType::HollowBullet | GlyphType::SquareBullet
        )
    }
}

/// A list item. Lists are not explicit in the source: items only carry their depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub nesting_level: usize,
    #[serde(default)]
    pub glyph: GlyphType,
    #[serde(default)]
    pub children: Vec<RichText>,
}

impl ListItem {
    pub fn new(nesting_level: usize, glyph: GlyphType, children: Vec<RichText>) -> Self {
        Self {
            nesting_level,
            glyph,
            children,
        }
    }

    /// A list item holding one unstyled text child.
    pub fn plain(nesting_level: usize, glyph: GlyphType, text: impl Into<String>) -> Self {
        Self::new(nesting_level, glyph, vec![RichText::plain(text)])
    }

    /// Raw text of all children, without formatting.
    pub fn text(&self) -> String {
        raw_text(&self.children)
    }
}

/// An image embedded in the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    pub content_type: String,
    #[serde(rename = "data", with = "base64_bytes")]
    pub bytes: Vec<u8>,
}

impl InlineImage {
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes,
        }
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.trim()).map_err(D::Error::custom)
    }
}
