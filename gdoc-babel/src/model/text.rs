//! Styled text as exposed by the source document.
//!
//! The document API does not hand out nested formatting. A [`RichText`] holds its full text
//! plus a list of attribute span starts (character offsets); each span runs until the next
//! start or the end of the text. [`RichText::runs`] turns that into a flat list of
//! [`TextRun`]s, which is what the renderer consumes.

use serde::{Deserialize, Serialize};

/// Style flags active on a span of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub italic: bool,
    pub bold: bool,
    pub underline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

impl TextStyle {
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }
}

/// Start of an attribute span, as a character offset into [`RichText::text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanStart {
    pub start: usize,
    #[serde(flatten)]
    pub style: TextStyle,
}

/// A contiguous piece of text sharing one set of style flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::default())
    }
}

/// A structured text child of a paragraph or list item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<SpanStart>,
}

impl RichText {
    /// Unstyled text with no attribute spans.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Build the attribute-indexed form from already split runs.
    pub fn from_runs<I>(runs: I) -> Self
    where
        I: IntoIterator<Item = TextRun>,
    {
        let mut text = String::new();
        let mut spans = Vec::new();
        let mut offset = 0;

        for run in runs {
            spans.push(SpanStart {
                start: offset,
                style: run.style,
            });
            offset += run.text.chars().count();
            text.push_str(&run.text);
        }

        Self { text, spans }
    }

    /// Split the text into runs.
    ///
    /// Curly single quotes are normalized on the whole text first, so span offsets keep
    /// pointing at the same characters. Text before the first span start (or all of it,
    /// when there are no spans) becomes an unstyled run. Starts past the end of the text
    /// are ignored, and duplicate starts keep the first style given.
    pub fn runs(&self) -> Vec<TextRun> {
        let chars: Vec<char> = normalize_quotes(&self.text).chars().collect();

        let mut starts: Vec<&SpanStart> = self
            .spans
            .iter()
            .filter(|span| span.start < chars.len())
            .collect();
        starts.sort_by_key(|span| span.start);
        starts.dedup_by_key(|span| span.start);

        let mut runs = Vec::with_capacity(starts.len() + 1);

        let first = starts.first().map_or(chars.len(), |span| span.start);
        if first > 0 {
            runs.push(TextRun::plain(chars[..first].iter().collect::<String>()));
        }

        for (i, span) in starts.iter().enumerate() {
            let end = starts.get(i + 1).map_or(chars.len(), |next| next.start);
            runs.push(TextRun::new(
                chars[span.start..end].iter().collect::<String>(),
                span.style.clone(),
            ));
        }

        runs
    }
}

/// Unformatted text of several children, joined and quote-normalized.
pub fn raw_text(children: &[RichText]) -> String {
    let joined: String = children.iter().map(|child| child.text.as_str()).collect();
    normalize_quotes(&joined)
}

/// Replace curly single quotes with straight apostrophes.
pub fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{2018}', '\u{2019}'], "'")
}
