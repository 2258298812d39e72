//! Source document loading.
//!
//! Documents arrive as JSON: a title and the ordered body children.
//!
//! ```json
//! {
//!   "title": "Meeting notes",
//!   "body": [
//!     {"type": "paragraph", "heading": "h1", "children": [{"text": "Notes"}]},
//!     {"type": "list_item", "nesting_level": 0, "glyph": "bullet", "children": [{"text": "One"}]},
//!     {"type": "inline_image", "content_type": "image/png", "data": "iVBORw0KGgo="}
//!   ]
//! }
//! ```

use crate::error::SourceError;
use crate::model::SourceElement;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Untitled document";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// A source document: its name and its flat body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub body: Vec<SourceElement>,
}

impl SourceDocument {
    pub fn new(title: impl Into<String>, body: Vec<SourceElement>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    pub fn from_json(source: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}
