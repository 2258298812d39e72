//! Inline run formatting.
//!
//! Style flags are span attributes in the source, not nested elements. Each run is wrapped
//! on its own, with tags opened in a fixed order and closed in the mirrored order:
//!
//! ```text
//! <i><b><u><a href="...">text</a></u></b></i>
//! ```
//!
//! Only the flags active on a run emit tags. The order does not depend on how the flags were
//! combined in the source.

use super::markup::{escape_attr, escape_text};
use crate::model::text::raw_text;
use crate::model::{RichText, TextRun};

/// Schemes left untouched in link targets. Anything else gets [`DEFAULT_SCHEME`].
pub const RECOGNIZED_SCHEMES: &[&str] = &["http://", "https://", "mailto:", "ftp://"];

pub const DEFAULT_SCHEME: &str = "http://";

/// Markup for the text of a paragraph or list item.
///
/// A single structured child is formatted run by run. Anything else (no children, or
/// several) falls back to the raw text without formatting.
pub fn extract_text(children: &[RichText]) -> String {
    match children {
        [only] => format_runs(&only.runs()),
        _ => escape_text(&raw_text(children)),
    }
}

/// Wrap each run in the tags for its active flags.
pub fn format_runs(runs: &[TextRun]) -> String {
    let mut output = String::new();

    for run in runs {
        let style = &run.style;
        let link = style
            .link_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        if style.italic {
            output.push_str("<i>");
        }
        if style.bold {
            output.push_str("<b>");
        }
        if style.underline {
            output.push_str("<u>");
        }
        if let Some(url) = link {
            output.push_str(&format!("<a href=\"{}\">", escape_attr(&link_target(url))));
        }

        output.push_str(&escape_text(&run.text));

        if link.is_some() {
            output.push_str("</a>");
        }
        if style.underline {
            output.push_str("</u>");
        }
        if style.bold {
            output.push_str("</b>");
        }
        if style.italic {
            output.push_str("</i>");
        }
    }

    output
}

/// Prefix a link target with the default scheme unless it already has a recognized one.
pub fn link_target(url: &str) -> String {
    let lowered = url.to_ascii_lowercase();
    if RECOGNIZED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url}")
    }
}
