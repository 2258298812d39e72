//! Indented block writing.
//!
//! Every block tag puts its tags on their own lines and its content one indent level deeper:
//!
//! ```text
//! <ul>
//!     <li>
//!         text
//!     </li>
//! </ul>
//! ```
//!
//! The leading newline is left to the caller, which knows whether a block is the first child
//! of its container.

pub(crate) struct Markup<'a> {
    indent_unit: &'a str,
}

impl<'a> Markup<'a> {
    pub(crate) fn new(indent_unit: &'a str) -> Self {
        Self { indent_unit }
    }

    fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }

    fn newline(leading_newline: bool) -> &'static str {
        if leading_newline {
            "\n"
        } else {
            ""
        }
    }

    /// A block whose content is already indented.
    pub(crate) fn block(
        &self,
        tag: &str,
        content: &str,
        depth: usize,
        leading_newline: bool,
    ) -> String {
        let indent = self.indent(depth);
        format!(
            "{}{indent}<{tag}>\n{content}\n{indent}</{tag}>",
            Self::newline(leading_newline)
        )
    }

    /// A block holding a single line of text.
    pub(crate) fn text_block(
        &self,
        tag: &str,
        text: &str,
        depth: usize,
        leading_newline: bool,
    ) -> String {
        let content = format!("{}{}", self.indent(depth + 1), text);
        self.block(tag, &content, depth, leading_newline)
    }

    /// A self-closing element on its own line.
    pub(crate) fn void(&self, element: &str, depth: usize, leading_newline: bool) -> String {
        format!(
            "{}{}{element}",
            Self::newline(leading_newline),
            self.indent(depth)
        )
    }
}

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
