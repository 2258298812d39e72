//! HTML rendering of a document forest.
//!
//! # Element Mapping Table
//!
//! | Forest node              | HTML                                  | Notes                                      |
//! |--------------------------|---------------------------------------|--------------------------------------------|
//! | Paragraph                | `<p>`                                 | Empty or blank text becomes `<br />`       |
//! | Paragraph with heading   | `<h1>`..`<h6>`                        | Rendered even when empty                   |
//! | ListItem                 | `<li>`                                |                                            |
//! | ListGroup                | `<ul>` / `<ol>`                       | `ul` when the first glyph is a bullet      |
//! | InlineImage              | `<img src="cid:Image_N.ext" />`       | Bytes extracted as an [`ImageAsset`]       |
//! | Italic / Bold / Underline| `<i>` / `<b>` / `<u>`                 | Fixed nesting order, see [`inline`]        |
//! | Link                     | `<a href="...">`                      | `http://` added to scheme-less targets     |
//!
//! # Output Format
//!
//! Block tags sit on their own lines, with content one indent level deeper than the tags.
//! The first node of every container (the document and each list) starts without a
//! newline; each later sibling starts on a new line. There is no trailing newline and no
//! document wrapper: the result is an HTML fragment meant for an email body or a log.
//!
//! # Assets
//!
//! Images are numbered in traversal order, from zero, per render call. Rendering threads
//! the asset list explicitly: each node renders into a fragment holding its text and
//! the assets it produced, and the parent merges fragments in order. An image with an
//! unsupported content type fails the whole render.

pub mod assets;
pub mod inline;
pub mod markup;

pub use assets::{ImageAsset, ImageKind};

use crate::error::ExportError;
use crate::model::SourceElement;
use crate::tree::{Forest, ForestNode};
use inline::extract_text;
use markup::{escape_attr, Markup};

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// String used for one level of indentation
    pub indent_string: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_string: "\t".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_indent(indent_string: impl Into<String>) -> Self {
        Self {
            indent_string: indent_string.into(),
        }
    }
}

/// A complete render: the markup and every image it references, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub markup: String,
    pub assets: Vec<ImageAsset>,
}

/// Rendered output of one node or node sequence.
#[derive(Debug, Default)]
struct Fragment {
    text: String,
    assets: Vec<ImageAsset>,
}

impl Fragment {
    fn text(text: String) -> Self {
        Self {
            text,
            assets: Vec::new(),
        }
    }

    fn merge(&mut self, other: Fragment) {
        self.text.push_str(&other.text);
        self.assets.extend(other.assets);
    }
}

/// Serializes a [`Forest`] to indented HTML.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the forest. The forest is not modified.
    pub fn render(&self, forest: &Forest) -> Result<Rendered, ExportError> {
        let fragment = self.render_nodes(&forest.nodes, 0, 0)?;
        Ok(Rendered {
            markup: fragment.text,
            assets: fragment.assets,
        })
    }

    fn markup(&self) -> Markup<'_> {
        Markup::new(&self.options.indent_string)
    }

    fn render_nodes(
        &self,
        nodes: &[ForestNode],
        depth: usize,
        next_asset: usize,
    ) -> Result<Fragment, ExportError> {
        let mut fragment = Fragment::default();
        for (index, node) in nodes.iter().enumerate() {
            let child =
                self.render_node(node, depth, index > 0, next_asset + fragment.assets.len())?;
            fragment.merge(child);
        }
        Ok(fragment)
    }

    fn render_node(
        &self,
        node: &ForestNode,
        depth: usize,
        leading_newline: bool,
        next_asset: usize,
    ) -> Result<Fragment, ExportError> {
        let markup = self.markup();

        match node {
            ForestNode::ListGroup(group) => {
                let inner = self.render_nodes(group.children(), depth + 1, next_asset)?;
                Ok(Fragment {
                    text: markup.block(group.tag(), &inner.text, depth, leading_newline),
                    assets: inner.assets,
                })
            }
            ForestNode::Leaf(SourceElement::Paragraph(paragraph)) => {
                let text = extract_text(&paragraph.children);
                let rendered = match paragraph.heading {
                    Some(level) => markup.text_block(level.tag(), &text, depth, leading_newline),
                    None if text.trim().is_empty() => {
                        markup.void("<br />", depth, leading_newline)
                    }
                    None => markup.text_block("p", &text, depth, leading_newline),
                };
                Ok(Fragment::text(rendered))
            }
            ForestNode::Leaf(SourceElement::ListItem(item)) => {
                let text = extract_text(&item.children);
                Ok(Fragment::text(
                    markup.text_block("li", &text, depth, leading_newline),
                ))
            }
            ForestNode::Leaf(SourceElement::InlineImage(image)) => {
                let asset = ImageAsset::from_image(next_asset, image)?;
                log::debug!(
                    "extracted {} ({} bytes) as {}",
                    asset.content_type,
                    asset.bytes.len(),
                    asset.name
                );
                let element = format!("<img src=\"{}\" />", escape_attr(&asset.content_id()));
                Ok(Fragment {
                    text: markup.void(&element, depth, leading_newline),
                    assets: vec![asset],
                })
            }
        }
    }
}

/// Render a forest with default options.
pub fn render(forest: &Forest) -> Result<Rendered, ExportError> {
    Renderer::default().render(forest)
}
