//! Tree visualization of a forest.
//!
//! One line per node, nesting drawn with box connectors:
//!
//! ```text
//! ├─ h1 Title
//! ├─ ul 3 items
//! │ ├─ li First
//! │ ├─ ol 1 items
//! │ │ └─ li Nested
//! │ └─ li Second
//! └─ img image/png (2048 bytes)
//! ```
//!
//! Labels are truncated to 30 characters. This is a debugging aid for the list
//! reconstruction, not an export format.

use super::{Forest, ForestNode};
use crate::model::SourceElement;

const MAX_LABEL_CHARS: usize = 30;

/// Render a forest as a tree visualization.
pub fn forest_to_treeviz(forest: &Forest) -> String {
    let mut output = String::new();
    format_nodes(&forest.nodes, "", &mut output);
    output
}

fn format_nodes(nodes: &[ForestNode], prefix: &str, output: &mut String) {
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index == nodes.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };

        output.push_str(&format!(
            "{prefix}{connector} {} {}\n",
            node_tag(node),
            truncate(&node_label(node))
        ));

        if let ForestNode::ListGroup(group) = node {
            let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            format_nodes(group.children(), &child_prefix, output);
        }
    }
}

fn node_tag(node: &ForestNode) -> &'static str {
    match node {
        ForestNode::ListGroup(group) => group.tag(),
        ForestNode::Leaf(SourceElement::Paragraph(paragraph)) => {
            paragraph.heading.map_or("p", |level| level.tag())
        }
        ForestNode::Leaf(SourceElement::ListItem(_)) => "li",
        ForestNode::Leaf(SourceElement::InlineImage(_)) => "img",
    }
}

fn node_label(node: &ForestNode) -> String {
    match node {
        ForestNode::ListGroup(group) => format!("{} items", group.children().len()),
        ForestNode::Leaf(SourceElement::Paragraph(paragraph)) => paragraph.text(),
        ForestNode::Leaf(SourceElement::ListItem(item)) => item.text(),
        ForestNode::Leaf(SourceElement::InlineImage(image)) => {
            format!("{} ({} bytes)", image.content_type, image.bytes.len())
        }
    }
}

fn truncate(label: &str) -> String {
    let label = label.trim();
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}…")
    } else {
        label.to_string()
    }
}
