//! The nested document forest.
//!
//! The source body is flat. Rebuilding the list structure is the job of [`TreeBuilder`];
//! this module holds the resulting types. A forest is an ordered sequence of nodes, each
//! either a single source element or a list group. List groups nest.

mod builder;
pub mod treeviz;

pub use builder::{build_forest, TreeBuilder};

use crate::model::{ListItem, SourceElement};

/// The top-level ordered collection of nodes produced by [`TreeBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    pub nodes: Vec<ForestNode>,
}

impl Forest {
    pub fn iter(&self) -> std::slice::Iter<'_, ForestNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a ForestNode;
    type IntoIter = std::slice::Iter<'a, ForestNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// A node of the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForestNode {
    Leaf(SourceElement),
    ListGroup(ListGroup),
}

impl ForestNode {
    pub fn as_group(&self) -> Option<&ListGroup> {
        match self {
            ForestNode::ListGroup(group) => Some(group),
            ForestNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&SourceElement> {
        match self {
            ForestNode::Leaf(element) => Some(element),
            ForestNode::ListGroup(_) => None,
        }
    }
}

/// One level of a list: list item leaves and nested groups, in document order.
///
/// A group is created around its first item, so it is never empty and its first child is
/// always a list item leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGroup {
    children: Vec<ForestNode>,
}

impl ListGroup {
    pub(crate) fn new(first: ListItem) -> Self {
        Self {
            children: vec![ForestNode::Leaf(SourceElement::ListItem(first))],
        }
    }

    pub fn children(&self) -> &[ForestNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ForestNode> {
        &mut self.children
    }

    /// The item that opened this group.
    pub fn first_item(&self) -> Option<&ListItem> {
        match self.children.first() {
            Some(ForestNode::Leaf(SourceElement::ListItem(item))) => Some(item),
            _ => None,
        }
    }

    /// Bullet glyphs render as `ul`, every other glyph as `ol`.
    pub fn tag(&self) -> &'static str {
        match self.first_item() {
            Some(item) if item.glyph.is_bullet() => "ul",
            _ => "ol",
        }
    }
}
