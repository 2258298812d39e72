//! Rebuilds nested lists from a flat element sequence.
//!
//! # The High-Level Concept
//!
//! The source body gives us list items one after another, each tagged only with an absolute
//! nesting depth. There is no parent link and no list identity. We reconstruct the nesting
//! by always following the most recently opened chain of list groups: a new item either
//! joins the group at its own depth, or walks one level further down that chain.
//!
//! # The Algorithm
//!
//! Non-list elements are appended as leaves to the top level.
//!
//! For a list item, starting at the top level with an assumed depth of 0:
//!
//! 1. Look at the last entry of the current level.
//! 2. If it is not a list group, open a new group holding the item and stop.
//! 3. If it is a list group and the item's depth equals the assumed depth, append the item
//!    to that group and stop.
//! 4. Otherwise descend into that group, add one to the assumed depth and go back to 1.
//!
//! Example (depths in brackets):
//!
//! ```text
//! A [0]        ul
//! B [1]   =>   ├─ li A
//! C [1]        ├─ ul
//! D [0]        │  ├─ li B
//!              │  └─ li C
//!              └─ li D
//! ```
//!
//! # Limitations
//!
//! The assumed depth only grows by one per step, whatever the declared jump, and an item can
//! only reach the latest chain of groups. A jump of several levels opens a single nested
//! group, and a list that goes shallower and then deeper again reopens under the latest
//! group at each level. Both are kept as-is: insertion never fails, and the mismatch is
//! only logged.

use super::{Forest, ForestNode, ListGroup};
use crate::model::{ListItem, SourceElement};

/// Incrementally builds a [`Forest`] from source elements in document order.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<ForestNode>,
    inserted: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next element of the document.
    pub fn insert(&mut self, element: SourceElement) {
        self.inserted += 1;
        match element {
            SourceElement::ListItem(item) => insert_list_item(&mut self.nodes, item, 0),
            other => self.nodes.push(ForestNode::Leaf(other)),
        }
    }

    /// Number of elements inserted so far.
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// The forest built so far. Calling this repeatedly yields equal forests.
    pub fn build(&self) -> Forest {
        Forest {
            nodes: self.nodes.clone(),
        }
    }

    /// Consume the builder and return its forest.
    pub fn into_forest(self) -> Forest {
        Forest { nodes: self.nodes }
    }
}

impl Extend<SourceElement> for TreeBuilder {
    fn extend<I: IntoIterator<Item = SourceElement>>(&mut self, elements: I) {
        for element in elements {
            self.insert(element);
        }
    }
}

/// Build a forest from a whole element sequence.
pub fn build_forest<I>(elements: I) -> Forest
where
    I: IntoIterator<Item = SourceElement>,
{
    let mut builder = TreeBuilder::new();
    builder.extend(elements);
    builder.into_forest()
}

fn insert_list_item(level: &mut Vec<ForestNode>, item: ListItem, assumed_depth: usize) {
    match level.last_mut() {
        Some(ForestNode::ListGroup(group)) => {
            if item.nesting_level == assumed_depth {
                log::debug!("appended list item to group at depth {assumed_depth}");
                group
                    .children_mut()
                    .push(ForestNode::Leaf(SourceElement::ListItem(item)));
            } else {
                log::debug!("descending past depth {assumed_depth}");
                insert_list_item(group.children_mut(), item, assumed_depth + 1);
            }
        }
        _ => {
            if item.nesting_level != assumed_depth {
                log::debug!(
                    "list item declared at depth {} opened a group at depth {}",
                    item.nesting_level,
                    assumed_depth
                );
            } else {
                log::debug!("opened list group at depth {assumed_depth}");
            }
            level.push(ForestNode::ListGroup(ListGroup::new(item)));
        }
    }
}
