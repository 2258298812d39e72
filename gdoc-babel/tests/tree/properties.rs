//! Property tests for the list reconstruction.

use gdoc_babel::model::{GlyphType, ListItem, Paragraph};
use gdoc_babel::{build_forest, ForestNode, SourceElement};
use proptest::prelude::*;

fn element() -> impl Strategy<Value = SourceElement> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|text| SourceElement::from(Paragraph::plain(text))),
        (0usize..4, "[a-z]{1,6}").prop_map(|(depth, text)| {
            SourceElement::from(ListItem::plain(depth, GlyphType::Bullet, text))
        }),
    ]
}

fn leaves(nodes: &[ForestNode], out: &mut Vec<SourceElement>) {
    for node in nodes {
        match node {
            ForestNode::Leaf(element) => out.push(element.clone()),
            ForestNode::ListGroup(group) => leaves(group.children(), out),
        }
    }
}

fn groups_open_with_items(nodes: &[ForestNode]) -> bool {
    nodes.iter().all(|node| match node {
        ForestNode::Leaf(_) => true,
        ForestNode::ListGroup(group) => {
            matches!(
                group.children().first(),
                Some(ForestNode::Leaf(SourceElement::ListItem(_)))
            ) && groups_open_with_items(group.children())
        }
    })
}

proptest! {
    #[test]
    fn document_order_is_preserved(elements in prop::collection::vec(element(), 0..40)) {
        let forest = build_forest(elements.clone());
        let mut flattened = Vec::new();
        leaves(&forest.nodes, &mut flattened);
        prop_assert_eq!(flattened, elements);
    }

    #[test]
    fn every_group_opens_with_an_item(elements in prop::collection::vec(element(), 0..40)) {
        let forest = build_forest(elements);
        prop_assert!(groups_open_with_items(&forest.nodes));
    }

    #[test]
    fn same_depth_run_is_one_group(texts in prop::collection::vec("[a-z]{1,6}", 1..20)) {
        let elements: Vec<SourceElement> = texts
            .iter()
            .map(|text| ListItem::plain(0, GlyphType::Number, text.as_str()).into())
            .collect();
        let forest = build_forest(elements);

        prop_assert_eq!(forest.len(), 1);
        let group = forest.nodes[0].as_group().unwrap();
        prop_assert_eq!(group.children().len(), texts.len());
        prop_assert!(group.children().iter().all(|child| child.as_leaf().is_some()));
    }

    #[test]
    fn top_level_leaves_are_never_list_items(elements in prop::collection::vec(element(), 0..40)) {
        let forest = build_forest(elements);
        prop_assert!(forest
            .iter()
            .all(|node| !matches!(node, ForestNode::Leaf(SourceElement::ListItem(_)))));
    }
}
