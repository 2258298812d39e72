//! Property tests for rendering flat documents.

use crate::common::spaces;
use gdoc_babel::model::{HeadingLevel, Paragraph};
use gdoc_babel::{build_forest, Renderer, SourceElement};
use proptest::prelude::*;

const LEVELS: [HeadingLevel; 6] = [
    HeadingLevel::H1,
    HeadingLevel::H2,
    HeadingLevel::H3,
    HeadingLevel::H4,
    HeadingLevel::H5,
    HeadingLevel::H6,
];

fn block() -> impl Strategy<Value = (Option<usize>, String)> {
    (prop::option::of(0usize..6), "[a-z]{1,8}")
}

fn element((level, text): &(Option<usize>, String)) -> SourceElement {
    match level {
        Some(index) => Paragraph::heading(LEVELS[*index], text.as_str()).into(),
        None => Paragraph::plain(text.as_str()).into(),
    }
}

fn expected_tag((level, _): &(Option<usize>, String)) -> String {
    match level {
        Some(index) => format!("<{}>", LEVELS[*index].tag()),
        None => "<p>".to_string(),
    }
}

proptest! {
    #[test]
    fn flat_blocks_render_in_input_order(blocks in prop::collection::vec(block(), 0..30)) {
        let elements: Vec<SourceElement> = blocks.iter().map(element).collect();
        let markup = Renderer::new(spaces())
            .render(&build_forest(elements))
            .unwrap()
            .markup;

        let opening: Vec<&str> = markup
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('<') && !line.starts_with("</"))
            .collect();
        let expected: Vec<String> = blocks.iter().map(expected_tag).collect();

        prop_assert_eq!(opening, expected);
    }

    #[test]
    fn flat_block_text_follows_its_tag(blocks in prop::collection::vec(block(), 1..30)) {
        let elements: Vec<SourceElement> = blocks.iter().map(element).collect();
        let markup = Renderer::new(spaces())
            .render(&build_forest(elements))
            .unwrap()
            .markup;

        let texts: Vec<&str> = markup
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('<'))
            .collect();
        let expected: Vec<&str> = blocks.iter().map(|(_, text)| text.as_str()).collect();

        prop_assert_eq!(texts, expected);
    }
}
