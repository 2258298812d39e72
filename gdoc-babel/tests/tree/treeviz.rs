//! Tests for the forest visualization.

use crate::common::{bullet, h, image, p};
use gdoc_babel::build_forest;
use gdoc_babel::model::HeadingLevel;
use gdoc_babel::tree::treeviz::forest_to_treeviz;
use insta::assert_snapshot;

#[test]
fn test_treeviz_of_mixed_document() {
    let forest = build_forest(vec![
        h(HeadingLevel::H1, "Title"),
        bullet(0, "First"),
        bullet(1, "Nested"),
        bullet(0, "Second"),
        p("A paragraph long enough to be cut short by the visualization"),
        image("image/png", &[1, 2, 3]),
    ]);

    assert_snapshot!(forest_to_treeviz(&forest), @r"
    ├─ h1 Title
    ├─ ul 3 items
    │ ├─ li First
    │ ├─ ul 1 items
    │ │ └─ li Nested
    │ └─ li Second
    ├─ p A paragraph long enough to be…
    └─ img image/png (3 bytes)
    ");
}
