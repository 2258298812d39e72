//! Block layout and list rendering.

use crate::common::{bullet, h, numbered, p, spaces};
use gdoc_babel::model::{GlyphType, HeadingLevel, ListItem};
use gdoc_babel::{build_forest, Renderer, SourceElement};
use insta::assert_snapshot;

fn html(elements: Vec<SourceElement>) -> String {
    Renderer::new(spaces())
        .render(&build_forest(elements))
        .unwrap()
        .markup
}

#[test]
fn test_bullet_glyphs_render_unordered() {
    for glyph in [
        GlyphType::Bullet,
        GlyphType::HollowBullet,
        GlyphType::SquareBullet,
    ] {
        let markup = html(vec![ListItem::plain(0, glyph, "x").into()]);
        assert!(markup.starts_with("<ul>"), "{glyph:?} gave {markup}");
    }
}

#[test]
fn test_ordinal_glyphs_render_ordered() {
    for glyph in [
        GlyphType::Number,
        GlyphType::LatinUpper,
        GlyphType::LatinLower,
        GlyphType::RomanUpper,
        GlyphType::RomanLower,
    ] {
        let markup = html(vec![ListItem::plain(0, glyph, "x").into()]);
        assert!(markup.starts_with("<ol>"), "{glyph:?} gave {markup}");
    }
}

#[test]
fn test_only_first_glyph_decides_list_kind() {
    let markup = html(vec![numbered(0, "one"), bullet(0, "two")]);
    assert!(markup.starts_with("<ol>"));
    assert!(!markup.contains("<ul>"));
}

#[test]
fn test_first_block_has_no_leading_newline() {
    let markup = html(vec![p("a"), p("b")]);
    assert!(markup.starts_with("<p>"));
    assert!(!markup.ends_with('\n'));
}

#[test]
fn test_blank_paragraph_becomes_line_break() {
    let markup = html(vec![p("   ")]);
    assert_eq!(markup, "<br />");
    assert!(!markup.contains("<p>"));
}

#[test]
fn test_all_heading_levels() {
    let levels = [
        (HeadingLevel::H1, "h1"),
        (HeadingLevel::H2, "h2"),
        (HeadingLevel::H3, "h3"),
        (HeadingLevel::H4, "h4"),
        (HeadingLevel::H5, "h5"),
        (HeadingLevel::H6, "h6"),
    ];
    for (level, tag) in levels {
        assert_eq!(
            html(vec![h(level, "x")]),
            format!("<{tag}>\n  x\n</{tag}>")
        );
    }
}

#[test]
fn test_nested_lists_layout() {
    let markup = html(vec![
        h(HeadingLevel::H2, "Plan"),
        numbered(0, "Design"),
        bullet(1, "Sketch"),
        bullet(1, "Review"),
        numbered(0, "Build"),
        p(""),
        p("Done"),
    ]);

    assert_snapshot!(markup, @r"
    <h2>
      Plan
    </h2>
    <ol>
      <li>
        Design
      </li>
      <ul>
        <li>
          Sketch
        </li>
        <li>
          Review
        </li>
      </ul>
      <li>
        Build
      </li>
    </ol>
    <br />
    <p>
      Done
    </p>
    ");
}

#[test]
fn test_text_is_escaped() {
    let markup = html(vec![p("a < b & c > d")]);
    assert_eq!(markup, "<p>\n  a &lt; b &amp; c &gt; d\n</p>");
}
