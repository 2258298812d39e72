//! Inline run formatting through the renderer.

use crate::common::spaces;
use gdoc_babel::model::{Paragraph, RichText, SpanStart, TextRun, TextStyle};
use gdoc_babel::render::inline::{format_runs, link_target};
use gdoc_babel::{build_forest, Renderer};

fn paragraph_html(children: Vec<RichText>) -> String {
    Renderer::new(spaces())
        .render(&build_forest(vec![Paragraph::new(children).into()]))
        .unwrap()
        .markup
}

#[test]
fn test_combined_flags_open_in_fixed_order() {
    let style = TextStyle::default()
        .link("example.com/x")
        .bold()
        .italic();
    let output = format_runs(&[TextRun::new("go", style)]);
    assert_eq!(output, "<i><b><a href=\"http://example.com/x\">go</a></b></i>");
}

#[test]
fn test_underline_sits_between_bold_and_link() {
    let style = TextStyle::default().underline().link("https://example.com/x");
    let output = format_runs(&[TextRun::new("u", style)]);
    assert_eq!(output, "<u><a href=\"https://example.com/x\">u</a></u>");
}

#[test]
fn test_link_targets() {
    assert_eq!(link_target("example.com/x"), "http://example.com/x");
    assert_eq!(link_target("https://example.com/x"), "https://example.com/x");
    assert_eq!(link_target("HTTP://EXAMPLE.COM"), "HTTP://EXAMPLE.COM");
    assert_eq!(link_target("mailto:me@example.com"), "mailto:me@example.com");
    assert_eq!(link_target("ftp://files.example.com"), "ftp://files.example.com");
}

#[test]
fn test_spans_are_rendered_in_order() {
    let text = RichText {
        text: "plain bold tail".to_string(),
        spans: vec![
            SpanStart {
                start: 11,
                style: TextStyle::default(),
            },
            SpanStart {
                start: 6,
                style: TextStyle::default().bold(),
            },
        ],
    };
    assert_eq!(
        paragraph_html(vec![text]),
        "<p>\n  plain <b>bold </b>tail\n</p>"
    );
}

#[test]
fn test_several_children_fall_back_to_raw_text() {
    let bold = RichText::from_runs([TextRun::new("B", TextStyle::default().bold())]);
    let html = paragraph_html(vec![bold, RichText::plain("&c")]);
    assert_eq!(html, "<p>\n  B&amp;c\n</p>");
}

#[test]
fn test_curly_quotes_are_straightened() {
    let html = paragraph_html(vec![RichText::plain("it\u{2019}s \u{2018}ok\u{2019}")]);
    assert_eq!(html, "<p>\n  it's 'ok'\n</p>");
}

#[test]
fn test_empty_link_is_ignored() {
    let style = TextStyle::default().link("  ");
    assert_eq!(format_runs(&[TextRun::new("x", style)]), "x");
}
