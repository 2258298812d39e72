//! Image extraction during rendering.

use crate::common::{image, p, spaces};
use gdoc_babel::{build_forest, render, ExportError, Renderer};

#[test]
fn test_images_are_numbered_in_document_order() {
    let forest = build_forest(vec![
        image("image/png", &[1]),
        p("between"),
        image("image/jpeg", &[2]),
        image("image/gif", &[3]),
    ]);
    let rendered = render::render(&forest).unwrap();

    let names: Vec<&str> = rendered.assets.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Image_0.png", "Image_1.jpg", "Image_2.gif"]);

    let positions: Vec<usize> = names
        .iter()
        .map(|name| rendered.markup.find(&format!("cid:{name}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(rendered.markup.matches("cid:").count(), 3);
}

#[test]
fn test_image_bytes_are_kept() {
    let rendered = render::render(&build_forest(vec![image("image/png", &[9, 8, 7])])).unwrap();
    assert_eq!(rendered.assets[0].bytes, vec![9, 8, 7]);
    assert_eq!(rendered.assets[0].content_type, "image/png");
    assert_eq!(rendered.markup, "<img src=\"cid:Image_0.png\" />");
}

#[test]
fn test_bmp_aborts_the_render() {
    let forest = build_forest(vec![p("kept?"), image("image/bmp", &[0])]);
    let result = Renderer::new(spaces()).render(&forest);
    assert_eq!(
        result,
        Err(ExportError::UnsupportedAssetType {
            content_type: "image/bmp".to_string()
        })
    );
}

#[test]
fn test_rendering_twice_restarts_numbering() {
    let forest = build_forest(vec![image("image/gif", &[1]), image("image/gif", &[2])]);
    let renderer = Renderer::new(spaces());
    let first = renderer.render(&forest).unwrap();
    let second = renderer.render(&forest).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.assets[1].name, "Image_1.gif");
}
