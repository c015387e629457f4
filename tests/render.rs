//! Renderer output tests.

mod common;

use bmpascii::{AsciiRenderer, BmpImage};
use common::bmp_file;

fn render_to_string(renderer: &AsciiRenderer, image: &BmpImage) -> String {
    let mut out = Vec::new();
    renderer.render(image, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn one_by_one_32bit_black_and_white() {
    let black = BmpImage::from_bytes(&bmp_file(1, 1, 32, &[0, 0, 0, 255])).unwrap();
    assert_eq!(render_to_string(&AsciiRenderer::new(), &black), "# \n");

    let white = BmpImage::from_bytes(&bmp_file(1, 1, 32, &[255, 255, 255, 255])).unwrap();
    assert_eq!(render_to_string(&AsciiRenderer::new(), &white), ". \n");
}

#[test]
fn threshold_boundary_is_exclusive() {
    // A B+G+R sum of exactly 384 is not below the cutoff.
    let at = BmpImage::from_bytes(&bmp_file(1, 1, 24, &[128, 128, 128])).unwrap();
    assert_eq!(render_to_string(&AsciiRenderer::new(), &at), ". \n");

    let below = BmpImage::from_bytes(&bmp_file(1, 1, 24, &[128, 128, 127])).unwrap();
    assert_eq!(render_to_string(&AsciiRenderer::new(), &below), "# \n");
}

#[test]
fn rows_render_top_to_bottom() {
    // Dark top row, light bottom row; the bottom-up storage must not
    // leak into the output order.
    let image = BmpImage::from_bytes(&bmp_file(
        2,
        2,
        24,
        &[
            0, 0, 0, 10, 10, 10, // top visual row
            250, 250, 250, 240, 240, 240, // bottom visual row
        ],
    ))
    .unwrap();
    assert_eq!(
        render_to_string(&AsciiRenderer::new(), &image),
        "# # \n. . \n"
    );
}

#[test]
fn custom_threshold_changes_classification() {
    let image = BmpImage::from_bytes(&bmp_file(1, 1, 24, &[50, 50, 50])).unwrap();
    assert_eq!(render_to_string(&AsciiRenderer::new(), &image), "# \n");
    assert_eq!(
        render_to_string(&AsciiRenderer::with_threshold(100), &image),
        ". \n"
    );
}

#[test]
fn alpha_byte_does_not_affect_classification() {
    // Black pixel with opaque alpha still classifies by B+G+R only.
    let image = BmpImage::from_bytes(&bmp_file(1, 1, 32, &[0, 0, 0, 255])).unwrap();
    assert_eq!(image.pixel(0, 0).unwrap().luminance(), 0);
    assert_eq!(render_to_string(&AsciiRenderer::new(), &image), "# \n");
}

#[test]
fn wide_image_one_glyph_per_column() {
    let image = BmpImage::from_bytes(&bmp_file(
        3,
        1,
        24,
        &[0, 0, 0, 255, 255, 255, 0, 0, 0],
    ))
    .unwrap();
    assert_eq!(
        render_to_string(&AsciiRenderer::new(), &image),
        "# . # \n"
    );
}
