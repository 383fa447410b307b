use std::io::Cursor;

use super::*;

fn img(w: u32, h: u32, px: &[[u8; 4]]) -> RgbaImage {
    RgbaImage::from_raw(w, h, px.concat()).unwrap()
}

#[test]
fn exact_colors_map_to_roles() {
    assert_eq!(role_for_pixel(image::Rgba(RED)), PixelRole::Outline);
    assert_eq!(role_for_pixel(image::Rgba(GREEN)), PixelRole::Accent);
    assert_eq!(role_for_pixel(image::Rgba(BLUE)), PixelRole::Fill);
    assert_eq!(role_for_pixel(image::Rgba(BLACK)), PixelRole::Bit);
    assert_eq!(role_for_pixel(image::Rgba(MAGENTA)), PixelRole::Delimiter);
    assert_eq!(
        role_for_pixel(image::Rgba([255, 255, 255, 255])),
        PixelRole::Background
    );
}

#[test]
fn near_misses_and_translucent_pixels_are_background() {
    assert_eq!(
        role_for_pixel(image::Rgba([254, 0, 0, 255])),
        PixelRole::Background
    );
    assert_eq!(
        role_for_pixel(image::Rgba([0, 0, 0, 128])),
        PixelRole::Background
    );
    assert_eq!(
        role_for_pixel(image::Rgba([0, 0, 0, 0])),
        PixelRole::Background
    );
}

#[test]
fn delimiters_are_recorded_and_drawn_as_background() {
    let t = classify_template(&img(
        3,
        2,
        &[BLACK, MAGENTA, BLACK, BLUE, BLACK, MAGENTA],
    ))
    .unwrap();

    assert_eq!(t.width(), 3);
    assert_eq!(t.height(), 2);
    assert_eq!(t.delimiters(), &[1, 5]);
    assert_eq!(t.roles()[1], PixelRole::Background);
    assert_eq!(t.roles()[5], PixelRole::Background);
    assert_eq!(t.roles().len(), 6);
    assert_eq!(t.delimiter_at(5), Some(1));
    assert_eq!(t.delimiter_at(0), None);
    assert_eq!(t.segment_count(), 2);
    assert_eq!(t.bit_count(), 3);
}

#[test]
fn template_without_delimiters_has_one_segment() {
    let t = Template::from_roles(1, 1, vec![PixelRole::Bit]).unwrap();
    assert!(t.delimiters().is_empty());
    assert_eq!(t.segment_count(), 1);
}

#[test]
fn from_roles_rejects_bad_shapes() {
    assert!(Template::from_roles(0, 3, vec![]).is_err());
    let err = Template::from_roles(2, 2, vec![PixelRole::Bit; 3]).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn decode_template_reads_png_bytes() {
    let src = img(2, 1, &[BLACK, GREEN]);
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(src)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let t = decode_template(&buf).unwrap();
    assert_eq!(t.roles(), &[PixelRole::Bit, PixelRole::Accent]);
}

#[test]
fn decode_template_normalizes_rgb_input() {
    let src = image::RgbImage::from_raw(1, 1, vec![0, 0, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(src)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let t = decode_template(&buf).unwrap();
    assert_eq!(t.roles(), &[PixelRole::Fill]);
}

#[test]
fn malformed_bytes_are_decode_errors() {
    let err = decode_template(b"not a png").unwrap_err();
    assert!(matches!(err, BitSpriteError::Decode(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_template(Path::new("target/does-not-exist/template.png")).unwrap_err();
    assert!(matches!(err, BitSpriteError::Io(_)));
}
