use super::*;
use crate::encode::variant::encode_variant;
use crate::foundation::core::Variant;
use crate::template::classify::Template;
use crate::template::segments::SegmentPermutations;

use PixelRole::{Accent, Background, Bit, Fill, Outline};

fn working(width: usize, height: usize, roles: Vec<PixelRole>, variant: u8) -> WorkingImage {
    let t = Template::from_roles(width, height, roles).unwrap();
    encode_variant(&t, &SegmentPermutations::default(), Variant(variant)).unwrap()
}

#[test]
fn background_next_to_colored_pixel_becomes_outline() {
    #[rustfmt::skip]
    let mut img = working(3, 3, vec![
        Background, Background, Background,
        Background, Fill,       Background,
        Background, Background, Background,
    ], 0);
    infer_outlines(&mut img);

    #[rustfmt::skip]
    let expected = [
        Background, Outline, Background,
        Outline,    Fill,    Outline,
        Background, Outline, Background,
    ];
    assert_eq!(img.roles(), &expected);
}

#[test]
fn isolated_background_stays_background() {
    let mut img = working(5, 1, vec![Accent, Background, Background, Background, Bit], 255);
    infer_outlines(&mut img);
    assert_eq!(img.roles(), &[Accent, Outline, Background, Outline, Bit]);
}

#[test]
fn cleared_bits_do_not_grow_outlines() {
    // Variant 0 turns the bit into an outline pixel, which is not a source.
    let mut img = working(3, 1, vec![Background, Bit, Background], 0);
    infer_outlines(&mut img);
    assert_eq!(img.roles(), &[Background, Outline, Background]);
}

#[test]
fn edges_do_not_wrap_between_rows() {
    #[rustfmt::skip]
    let mut img = working(3, 2, vec![
        Background, Background, Fill,
        Background, Background, Background,
    ], 0);
    infer_outlines(&mut img);

    #[rustfmt::skip]
    let expected = [
        Background, Outline,    Fill,
        Background, Background, Outline,
    ];
    assert_eq!(img.roles(), &expected);
}

#[test]
fn second_pass_is_a_no_op() {
    #[rustfmt::skip]
    let mut img = working(4, 4, vec![
        Background, Bit,        Background, Background,
        Background, Background, Background, Accent,
        Fill,       Background, Background, Background,
        Background, Background, Bit,        Background,
    ], 0b1111_1111);
    infer_outlines(&mut img);
    let once = img.clone();
    infer_outlines(&mut img);
    assert_eq!(img, once);
}

#[test]
fn fully_colored_template_is_unchanged() {
    let mut img = working(2, 2, vec![Bit, Fill, Accent, Outline], 1);
    infer_outlines(&mut img);
    assert_eq!(img.roles(), &[Bit, Fill, Accent, Outline]);
}
