use super::*;
use crate::compose::fold::Fold;
use crate::foundation::core::PixelRole;
use crate::render::sink::InMemorySink;
use crate::template::segments::SeedMode;

use PixelRole::{Background, Bit, Delimiter, Fill};

fn settings() -> RenderSettings {
    RenderSettings {
        seed: SeedMode::deterministic(),
        ..RenderSettings::default()
    }
}

#[test]
fn zero_threads_is_rejected() {
    assert!(build_thread_pool(None).is_ok());
    assert!(build_thread_pool(Some(2)).is_ok());
    let err = build_thread_pool(Some(0)).unwrap_err();
    assert!(matches!(err, BitSpriteError::Validation(_)));
}

#[test]
fn permutation_count_must_match_delimiters() {
    let t = Template::from_roles(2, 1, vec![Delimiter, Bit]).unwrap();
    let err = render_sheet_with_permutations(&t, &SegmentPermutations::default(), &settings(), None)
        .unwrap_err();
    assert!(matches!(err, BitSpriteError::Validation(_)));
}

#[test]
fn composite_dimensions_follow_layout() {
    let t = Template::from_roles(3, 2, vec![Bit, Fill, Background, Bit, Bit, Fill]).unwrap();
    let s = RenderSettings {
        fold: Fold::Odd,
        vert_fold: Fold::Even,
        upscale: 2,
        sheet_width: 32,
        ..settings()
    };
    let sheet = render_sheet(&t, &s, None).unwrap();

    // odd fold: 2*3-1 = 5 wide; even vertical fold: 4 tall
    assert_eq!(sheet.layout.tile_width(), 10);
    assert_eq!(sheet.layout.tile_height(), 8);
    assert_eq!(sheet.composite.dimensions(), (10 * 32, 8 * 8));
}

#[test]
fn sink_receives_every_tile() {
    let t = Template::from_roles(2, 2, vec![Bit, Bit, Fill, Bit]).unwrap();
    let s = RenderSettings {
        upscale: 3,
        threads: Some(2),
        ..settings()
    };
    let sink = InMemorySink::new();
    let sheet = render_sheet(&t, &s, Some(&sink)).unwrap();

    let canvases = sink.into_canvases();
    assert_eq!(canvases.len(), 256);
    for (variant, canvas) in &canvases {
        assert_eq!(canvas, &sheet.tile(*variant), "variant {}", variant.0);
    }
}

#[test]
fn save_png_round_trips() {
    let t = Template::from_roles(1, 1, vec![Bit]).unwrap();
    let sheet = render_sheet(&t, &settings(), None).unwrap();

    let dir = std::path::PathBuf::from("target").join("pipeline_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sheet.png");
    sheet.save_png(&path).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back, sheet.composite);
}
