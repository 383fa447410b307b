use super::*;

#[test]
fn defaults_match_the_documented_surface() {
    let s = RenderSettings::default();
    assert_eq!(s.fold, Fold::None);
    assert_eq!(s.vert_fold, Fold::None);
    assert_eq!(s.upscale, 1);
    assert_eq!(s.sheet_width, 16);
    assert!(s.outline);
    assert_eq!(s.seed, SeedMode::Entropy);
    assert_eq!(s.policy, ColorPolicy::default());
}

#[test]
fn invalid_sheet_width_falls_back_to_16() {
    for bad in [0, -4, 3, 100, 257, 512, 1000] {
        let cfg = SheetConfig {
            sheet_width: bad,
            ..SheetConfig::default()
        };
        assert_eq!(cfg.resolve().sheet_width, 16, "sheet_width {bad}");
    }
    for good in [1, 2, 32, 256] {
        let cfg = SheetConfig {
            sheet_width: good,
            ..SheetConfig::default()
        };
        assert_eq!(cfg.resolve().sheet_width, good as usize);
    }
}

#[test]
fn invalid_upscale_falls_back_to_1() {
    for (given, want) in [(0, 1), (-3, 1), (1, 1), (4, 4)] {
        let cfg = SheetConfig {
            upscale: given,
            ..SheetConfig::default()
        };
        assert_eq!(cfg.resolve().upscale, want);
    }
}

#[test]
fn legacy_overrides_role_colors() {
    let cfg = SheetConfig {
        legacy: true,
        bit_color: ColorSpec::parse("#ff0000"),
        ..SheetConfig::default()
    };
    assert_eq!(cfg.resolve().policy, ColorPolicy::LegacyGradient);
}

#[test]
fn role_colors_land_in_their_slots() {
    let cfg = SheetConfig {
        accent_color: ColorSpec::parse("#00ff00"),
        outline_color: ColorSpec::parse("#ff0000"),
        ..SheetConfig::default()
    };
    let table = cfg.resolve().policy.table(0);
    assert_eq!(table[PixelRole::Accent], image::Rgba([0, 255, 0, 255]));
    assert_eq!(table[PixelRole::Outline], image::Rgba([255, 0, 0, 255]));
    assert_eq!(table[PixelRole::Bit], image::Rgba([255, 255, 255, 255]));
}

#[test]
fn seed_selection() {
    let fixed = SheetConfig {
        random_seed: false,
        ..SheetConfig::default()
    };
    assert_eq!(fixed.resolve().seed, SeedMode::Fixed(1));

    let explicit = SheetConfig {
        seed: Some(42),
        ..SheetConfig::default()
    };
    assert_eq!(explicit.resolve().seed, SeedMode::Fixed(42));
}

#[test]
fn json_round_trip_and_partial_documents() {
    let cfg = SheetConfig::from_json_str(
        r##"{ "fold": "o", "upscale": 3, "bit_color": "#ff0000:#00ff00", "legacy": false }"##,
    )
    .unwrap();
    assert_eq!(cfg.fold, Fold::Odd);
    assert_eq!(cfg.upscale, 3);
    assert_eq!(cfg.sheet_width, 16);
    assert!(matches!(cfg.bit_color, ColorSpec::Blend(_, _)));

    let text = cfg.to_json_string_pretty().unwrap();
    assert_eq!(SheetConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn unknown_fields_are_serde_errors() {
    let err = SheetConfig::from_json_str(r##"{ "colour": "#fff" }"##).unwrap_err();
    assert!(matches!(err, BitSpriteError::Serde(_)));
}
