use super::*;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(parse_hex("#ff0000").unwrap(), image::Rgba([255, 0, 0, 255]));
    assert_eq!(parse_hex("00FF00").unwrap(), image::Rgba([0, 255, 0, 255]));
    assert_eq!(parse_hex("#0f8").unwrap(), image::Rgba([0, 255, 136, 255]));
    assert_eq!(
        parse_hex("#0000ff80").unwrap(),
        image::Rgba([0, 0, 255, 128])
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(parse_hex("").is_err());
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("#ffé00").is_err());
}

#[test]
fn spec_forms() {
    assert_eq!(ColorSpec::parse(""), ColorSpec::Default);
    assert_eq!(
        ColorSpec::parse("#ff0000"),
        ColorSpec::Solid(image::Rgba([255, 0, 0, 255]))
    );
    assert_eq!(
        ColorSpec::parse("#ff0000:#0000ff"),
        ColorSpec::Blend(image::Rgba([255, 0, 0, 255]), image::Rgba([0, 0, 255, 255]))
    );
}

#[test]
fn bad_input_falls_back_to_black() {
    assert_eq!(ColorSpec::parse("badInput"), ColorSpec::Solid(BLACK));
    assert_eq!(ColorSpec::parse("#"), ColorSpec::Solid(BLACK));
    assert_eq!(
        ColorSpec::parse("nope:#ffffff"),
        ColorSpec::Blend(BLACK, image::Rgba([255, 255, 255, 255]))
    );
}

#[test]
fn display_and_serde_use_textual_form() {
    let spec = ColorSpec::parse("#FF0000:#00ff0080");
    assert_eq!(spec.to_string(), "#ff0000:#00ff0080");

    let json = serde_json::to_string(&spec).unwrap();
    assert_eq!(json, "\"#ff0000:#00ff0080\"");
    let back: ColorSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);

    assert_eq!(ColorSpec::Default.to_string(), "");
}
