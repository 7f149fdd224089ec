use super::*;

#[test]
fn parse_hex_supports_short_and_long_forms() {
    assert_eq!(Rgb::parse_hex("#ABC").unwrap(), Rgb { red: 170, green: 187, blue: 204 });
    assert_eq!(Rgb::parse_hex("  #a1B2c3 ").unwrap(), Rgb { red: 161, green: 178, blue: 195 });
}

#[test]
fn parse_hex_ignores_alpha_digits() {
    assert_eq!(Rgb::parse_hex("#004E6480").unwrap(), Rgb { red: 0, green: 78, blue: 100 });
    assert_eq!(Rgb::parse_hex("#ffffff00").unwrap(), Rgb { red: 255, green: 255, blue: 255 });
}

#[test]
fn parse_hex_default_teal() {
    assert_eq!(Rgb::parse_hex("#004E64").unwrap(), Rgb { red: 0, green: 78, blue: 100 });
}

#[test]
fn parse_hex_rejects_invalid_inputs() {
    for raw in ["004E64", "#12", "#abcd", "#12GG34", "#1234567", "#123456789", "#004E64GG", "teal", "", "#", "#ééé"] {
        let err = Rgb::parse_hex(raw).unwrap_err();
        assert!(matches!(err, DotFieldError::InvalidColor(ref v) if v == raw), "{raw}");
    }
}

#[test]
fn rgba_formats_css_fill_style() {
    let rgba = Rgb { red: 0, green: 78, blue: 100 }.with_alpha(0.08);
    assert_eq!(rgba.to_string(), "rgba(0, 78, 100, 0.08)");
}

#[test]
fn rgba_formats_whole_alpha_without_fraction() {
    let rgba = Rgb { red: 255, green: 255, blue: 255 }.with_alpha(0.5);
    assert_eq!(rgba.to_string(), "rgba(255, 255, 255, 0.5)");
}

#[test]
fn background_missing_or_transparent_is_no_fill() {
    assert_eq!(Background::from_config(None), Background::Transparent);
    assert_eq!(Background::from_config(Some("")), Background::Transparent);
    assert_eq!(Background::from_config(Some("transparent")), Background::Transparent);
    assert_eq!(Background::from_config(Some(" Transparent ")), Background::Transparent);
    assert_eq!(Background::Transparent.fill(), None);
}

#[test]
fn background_passes_css_color_through() {
    let bg = Background::from_config(Some("#FAF7F2"));
    assert_eq!(bg, Background::Fill("#FAF7F2".into()));
    assert_eq!(bg.fill(), Some("#FAF7F2"));

    let named = Background::from_config(Some("rgb(10, 20, 30)"));
    assert_eq!(named.fill(), Some("rgb(10, 20, 30)"));
}
