//! Integration tests for the full encode → query → decode contract.
//!
//! These pin the externally observable behavior a render engine depends
//! on: canonical hex conversion, gradient transport, default omission,
//! and byte-stable query strings.

use cardwire::color::{normalize, ColorValue};
use cardwire::query::{self, Fill};
use cardwire::{align::Cell, gradient, CardKind, CardStyle, ThemeChoice};

// ===========================================================================
// Color normalization
// ===========================================================================

#[test]
fn rgb_channels_decode_back_to_originals() {
    for (r, g, b) in [(0u8, 0, 0), (255, 255, 255), (18, 52, 86), (200, 100, 50)] {
        let input = format!("rgb({r}, {g}, {b})");
        let ColorValue::Hex(hex) = normalize(&input).unwrap() else {
            panic!("functional color must normalize to hex");
        };
        assert_eq!(hex.len(), 7);
        assert_eq!(hex, hex.to_uppercase());
        assert_eq!(u8::from_str_radix(&hex[1..3], 16).unwrap(), r);
        assert_eq!(u8::from_str_radix(&hex[3..5], 16).unwrap(), g);
        assert_eq!(u8::from_str_radix(&hex[5..7], 16).unwrap(), b);
    }
}

#[test]
fn rgba_alpha_within_rounding_tolerance() {
    for a in [0.0f64, 0.25, 0.5, 0.75, 1.0] {
        let input = format!("rgba(10, 20, 30, {a})");
        let ColorValue::Hex(hex) = normalize(&input).unwrap() else {
            panic!("functional color must normalize to hex");
        };
        assert_eq!(hex.len(), 9, "alpha always emits the fourth pair");
        let decoded = f64::from(u8::from_str_radix(&hex[7..9], 16).unwrap()) / 255.0;
        assert!((decoded - a).abs() <= 1.0 / 255.0);
    }
}

#[test]
fn gradient_strings_never_take_the_hex_path() {
    let inputs = [
        "linear-gradient(90deg, rgb(255,0,0) 0%, #00f 100%)",
        "radial-gradient(circle, #fff, #000)",
    ];
    for input in inputs {
        assert!(normalize(input).unwrap().is_gradient());
    }
}

// ===========================================================================
// Gradient codec
// ===========================================================================

#[test]
fn gradient_token_round_trips_and_is_url_safe() {
    let css = "linear-gradient(90deg, #FC466B 0%, #3F5EFB 100%)";
    let token = gradient::encode(css);
    assert!(!token.contains('+'));
    assert!(!token.contains('/'));
    assert!(!token.contains('='));
    assert_eq!(gradient::decode(&token).unwrap(), css);
}

// ===========================================================================
// Alignment grid
// ===========================================================================

#[test]
fn up_from_top_row_is_a_no_op() {
    use cardwire::Direction;
    for cell in [Cell::TopLeft, Cell::TopMiddle, Cell::TopRight] {
        assert_eq!(cell.step(Direction::Up), cell);
    }
}

#[test]
fn opposite_steps_invert_away_from_edges() {
    use cardwire::Direction::{Down, Left, Right, Up};
    // Interior cell: every direction round-trips.
    let mm = Cell::MiddleMiddle;
    assert_eq!(mm.step(Up).step(Down), mm);
    assert_eq!(mm.step(Left).step(Right), mm);
    // Clamped at an edge: the round trip is not an inverse.
    let tl = Cell::TopLeft;
    assert_eq!(tl.step(Up).step(Down), Cell::MiddleLeft);
}

// ===========================================================================
// Query compiler
// ===========================================================================

#[test]
fn default_outer_pad_is_never_serialized() {
    let style = CardStyle {
        outer_pad: 15,
        ..CardStyle::default()
    };
    let q = query::compile(&ThemeChoice::Custom(style), &CardKind::default(), None);
    assert!(!q.contains("outer_pad"));

    let style = CardStyle {
        outer_pad: 20,
        ..CardStyle::default()
    };
    let q = query::compile(&ThemeChoice::Custom(style), &CardKind::default(), None);
    assert!(q.contains("outer_pad=20"));
}

#[test]
fn named_theme_compiles_to_exactly_one_key() {
    let q = query::compile(
        &ThemeChoice::named("galactic_dusk"),
        &CardKind::default(),
        None,
    );
    assert_eq!(q, "theme=galactic_dusk");
}

#[test]
fn custom_theme_strips_hashes_and_converts_rgb() {
    let style = CardStyle {
        bg_color: Some(normalize("rgb(255,0,0)").unwrap()),
        font_color: Some(normalize("#000000").unwrap()),
        outer_pad: 15,
        ..CardStyle::default()
    };
    let q = query::compile(&ThemeChoice::Custom(style), &CardKind::default(), None);
    assert_eq!(q, "theme=custom&bg_color=FF0000&font_color=000000");
}

#[test]
fn free_text_card_encodes_payload_unpadded() {
    let q = query::compile(
        &ThemeChoice::named("neon_horizon"),
        &CardKind::FreeText,
        Some("Hello, World!"),
    );
    assert_eq!(q, "theme=neon_horizon&text=SGVsbG8sIFdvcmxkIQ");
}

#[test]
fn gradient_override_survives_the_full_round_trip() {
    let css = "linear-gradient(90deg, #FC466B 0%, #3F5EFB 100%)";
    let style = CardStyle {
        bg_color: Some(normalize(css).unwrap()),
        ..CardStyle::default()
    };
    let q = query::compile(&ThemeChoice::Custom(style), &CardKind::default(), None);

    let token = q
        .split('&')
        .find_map(|p| p.strip_prefix("bg_color="))
        .expect("bg_color present");
    assert!(!token.contains(['+', '/', '=']));

    let card = query::decode(&q, &CardKind::default()).unwrap();
    assert_eq!(card.bg_color, Fill::Gradient(css.to_string()));
}

#[test]
fn identical_configurations_compile_byte_identically() {
    let make = || {
        let style = CardStyle {
            card_color: Some(normalize("tomato").unwrap()),
            google_font: Some("Fira Code".to_string()),
            text_align: Some(Cell::BottomRight),
            font_size: 20,
            ..CardStyle::default()
        };
        query::compile(&ThemeChoice::Custom(style), &CardKind::FreeText, Some("hi"))
    };
    assert_eq!(make(), make());
}
