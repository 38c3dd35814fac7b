//! Query-string compilation and the render-engine decode contract.
//!
//! [`compile`] assembles the final request query from a theme choice, a
//! card variant, and (for the free-text card) the raw text payload. It is
//! pure and emits keys in a fixed order, so identical configurations
//! always produce byte-identical strings — that byte equality is the only
//! request-deduplication signal callers get.
//!
//! [`decode`] is the inverse the render engine performs: it reconstructs a
//! fully resolved configuration, substituting the exact defaults the
//! encoder omitted.
//!
//! # Example
//!
//! ```rust
//! use cardwire::query;
//! use cardwire::style::{CardKind, ThemeChoice};
//!
//! let q = query::compile(&ThemeChoice::named("galactic_dusk"), &CardKind::default(), None);
//! assert_eq!(q, "theme=galactic_dusk");
//! ```

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;
use tracing::{debug, warn};

use crate::align::Cell;
use crate::gradient::{self, GradientError};
use crate::style::{
    CardKind, ThemeChoice, DEFAULT_CARD_MIN_HEIGHT, DEFAULT_CARD_WIDTH, DEFAULT_INNER_PAD,
    DEFAULT_OUTER_PAD,
};

/// Errors produced while decoding a compiled query string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The `theme` key was absent.
    #[error("query string is missing the theme key")]
    MissingTheme,
    /// A numeric field failed to parse.
    #[error("invalid value '{value}' for {key}")]
    InvalidNumber { key: &'static str, value: String },
    /// An unknown text-alignment token.
    #[error("unknown alignment token '{0}'")]
    UnknownAlignment(String),
    /// The free-text payload was not valid base64url UTF-8.
    #[error("invalid text payload")]
    InvalidText,
}

/// Compile the request query string.
///
/// Keys present are exactly: `theme` (always), `text` (iff the free-text
/// variant), and — iff the theme is custom — the override keys that
/// survive the omission rules, in the documented order. The text payload
/// is base64url-encoded without padding and is *not* trimmed.
#[must_use]
pub fn compile(theme: &ThemeChoice, kind: &CardKind, text: Option<&str>) -> String {
    let mut pairs: Vec<(&str, String)> = vec![("theme", theme.token().to_string())];

    if *kind == CardKind::FreeText {
        pairs.push(("text", encode_text(text.unwrap_or(""))));
    }

    if let Some(style) = theme.overrides() {
        pairs.extend(style.resolve(kind));
    }

    let query = pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", form_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    debug!(kind = kind.path(), query, "compiled card query");
    query
}

/// Build the request path for a compiled query: `/{card-path}?{query}`.
#[must_use]
pub fn card_url(kind: &CardKind, query: &str) -> String {
    format!("/{}?{query}", kind.path())
}

/// Encode a free-text payload (base64url, no padding, no trimming).
#[must_use]
pub fn encode_text(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode a free-text payload.
///
/// # Errors
///
/// [`DecodeError::InvalidText`] on malformed base64 or non-UTF-8 bytes.
pub fn decode_text(token: &str) -> Result<String, DecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.as_bytes())
        .map_err(|_| DecodeError::InvalidText)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidText)
}

/// A resolved gradient-capable color slot on the consuming side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Hex (no `#`) or named color.
    Solid(String),
    /// Decoded CSS gradient string.
    Gradient(String),
}

impl Fill {
    /// Interpret a wire value for a gradient-capable slot.
    ///
    /// Plain hex (6 or 8 hex digits) and purely alphabetic named colors
    /// are solids. Anything else is treated as a gradient transport token.
    ///
    /// # Errors
    ///
    /// [`GradientError::InvalidGradientToken`] when a token neither
    /// decodes nor contains a gradient function. Callers degrade to the
    /// default background rather than failing the render.
    pub fn from_wire(value: &str) -> Result<Self, GradientError> {
        if is_bare_hex(value) || value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(Self::Solid(value.to_string()));
        }
        match gradient::decode(value) {
            Ok(css) if css.contains("gradient") => Ok(Self::Gradient(css)),
            _ => Err(GradientError::InvalidGradientToken(value.to_string())),
        }
    }
}

fn is_bare_hex(value: &str) -> bool {
    (value.len() == 6 || value.len() == 8) && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// A card request as the render engine sees it after default substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCard {
    /// Theme token (`custom` included, verbatim).
    pub theme: String,
    /// Decoded free-text payload, if the request carried one.
    pub text: Option<String>,
    pub card_color: Fill,
    pub bg_color: Fill,
    /// Hex (no `#`) or named.
    pub font_color: String,
    pub shadow_color: String,
    pub google_font: Option<String>,
    /// Consuming-side default is top-left, not the picker's center.
    pub text_align: Cell,
    pub outer_pad: u32,
    pub inner_pad: u32,
    pub font_size: u32,
    pub card_width: u32,
    pub card_min_height: u32,
}

impl ResolvedCard {
    fn defaults_for(kind: &CardKind) -> Self {
        Self {
            theme: String::new(),
            text: None,
            card_color: Fill::Solid("ffffff".to_string()),
            bg_color: Fill::Solid("ffffff".to_string()),
            font_color: "000000".to_string(),
            shadow_color: "00000000".to_string(),
            google_font: None,
            text_align: Cell::TopLeft,
            outer_pad: DEFAULT_OUTER_PAD,
            inner_pad: DEFAULT_INNER_PAD,
            font_size: kind.default_font_size(),
            card_width: DEFAULT_CARD_WIDTH,
            card_min_height: DEFAULT_CARD_MIN_HEIGHT,
        }
    }
}

/// Decode a compiled query string into the configuration the encoder
/// meant. Absent keys get the same defaults the encoder compared against;
/// malformed gradient tokens degrade to the default fill instead of
/// failing the request.
///
/// # Errors
///
/// [`DecodeError`] on a missing theme, malformed numerics, unknown
/// alignment tokens, or a bad text payload.
pub fn decode(query: &str, kind: &CardKind) -> Result<ResolvedCard, DecodeError> {
    let mut card = ResolvedCard::defaults_for(kind);
    let mut saw_theme = false;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = form_decode(value);
        match key {
            "theme" => {
                card.theme = value;
                saw_theme = true;
            }
            "text" => card.text = Some(decode_text(&value)?),
            "card_color" => card.card_color = fill_or_default(&value),
            "bg_color" => card.bg_color = fill_or_default(&value),
            "font_color" => card.font_color = value,
            "shadow_color" => card.shadow_color = value,
            "google_font" => card.google_font = Some(value),
            "text_align" => {
                card.text_align =
                    Cell::from_token(&value).ok_or(DecodeError::UnknownAlignment(value))?;
            }
            "outer_pad" => card.outer_pad = parse_px("outer_pad", &value)?,
            "inner_pad" => card.inner_pad = parse_px("inner_pad", &value)?,
            "font_size" => card.font_size = parse_px("font_size", &value)?,
            "card_width" => card.card_width = parse_px("card_width", &value)?,
            "card_min_height" => card.card_min_height = parse_px("card_min_height", &value)?,
            // Unknown keys are ignored; the engine accepts forward-compat
            // extras like cache busters.
            _ => {}
        }
    }

    if !saw_theme {
        return Err(DecodeError::MissingTheme);
    }
    Ok(card)
}

fn fill_or_default(value: &str) -> Fill {
    Fill::from_wire(value).unwrap_or_else(|err| {
        warn!(%err, "bad gradient token, using default fill");
        Fill::Solid("ffffff".to_string())
    })
}

fn parse_px(key: &'static str, value: &str) -> Result<u32, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

/// Form-encode a value (`application/x-www-form-urlencoded`): alphanumerics
/// and `-._~` pass through, space becomes `+`, everything else `%XX`.
fn form_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Reverse of [`form_encode`]. Invalid escapes pass through verbatim.
fn form_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 3 <= bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::normalize;
    use crate::style::CardStyle;

    #[test]
    fn test_named_theme_compiles_to_single_key() {
        let q = compile(&ThemeChoice::named("galactic_dusk"), &CardKind::default(), None);
        assert_eq!(q, "theme=galactic_dusk");
    }

    #[test]
    fn test_free_text_always_carries_text_key() {
        let q = compile(&ThemeChoice::named("techy"), &CardKind::FreeText, None);
        assert_eq!(q, "theme=techy&text=");
    }

    #[test]
    fn test_text_payload_is_base64url() {
        let q = compile(
            &ThemeChoice::named("neon_horizon"),
            &CardKind::FreeText,
            Some("Hello, World!"),
        );
        assert_eq!(q, "theme=neon_horizon&text=SGVsbG8sIFdvcmxkIQ");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let style = CardStyle {
            bg_color: Some(normalize("rgb(255,0,0)").unwrap()),
            outer_pad: 20,
            ..CardStyle::default()
        };
        let theme = ThemeChoice::Custom(style);
        let a = compile(&theme, &CardKind::default(), None);
        let b = compile(&theme, &CardKind::default(), None);
        assert_eq!(a, b);
        assert_eq!(a, "theme=custom&bg_color=FF0000&outer_pad=20");
    }

    #[test]
    fn test_card_url_joins_path_and_query() {
        assert_eq!(
            card_url(&CardKind::FreeText, "theme=techy&text="),
            "/my-card?theme=techy&text="
        );
    }

    #[test]
    fn test_decode_substitutes_defaults() {
        let card = decode("theme=galactic_dusk", &CardKind::default()).unwrap();
        assert_eq!(card.theme, "galactic_dusk");
        assert_eq!(card.outer_pad, 15);
        assert_eq!(card.font_size, 16);
        assert_eq!(card.text_align, Cell::TopLeft);
        assert_eq!(card.card_color, Fill::Solid("ffffff".into()));

        let card = decode("theme=techy&text=", &CardKind::FreeText).unwrap();
        assert_eq!(card.font_size, 12);
        assert_eq!(card.text.as_deref(), Some(""));
    }

    #[test]
    fn test_decode_round_trips_overrides() {
        let style = CardStyle {
            bg_color: Some(normalize("linear-gradient(90deg, #fff 0%, #000 100%)").unwrap()),
            font_color: Some(normalize("rgb(16,16,16)").unwrap()),
            google_font: Some("Fira Code".to_string()),
            card_width: 600,
            ..CardStyle::default()
        };
        let q = compile(&ThemeChoice::Custom(style), &CardKind::default(), None);
        let card = decode(&q, &CardKind::default()).unwrap();
        assert_eq!(
            card.bg_color,
            Fill::Gradient("linear-gradient(90deg, #fff 0%, #000 100%)".into())
        );
        assert_eq!(card.font_color, "101010");
        assert_eq!(card.google_font.as_deref(), Some("Fira Code"));
        assert_eq!(card.card_width, 600);
        assert_eq!(card.inner_pad, 15);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("", &CardKind::default()), Err(DecodeError::MissingTheme));
        assert!(matches!(
            decode("theme=custom&outer_pad=abc", &CardKind::default()),
            Err(DecodeError::InvalidNumber { key: "outer_pad", .. })
        ));
        assert!(matches!(
            decode("theme=custom&text_align=zz", &CardKind::default()),
            Err(DecodeError::UnknownAlignment(_))
        ));
    }

    #[test]
    fn test_bad_gradient_token_degrades_to_default() {
        let card = decode("theme=custom&bg_color=%25%25%25", &CardKind::default()).unwrap();
        assert_eq!(card.bg_color, Fill::Solid("ffffff".into()));
    }

    #[test]
    fn test_form_encoding_round_trip() {
        assert_eq!(form_encode("Fira Code"), "Fira+Code");
        assert_eq!(form_decode("Fira+Code"), "Fira Code");
        assert_eq!(form_decode(&form_encode("100% #real")), "100% #real");
    }
}
