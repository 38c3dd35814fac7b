//! Color classification and normalization.
//!
//! Card colors arrive from pickers and query parameters in several shapes:
//! bare named tokens (`tomato`), hex strings (`#FF8800`, with or without the
//! leading `#`), functional `rgb()`/`rgba()` strings, and whole CSS gradient
//! functions. [`normalize`] sorts an input string into exactly one
//! [`ColorValue`] kind and converts functional colors to canonical hex.
//!
//! # Example
//!
//! ```rust
//! use cardwire::color::{normalize, ColorValue};
//!
//! let c = normalize("rgb(255, 0, 0)").unwrap();
//! assert_eq!(c, ColorValue::Hex("#FF0000".into()));
//! assert_eq!(c.wire(), "FF0000");
//!
//! let g = normalize("linear-gradient(90deg, #fff 0%, #000 100%)").unwrap();
//! assert!(matches!(g, ColorValue::Gradient(_)));
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de;
use thiserror::Error;
use tracing::trace;

/// Functional `rgb()`/`rgba()` pattern: three integer channels, optional
/// float alpha. Unanchored on purpose; classification has already decided
/// the string is rgb-ish before this runs.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"rgba?\s*\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})(?:\s*,\s*(\d*\.?\d+))?\s*\)",
    )
    .expect("rgb pattern is valid")
});

/// Errors produced while normalizing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string looked functional (`rgb`/`rgba`) but did not parse as one,
    /// or a channel/alpha was out of range.
    #[error("invalid color format: '{0}'")]
    InvalidColorFormat(String),
}

/// A classified color. Exactly one kind describes a color at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// Bare token passed through unchanged (`tomato`, `transparent`).
    Named(String),
    /// Hex color carrying its leading `#` in memory (`#FF0000`,
    /// `#FF000080`). Values derived from functional colors are upper-case;
    /// user-typed hex keeps its original casing.
    Hex(String),
    /// A CSS `linear-gradient(...)`/`radial-gradient(...)` string, kept
    /// verbatim. Never normalized to hex; transported via the gradient
    /// codec instead.
    Gradient(String),
}

impl ColorValue {
    /// The transport form: hex colors lose their leading `#`; named tokens
    /// and gradient strings carry nothing to strip.
    ///
    /// Gradient values are returned raw here; encoding them for the wire is
    /// the gradient codec's job.
    #[must_use]
    pub fn wire(&self) -> &str {
        match self {
            Self::Hex(s) => s.strip_prefix('#').unwrap_or(s),
            Self::Named(s) | Self::Gradient(s) => s,
        }
    }

    /// Returns true for the gradient kind.
    #[must_use]
    pub const fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }

    /// The in-memory string, whatever the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(s) | Self::Hex(s) | Self::Gradient(s) => s,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify and normalize a color string.
///
/// Classification order is load-bearing and matches the producing side's
/// historical behavior: the `gradient` check runs before the `rgb` check,
/// so `radial-gradient(..., rgb(0,0,0) ...)` classifies as a gradient, not
/// a functional color.
///
/// 1. Contains `"gradient"` ⇒ [`ColorValue::Gradient`], untouched.
/// 2. Contains `"rgb"` ⇒ functional parse and hex conversion. A matched
///    alpha capture always emits a fourth hex pair, including `1.0`
///    (`rgba(0,0,0,1.0)` ⇒ `#000000FF`, not `#000000`).
/// 3. Anything else passes through: leading `#` ⇒ [`ColorValue::Hex`],
///    otherwise [`ColorValue::Named`]. Hex digit count and character set
///    are not validated.
///
/// # Errors
///
/// [`ColorError::InvalidColorFormat`] if an rgb-ish string fails the
/// functional pattern or has a channel above 255 / alpha outside 0..=1.
pub fn normalize(input: &str) -> Result<ColorValue, ColorError> {
    if input.contains("gradient") {
        trace!(input, "classified as gradient");
        return Ok(ColorValue::Gradient(input.to_string()));
    }
    classify_solid(input)
}

/// Normalize a color slot that never carries gradients (font and shadow
/// colors). The gradient check is skipped entirely: a gradient string fed
/// here either trips the functional parser (gradients usually contain
/// `rgb`) or passes through as an opaque named token.
///
/// # Errors
///
/// Same as [`normalize`] for the functional path.
pub fn normalize_solid(input: &str) -> Result<ColorValue, ColorError> {
    classify_solid(input)
}

fn classify_solid(input: &str) -> Result<ColorValue, ColorError> {
    if input.contains("rgb") {
        return rgb_to_hex(input).map(ColorValue::Hex);
    }
    if input.starts_with('#') {
        return Ok(ColorValue::Hex(input.to_string()));
    }
    Ok(ColorValue::Named(input.to_string()))
}

/// Convert a functional `rgb()`/`rgba()` string to `#RRGGBB[AA]`,
/// upper-case. Alpha is `round(a * 255)`.
fn rgb_to_hex(input: &str) -> Result<String, ColorError> {
    let caps = RGB_RE
        .captures(input)
        .ok_or_else(|| ColorError::InvalidColorFormat(input.to_string()))?;

    let channel = |i: usize| -> Result<u8, ColorError> {
        caps[i]
            .parse::<u8>()
            .map_err(|_| ColorError::InvalidColorFormat(input.to_string()))
    };
    let r = channel(1)?;
    let g = channel(2)?;
    let b = channel(3)?;

    let hex = match caps.get(4) {
        Some(alpha) => {
            let a: f64 = alpha
                .as_str()
                .parse()
                .map_err(|_| ColorError::InvalidColorFormat(input.to_string()))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorError::InvalidColorFormat(input.to_string()));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let a = (a * 255.0).round() as u8;
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}").to_uppercase()
        }
        None => format!("#{r:02x}{g:02x}{b:02x}").to_uppercase(),
    };
    trace!(input, hex, "converted functional color");
    Ok(hex)
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        normalize(&s).map_err(de::Error::custom)
    }
}
