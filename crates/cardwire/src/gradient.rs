//! URL-safe transport codec for CSS gradient strings.
//!
//! Gradient functions are opaque to the wire format: they travel as
//! unpadded, URL-safe base64 of the raw CSS text. That keeps `+`, `/`, and
//! `=` out of query strings without percent-escaping the whole function.
//!
//! # Example
//!
//! ```rust
//! use cardwire::gradient;
//!
//! let css = "linear-gradient(90deg, #FC466B 0%, #3F5EFB 100%)";
//! let token = gradient::encode(css);
//! assert!(!token.contains(['+', '/', '=']));
//! assert_eq!(gradient::decode(&token).unwrap(), css);
//! ```

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use thiserror::Error;
use tracing::trace;

/// Errors produced while decoding a gradient transport token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    /// The token was not valid URL-safe base64, or did not decode to UTF-8.
    /// Consumers fall back to the default background color instead of
    /// failing the render.
    #[error("invalid gradient token: '{0}'")]
    InvalidGradientToken(String),
}

/// Encode a CSS gradient string for the wire.
///
/// The input is trimmed of surrounding whitespace first; the output uses
/// the URL-safe base64 alphabet with no `=` padding.
#[must_use]
pub fn encode(css_gradient: &str) -> String {
    URL_SAFE_NO_PAD.encode(css_gradient.trim().as_bytes())
}

/// Decode a wire token back to the CSS gradient string.
///
/// Round trip: `decode(encode(s)) == s.trim()` for any gradient string.
///
/// # Errors
///
/// [`GradientError::InvalidGradientToken`] on malformed alphabet, bad
/// length, or non-UTF-8 payload. Never panics.
pub fn decode(token: &str) -> Result<String, GradientError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.as_bytes())
        .map_err(|_| GradientError::InvalidGradientToken(token.to_string()))?;
    let css = String::from_utf8(bytes)
        .map_err(|_| GradientError::InvalidGradientToken(token.to_string()))?;
    trace!(token, css, "decoded gradient token");
    Ok(css)
}

/// Generate a random two-stop CSS linear gradient, for "surprise me"
/// buttons and demo output.
#[must_use]
pub fn random() -> String {
    let mut rng = rand::rng();
    let angle: u16 = rng.random_range(0..360);
    let from: u32 = rng.random_range(0..=0xFF_FFFF);
    let to: u32 = rng.random_range(0..=0xFF_FFFF);
    format!("linear-gradient({angle}deg, #{from:06X} 0%, #{to:06X} 100%)")
}
