//! Theme selection and the custom style override set.
//!
//! A card request either names a server-resolved theme or selects the
//! `custom` theme and supplies every visual parameter itself. The two are
//! mutually exclusive, so the selection is a tagged union: a named theme
//! physically cannot carry overrides.
//!
//! # Example
//!
//! ```rust
//! use cardwire::style::{CardKind, CardStyle, ThemeChoice};
//!
//! let named = ThemeChoice::named("galactic_dusk");
//! assert!(named.overrides().is_none());
//!
//! let custom = ThemeChoice::Custom(CardStyle::default());
//! assert_eq!(custom.token(), "custom");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::align::Cell;
use crate::color::ColorValue;
use crate::gradient;

/// Default padding, width, and height values shared by every card variant.
pub const DEFAULT_OUTER_PAD: u32 = 15;
pub const DEFAULT_INNER_PAD: u32 = 15;
pub const DEFAULT_CARD_WIDTH: u32 = 400;
pub const DEFAULT_CARD_MIN_HEIGHT: u32 = 100;

/// Which card template a request addresses.
///
/// Presets pull their body from a server-side dataset; the free-text
/// variant renders arbitrary caller-supplied text and uses a smaller
/// default font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardKind {
    /// A dataset-backed template, addressed by its path slug
    /// (`jokes-card`, `space-facts-card`, ...).
    Preset(String),
    /// The free-text template.
    FreeText,
}

impl CardKind {
    /// URL path slug for this template.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Preset(slug) => slug,
            Self::FreeText => "my-card",
        }
    }

    /// Default font size in px. The free-text variant defaults smaller.
    #[must_use]
    pub const fn default_font_size(&self) -> u32 {
        match self {
            Self::Preset(_) => 16,
            Self::FreeText => 12,
        }
    }

    /// Parse a path slug; `my-card` is the free-text template.
    #[must_use]
    pub fn from_path(slug: &str) -> Self {
        if slug == "my-card" {
            Self::FreeText
        } else {
            Self::Preset(slug.to_string())
        }
    }
}

impl Default for CardKind {
    fn default() -> Self {
        Self::Preset("random-facts-card".to_string())
    }
}

/// The full visual override set for the `custom` theme.
///
/// Construct with [`CardStyle::default`] (or [`CardStyle::for_kind`] to get
/// the variant-dependent font size) and set the fields that differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    /// Card surface color; may be a gradient. `None` leaves the render
    /// engine's default (`ffffff`).
    pub card_color: Option<ColorValue>,
    /// Page background color; may be a gradient. Default `ffffff`.
    pub bg_color: Option<ColorValue>,
    /// Text color. Never a gradient. Default `000000`.
    pub font_color: Option<ColorValue>,
    /// Drop-shadow color. Never a gradient. Default `00000000`.
    pub shadow_color: Option<ColorValue>,
    /// Google Fonts family name, if any.
    pub google_font: Option<String>,
    /// Text anchoring cell, if explicitly chosen.
    pub text_align: Option<Cell>,
    /// Outer padding in px.
    pub outer_pad: u32,
    /// Inner padding in px.
    pub inner_pad: u32,
    /// Font size in px.
    pub font_size: u32,
    /// Card width in px.
    pub card_width: u32,
    /// Minimum card height in px.
    pub card_min_height: u32,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            card_color: None,
            bg_color: None,
            font_color: None,
            shadow_color: None,
            google_font: None,
            text_align: None,
            outer_pad: DEFAULT_OUTER_PAD,
            inner_pad: DEFAULT_INNER_PAD,
            font_size: 16,
            card_width: DEFAULT_CARD_WIDTH,
            card_min_height: DEFAULT_CARD_MIN_HEIGHT,
        }
    }
}

impl CardStyle {
    /// Defaults for a specific card variant (free text starts at 12px).
    #[must_use]
    pub fn for_kind(kind: &CardKind) -> Self {
        Self {
            font_size: kind.default_font_size(),
            ..Self::default()
        }
    }

    /// Compute the wire key/value pairs for this override set, in the
    /// documented key order.
    ///
    /// Per-field rules:
    /// - `card_color`/`bg_color`: gradients become codec tokens, solids
    ///   become hex/named with the `#` stripped.
    /// - `font_color`/`shadow_color`: always the solid path; gradient
    ///   detection does not apply to these slots.
    /// - `google_font`/`text_align`: present only when set (and, for the
    ///   font, non-empty).
    /// - Numeric fields: present only when they differ from the variant's
    ///   default. Omission is an encoding optimization; decoders substitute
    ///   the same defaults.
    #[must_use]
    pub fn resolve(&self, kind: &CardKind) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(color) = &self.card_color {
            pairs.push(("card_color", fill_value(color)));
        }
        if let Some(color) = &self.bg_color {
            pairs.push(("bg_color", fill_value(color)));
        }
        if let Some(color) = &self.font_color {
            pairs.push(("font_color", color.wire().to_string()));
        }
        if let Some(color) = &self.shadow_color {
            pairs.push(("shadow_color", color.wire().to_string()));
        }

        match self.google_font.as_deref() {
            Some(font) if !font.is_empty() => pairs.push(("google_font", font.to_string())),
            _ => {}
        }
        if let Some(cell) = self.text_align {
            pairs.push(("text_align", cell.token().to_string()));
        }

        if self.outer_pad != DEFAULT_OUTER_PAD {
            pairs.push(("outer_pad", self.outer_pad.to_string()));
        }
        if self.inner_pad != DEFAULT_INNER_PAD {
            pairs.push(("inner_pad", self.inner_pad.to_string()));
        }
        if self.font_size != kind.default_font_size() {
            pairs.push(("font_size", self.font_size.to_string()));
        }
        if self.card_width != DEFAULT_CARD_WIDTH {
            pairs.push(("card_width", self.card_width.to_string()));
        }
        if self.card_min_height != DEFAULT_CARD_MIN_HEIGHT {
            pairs.push(("card_min_height", self.card_min_height.to_string()));
        }

        debug!(kind = kind.path(), count = pairs.len(), "resolved style overrides");
        pairs
    }
}

/// Wire value for a gradient-capable color slot.
fn fill_value(color: &ColorValue) -> String {
    if color.is_gradient() {
        gradient::encode(color.as_str())
    } else {
        color.wire().to_string()
    }
}

/// Either a named, server-resolved theme or the full custom override set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeChoice {
    /// Opaque theme token, resolved entirely by the render engine.
    Named(String),
    /// The `custom` theme with explicit overrides.
    Custom(CardStyle),
}

impl ThemeChoice {
    /// Convenience constructor for a named theme.
    #[must_use]
    pub fn named(token: impl Into<String>) -> Self {
        Self::Named(token.into())
    }

    /// The `theme` query value.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Named(token) => token,
            Self::Custom(_) => "custom",
        }
    }

    /// The override set, present only for the custom theme.
    #[must_use]
    pub const fn overrides(&self) -> Option<&CardStyle> {
        match self {
            Self::Named(_) => None,
            Self::Custom(style) => Some(style),
        }
    }
}

impl Default for ThemeChoice {
    fn default() -> Self {
        Self::Named("techy".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::normalize;

    fn keys(pairs: &[(&'static str, String)]) -> Vec<&'static str> {
        pairs.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_default_style_emits_nothing() {
        let style = CardStyle::default();
        assert!(style.resolve(&CardKind::default()).is_empty());
    }

    #[test]
    fn test_provided_colors_are_emitted_in_order() {
        let style = CardStyle {
            card_color: Some(normalize("#ffffff").unwrap()),
            shadow_color: Some(normalize("rgba(0,0,0,0)").unwrap()),
            ..CardStyle::default()
        };
        let pairs = style.resolve(&CardKind::default());
        assert_eq!(keys(&pairs), vec!["card_color", "shadow_color"]);
        assert_eq!(pairs[0].1, "ffffff");
        assert_eq!(pairs[1].1, "00000000");
    }

    #[test]
    fn test_non_default_numerics_are_emitted() {
        let style = CardStyle {
            outer_pad: 20,
            card_width: 500,
            ..CardStyle::default()
        };
        let pairs = style.resolve(&CardKind::default());
        assert!(pairs.iter().any(|(k, v)| *k == "outer_pad" && v == "20"));
        assert!(pairs.iter().any(|(k, v)| *k == "card_width" && v == "500"));
        assert!(!keys(&pairs).contains(&"inner_pad"));
    }

    #[test]
    fn test_font_size_default_depends_on_variant() {
        let style = CardStyle {
            font_size: 12,
            ..CardStyle::default()
        };
        // 12 is the free-text default: omitted there, emitted for presets.
        assert!(!keys(&style.resolve(&CardKind::FreeText)).contains(&"font_size"));
        assert!(keys(&style.resolve(&CardKind::default())).contains(&"font_size"));
    }

    #[test]
    fn test_gradient_slot_uses_codec() {
        let css = "linear-gradient(90deg, #FC466B 0%, #3F5EFB 100%)";
        let style = CardStyle {
            bg_color: Some(normalize(css).unwrap()),
            ..CardStyle::default()
        };
        let pairs = style.resolve(&CardKind::default());
        let bg = &pairs.iter().find(|(k, _)| *k == "bg_color").unwrap().1;
        assert!(!bg.contains(['+', '/', '=']));
        assert_eq!(crate::gradient::decode(bg).unwrap(), css);
    }

    #[test]
    fn test_empty_google_font_omitted() {
        let style = CardStyle {
            google_font: Some(String::new()),
            ..CardStyle::default()
        };
        assert!(!keys(&style.resolve(&CardKind::default())).contains(&"google_font"));
    }

    #[test]
    fn test_named_theme_has_no_overrides() {
        assert!(ThemeChoice::named("techy").overrides().is_none());
        assert_eq!(ThemeChoice::named("techy").token(), "techy");
        assert_eq!(ThemeChoice::Custom(CardStyle::default()).token(), "custom");
    }

    #[test]
    fn test_card_kind_paths() {
        assert_eq!(CardKind::FreeText.path(), "my-card");
        assert_eq!(CardKind::from_path("my-card"), CardKind::FreeText);
        assert_eq!(
            CardKind::from_path("jokes-card"),
            CardKind::Preset("jokes-card".into())
        );
    }
}
