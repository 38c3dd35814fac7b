//! Raw form values and their conversion into a card request.
//!
//! [`CardForm`] mirrors the producing-side form verbatim: every field is
//! the raw string a form control (or CLI flag) yields. [`CardForm::build`]
//! normalizes the lot into a typed [`CardRequest`] — the only place where
//! color classification, alignment parsing, and numeric fallbacks happen.

use cardwire::align::Cell;
use cardwire::color::{self, ColorError, ColorValue};
use cardwire::style::{CardKind, CardStyle, ThemeChoice};
use cardwire::query;
use thiserror::Error;
use tracing::debug;

/// Errors produced while building a request from raw form values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A color field failed normalization.
    #[error(transparent)]
    Color(#[from] ColorError),
    /// The alignment field held an unknown token.
    #[error("unknown alignment token '{0}'")]
    UnknownAlignment(String),
}

/// Raw, untyped form state. Empty strings mean "not provided".
///
/// Numeric fields are kept as strings because that is what range inputs
/// and CLI flags deliver; unparseable values fall back to the variant's
/// default rather than failing the whole form.
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    /// Card template path slug (`my-card` selects the free-text variant).
    pub card_name: String,
    /// Theme token, or `custom`.
    pub theme: String,
    /// Free-text body (only used by the free-text variant).
    pub custom_text: String,
    pub card_color: String,
    pub bg_color: String,
    pub font_color: String,
    pub shadow_color: String,
    pub google_font: String,
    /// Alignment token (`tl` ... `br`), empty for unset.
    pub text_align: String,
    pub outer_pad: String,
    pub inner_pad: String,
    pub font_size: String,
    pub card_width: String,
    pub card_min_height: String,
}

/// A typed, compiled-ready card request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub theme: ThemeChoice,
    pub kind: CardKind,
    /// Raw free-text payload; only the free-text variant transports it.
    pub text: Option<String>,
}

impl CardRequest {
    /// Compile the query string for this request.
    #[must_use]
    pub fn query(&self) -> String {
        query::compile(&self.theme, &self.kind, self.text.as_deref())
    }

    /// Compile the full request path, `/{card}?{query}`.
    #[must_use]
    pub fn url(&self) -> String {
        query::card_url(&self.kind, &self.query())
    }
}

impl CardForm {
    /// Build a typed request from the raw values.
    ///
    /// A non-`custom` theme ignores every override field. Under `custom`,
    /// color fields are normalized (card/bg gradient-aware, font/shadow
    /// solid-only), the alignment token is parsed, and numeric fields
    /// fall back to the variant default when absent or unparseable.
    ///
    /// # Errors
    ///
    /// [`FormError`] on a malformed functional color or unknown alignment
    /// token.
    pub fn build(&self) -> Result<CardRequest, FormError> {
        let kind = CardKind::from_path(&self.card_name);
        let text = if kind == CardKind::FreeText {
            Some(self.custom_text.clone())
        } else {
            None
        };

        let theme = if self.theme == "custom" {
            ThemeChoice::Custom(self.build_style(&kind)?)
        } else {
            ThemeChoice::named(self.theme.clone())
        };

        debug!(kind = kind.path(), theme = theme.token(), "built card request");
        Ok(CardRequest { theme, kind, text })
    }

    fn build_style(&self, kind: &CardKind) -> Result<CardStyle, FormError> {
        let text_align = if self.text_align.is_empty() {
            None
        } else {
            Some(
                Cell::from_token(&self.text_align)
                    .ok_or_else(|| FormError::UnknownAlignment(self.text_align.clone()))?,
            )
        };

        let defaults = CardStyle::for_kind(kind);
        Ok(CardStyle {
            card_color: gradient_slot(&self.card_color)?,
            bg_color: gradient_slot(&self.bg_color)?,
            font_color: solid_slot(&self.font_color)?,
            shadow_color: solid_slot(&self.shadow_color)?,
            google_font: if self.google_font.is_empty() {
                None
            } else {
                Some(self.google_font.clone())
            },
            text_align,
            outer_pad: px_or(&self.outer_pad, defaults.outer_pad),
            inner_pad: px_or(&self.inner_pad, defaults.inner_pad),
            font_size: px_or(&self.font_size, defaults.font_size),
            card_width: px_or(&self.card_width, defaults.card_width),
            card_min_height: px_or(&self.card_min_height, defaults.card_min_height),
        })
    }
}

/// Gradient-capable color slot: empty means unset.
fn gradient_slot(raw: &str) -> Result<Option<ColorValue>, FormError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        Ok(Some(color::normalize(raw)?))
    }
}

/// Solid-only color slot: empty means unset.
fn solid_slot(raw: &str) -> Result<Option<ColorValue>, FormError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        Ok(Some(color::normalize_solid(raw)?))
    }
}

fn px_or(raw: &str, default: u32) -> u32 {
    raw.trim().parse().unwrap_or(default)
}
