#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

//! # Cardwire
//!
//! The request encoding and style resolution protocol for dynamically
//! generated SVG cards. Everything a card looks like travels in a compact,
//! URL-safe query string; this crate owns both directions of that contract:
//!
//! - **Color normalization** — named tokens, hex, functional `rgb()`/
//!   `rgba()`, and CSS gradients sorted into one canonical form each
//! - **Gradient codec** — raw CSS gradient functions as unpadded
//!   URL-safe base64 tokens
//! - **Alignment grid** — the 9-cell text-anchoring selector with pure,
//!   clamped navigation math
//! - **Style resolution** — named themes vs. the `custom` override set,
//!   with default-omission rules
//! - **Query compilation** — the deterministic query string, and the
//!   decode side that reconstructs identical semantics
//!
//! ## Quick Start
//!
//! ```rust
//! use cardwire::{color, query, CardKind, CardStyle, ThemeChoice};
//!
//! let style = CardStyle {
//!     bg_color: Some(color::normalize("rgb(255,0,0)").unwrap()),
//!     font_color: Some(color::normalize("#000000").unwrap()),
//!     ..CardStyle::default()
//! };
//!
//! let q = query::compile(&ThemeChoice::Custom(style), &CardKind::default(), None);
//! assert_eq!(q, "theme=custom&bg_color=FF0000&font_color=000000");
//! ```
//!
//! Compilation is pure and key order is fixed, so a caller can compare the
//! newly compiled string byte-for-byte against the last one it issued and
//! skip redundant renders.

pub mod align;
pub mod color;
pub mod gradient;
pub mod query;
pub mod style;

pub use align::{Cell, Direction, CELLS};
pub use color::{normalize, normalize_solid, ColorError, ColorValue};
pub use gradient::GradientError;
pub use query::{card_url, compile, decode, DecodeError, Fill, ResolvedCard};
pub use style::{CardKind, CardStyle, ThemeChoice};
