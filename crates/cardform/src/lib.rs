#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

//! # Cardform
//!
//! Producing-side state for card requests: the raw form values a UI or
//! CLI collects, the keyboard-driven alignment picker, and the preview
//! session that suppresses duplicate renders.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardform::{CardForm, PreviewSession};
//!
//! let form = CardForm {
//!     card_name: "jokes-card".to_string(),
//!     theme: "galactic_dusk".to_string(),
//!     ..CardForm::default()
//! };
//! let request = form.build().unwrap();
//!
//! let mut session = PreviewSession::new();
//! assert!(session.submit(&request.url()));
//! assert!(!session.submit(&request.url()));
//! ```

pub mod form;
pub mod key;
pub mod picker;
pub mod session;

pub use form::{CardForm, CardRequest, FormError};
pub use picker::AlignPicker;
pub use session::PreviewSession;
