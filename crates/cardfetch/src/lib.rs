#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

//! # Cardfetch
//!
//! The external collaborators around the card request protocol:
//!
//! - **preview** — one-shot blocking fetch of a rendered card; failures
//!   surface once, never retried
//! - **stats** — repository statistics with a static fallback; upstream
//!   failures degrade to cached estimates with a success status
//! - **facts** — themed JSON datasets, random selection, localized
//!   headings
//! - **help** — the self-describing theme/card catalog
//!
//! None of these modules participate in the encoding protocol itself;
//! they consume compiled URLs and serve the surrounding endpoints.

pub mod facts;
pub mod help;
pub mod preview;
pub mod stats;

pub use facts::{card_text, load_dataset, pick, Fact, FactsError, Language};
pub use help::{help_document, HelpDocument, HelpEntry};
pub use preview::{FetchError, PreviewClient};
pub use stats::{static_fallback, RepoStats, StatsClient};
