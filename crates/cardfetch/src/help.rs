//! The self-describing help document.
//!
//! The card service exposes a JSON catalog of its themes and card
//! templates with ready-to-paste example URLs. This module builds that
//! document for a given service origin.

use std::collections::BTreeMap;

use cardwire::query;
use cardwire::style::{CardKind, ThemeChoice};
use serde::Serialize;

/// Theme tokens the render engine ships with, plus `custom`.
pub const THEMES: &[(&str, &str)] = &[
    ("techy", "Techy Theme"),
    ("neon_horizon", "Neon Horizon Theme"),
    ("anime", "Anime Theme"),
    ("galactic_dusk", "Galactic Dusk Theme"),
    ("aurora_borealis", "Aurora Borealis Theme"),
    ("retro_block", "Retro Block Theme"),
    ("rainbow_vortex", "Rainbow Vortex Theme"),
    ("endless_constellation", "Endless Constellation Theme"),
    ("lemonade", "Lemonade Theme"),
    ("vintage", "Vintage Theme"),
    ("galaxy", "Galaxy Theme"),
    ("cyber_grid", "Cyber Grid Theme"),
    ("digital_rain", "Digital Rain Theme"),
];

/// Card template slugs with their descriptions.
pub const CARDS: &[(&str, &str)] = &[
    ("jokes-card", "Random programming jokes card"),
    ("programming-quotes-card", "Random programming quotes card"),
    ("programming-facts-card", "Random programming facts card"),
    ("motivational-quotes-card", "Random motivational quotes card"),
    ("travel-destinations-card", "Generates a random travel destination and an interesting fact."),
    ("random-facts-card", "Generates a random interesting fact"),
    ("space-facts-card", "Random space and astronomy facts"),
    ("harry-potter-spell-card", "Generates a random spell from the Harry Potter books"),
    ("blockchain-web3-facts-card", "Generates a random blockchain fact."),
    ("my-card", "Special card to show the customized text only."),
];

/// One help entry: a description plus example URLs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HelpEntry {
    pub info: String,
    pub example: Vec<String>,
}

/// The full help document served at `/help`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HelpDocument {
    pub themes: BTreeMap<String, HelpEntry>,
    pub cards: BTreeMap<String, HelpEntry>,
}

/// Build the help document for a service origin.
///
/// Example URLs go through the same compiler real requests do, so the
/// catalog can never drift from the wire format.
#[must_use]
pub fn help_document(base_url: &str) -> HelpDocument {
    let example_url = |slug: &str, token: &str| {
        let kind = CardKind::from_path(slug);
        let text = (kind == CardKind::FreeText).then_some("Hello World");
        let query = query::compile(&ThemeChoice::named(token), &kind, text);
        format!("{base_url}{}", query::card_url(&kind, &query))
    };

    let themes = THEMES
        .iter()
        .map(|(token, info)| {
            let entry = HelpEntry {
                info: (*info).to_string(),
                example: CARDS
                    .iter()
                    .filter(|(slug, _)| *slug != "my-card")
                    .map(|(slug, _)| example_url(slug, token))
                    .collect(),
            };
            ((*token).to_string(), entry)
        })
        .collect();

    let cards = CARDS
        .iter()
        .map(|(slug, info)| {
            let entry = HelpEntry {
                info: (*info).to_string(),
                example: vec![example_url(slug, "techy")],
            };
            ((*slug).to_string(), entry)
        })
        .collect();

    HelpDocument { themes, cards }
}
