//! Themed fact datasets and random selection.
//!
//! Preset cards pull one random item from a static JSON dataset. Items may
//! carry a language tag that selects the localized heading used when the
//! card body is templated.

use std::fs;
use std::io;
use std::path::Path;

use rand::prelude::IndexedRandom;
use serde::Deserialize;
use thiserror::Error;

/// Errors loading a fact dataset.
#[derive(Error, Debug)]
pub enum FactsError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset is empty")]
    Empty,
}

/// Template language for localized card headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

/// One dataset item.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Fact {
    pub quote: String,
    /// Optional ISO language code (`hi` selects Hindi template text).
    #[serde(default)]
    pub lang: Option<String>,
}

impl Fact {
    /// The template language for this item.
    #[must_use]
    pub fn language(&self) -> Language {
        match self.lang.as_deref() {
            Some(code) if code.eq_ignore_ascii_case("hi") => Language::Hindi,
            _ => Language::English,
        }
    }
}

/// Load a dataset from a JSON file: a flat array of fact objects.
///
/// # Errors
///
/// [`FactsError`] on I/O failure, malformed JSON, or an empty array.
pub fn load_dataset(path: &Path) -> Result<Vec<Fact>, FactsError> {
    let raw = fs::read_to_string(path)?;
    let facts: Vec<Fact> = serde_json::from_str(&raw)?;
    if facts.is_empty() {
        return Err(FactsError::Empty);
    }
    Ok(facts)
}

/// Pick one random fact from a dataset.
#[must_use]
pub fn pick(facts: &[Fact]) -> Option<&Fact> {
    facts.choose(&mut rand::rng())
}

/// Build the card body for a fact: the language-appropriate heading, a
/// blank line, and the quoted item.
#[must_use]
pub fn card_text(fact: &Fact, english_heading: &str, hindi_heading: &str) -> String {
    let heading = match fact.language() {
        Language::English => english_heading,
        Language::Hindi => hindi_heading,
    };
    format!("{heading}\n\n\"{}\"", fact.quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_and_pick() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"quote": "Bitcoin launched in 2009."}}, {{"quote": "नमस्ते", "lang": "hi"}}]"#
        )
        .unwrap();
        let facts = load_dataset(file.path()).unwrap();
        assert_eq!(facts.len(), 2);
        assert!(pick(&facts).is_some());
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(matches!(load_dataset(file.path()), Err(FactsError::Empty)));
    }

    #[test]
    fn test_language_selects_heading() {
        let en = Fact { quote: "a".into(), lang: None };
        let hi = Fact { quote: "b".into(), lang: Some("hi".into()) };
        assert_eq!(card_text(&en, "Fact of the Day:", "आज का तथ्य:"), "Fact of the Day:\n\n\"a\"");
        assert_eq!(card_text(&hi, "Fact of the Day:", "आज का तथ्य:"), "आज का तथ्य:\n\n\"b\"");
    }

    #[test]
    fn test_unknown_lang_defaults_to_english() {
        let f = Fact { quote: "x".into(), lang: Some("fr".into()) };
        assert_eq!(f.language(), Language::English);
    }
}
