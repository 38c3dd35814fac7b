//! Keybinding definitions and matching utilities.
//!
//! Small building block for keyboard-driven form components: a binding is
//! a set of equivalent key names plus help text, and [`matches`] checks a
//! key event against a group of bindings.
//!
//! # Example
//!
//! ```rust
//! use cardform::key::{matches, Binding};
//!
//! let up = Binding::new().keys(&["up", "w"]).help("↑/w", "move up");
//! assert!(matches("w", &[&up]));
//! assert!(!matches("x", &[&up]));
//! ```

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "↑/w").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

/// A keybinding with associated help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Disables the binding; disabled bindings never match.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The key names this binding responds to.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// The help entry for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Whether a key event triggers this binding.
    #[must_use]
    pub fn is_match(&self, key: &str) -> bool {
        !self.disabled && self.keys.iter().any(|k| k == key)
    }
}

/// Returns true if the key matches any of the given bindings.
#[must_use]
pub fn matches(key: &str, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.is_match(key))
}
