//! Preview session: duplicate suppression and embed snippets.
//!
//! The caller that turns a compiled request into a rendered image owns a
//! [`PreviewSession`] and threads it through explicitly — the "last issued
//! URL" is session state, not a process-wide variable. A newly compiled
//! URL that is byte-identical to the last one issued is reported as a
//! duplicate so the caller can skip the fetch; there is no queue and no
//! cancellation, the latest response simply wins.
//!
//! # Example
//!
//! ```rust
//! use cardform::session::PreviewSession;
//!
//! let mut session = PreviewSession::new();
//! assert!(session.submit("/jokes-card?theme=techy"));
//! assert!(!session.submit("/jokes-card?theme=techy")); // identical, skip
//! assert!(session.submit("/jokes-card?theme=anime"));
//! ```

use tracing::debug;

/// Per-session request state for the preview caller.
#[derive(Debug, Clone, Default)]
pub struct PreviewSession {
    last_url: Option<String>,
}

impl PreviewSession {
    /// Creates a session with no request issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a compiled URL about to be issued. Returns `false` when it
    /// is byte-identical to the last issued URL — the caller must skip
    /// re-issuing the fetch. Byte equality of the compiled string is the
    /// only idempotence signal available.
    pub fn submit(&mut self, url: &str) -> bool {
        if self.last_url.as_deref() == Some(url) {
            debug!(url, "duplicate request suppressed");
            return false;
        }
        self.last_url = Some(url.to_string());
        true
    }

    /// The last issued URL, if any.
    #[must_use]
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }
}

/// Humanize a card path slug: `programming-quotes-card` →
/// `Programming Quotes Card`.
#[must_use]
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Markdown embed snippet for a rendered card.
#[must_use]
pub fn markdown_snippet(title: &str, host: &str, url: &str) -> String {
    format!("![{title}]({host}{url})")
}

/// HTML embed snippet for a rendered card.
#[must_use]
pub fn html_snippet(title: &str, host: &str, url: &str) -> String {
    format!("<img src=\"{host}{url}\" alt=\"{title}\" />")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_submission_is_suppressed() {
        let mut session = PreviewSession::new();
        assert!(session.submit("/a?theme=techy"));
        assert!(!session.submit("/a?theme=techy"));
        assert_eq!(session.last_url(), Some("/a?theme=techy"));
    }

    #[test]
    fn test_changed_url_is_issued_again() {
        let mut session = PreviewSession::new();
        assert!(session.submit("/a?theme=techy"));
        assert!(session.submit("/a?theme=anime"));
        // Going back to the first URL issues a fresh request; only the
        // immediately preceding URL is compared.
        assert!(session.submit("/a?theme=techy"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("programming-quotes-card"), "Programming Quotes Card");
        assert_eq!(title_case("my-card"), "My Card");
    }

    #[test]
    fn test_embed_snippets() {
        let url = "/my-card?theme=techy&text=aGk";
        let md = markdown_snippet("My Card", "https://cards.example", url);
        assert_eq!(md, "![My Card](https://cards.example/my-card?theme=techy&text=aGk)");
        let html = html_snippet("My Card", "https://cards.example", url);
        assert!(html.starts_with("<img src=\"https://cards.example/"));
        assert!(html.contains("alt=\"My Card\""));
    }
}
