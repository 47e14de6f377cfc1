//! Search engine directory.
//!
//! A fixed table of engines. Each entry carries a URL template with a single
//! `{}` slot that the query is substituted into.

use crate::config::DEFAULT_SEARCH_ENGINE;

/// An immutable search engine entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    /// Identifier stored in the config (e.g. `"google"`).
    pub id: &'static str,
    /// Human readable name.
    pub name: &'static str,
    /// Query URL with one `{}` substitution slot.
    pub url_template: &'static str,
    /// Toolbar icon, relative to the working directory.
    pub icon: &'static str,
}

/// Slot in [`SearchEngine::url_template`] replaced by the query.
pub const QUERY_SLOT: &str = "{}";

static SEARCH_ENGINES: [SearchEngine; 5] = [
    SearchEngine {
        id: "google",
        name: "Google",
        url_template: "https://www.google.com/search?q={}",
        icon: "icons/google.png",
    },
    SearchEngine {
        id: "duckduckgo",
        name: "DuckDuckGo",
        url_template: "https://duckduckgo.com/?q={}",
        icon: "icons/duckduckgo.png",
    },
    SearchEngine {
        id: "bing",
        name: "Bing",
        url_template: "https://www.bing.com/search?q={}",
        icon: "icons/bing.png",
    },
    SearchEngine {
        id: "yahoo",
        name: "Yahoo",
        url_template: "https://search.yahoo.com/search?p={}",
        icon: "icons/yahoo.png",
    },
    SearchEngine {
        id: "ecosia",
        name: "Ecosia",
        url_template: "https://www.ecosia.org/search?q={}",
        icon: "icons/ecosia.png",
    },
];

impl SearchEngine {
    /// Build the search URL for `query`.
    ///
    /// The query is inserted as-is, without percent-encoding.
    pub fn search_url(&self, query: &str) -> String {
        self.url_template.replacen(QUERY_SLOT, query, 1)
    }
}

/// All engines in menu order.
pub fn all() -> &'static [SearchEngine] {
    &SEARCH_ENGINES
}

/// Look up an engine by identifier.
pub fn resolve(id: &str) -> Option<&'static SearchEngine> {
    SEARCH_ENGINES.iter().find(|e| e.id == id)
}

/// Look up an engine, falling back to the default engine for unknown ids.
pub fn resolve_or_default(id: &str) -> &'static SearchEngine {
    resolve(id)
        .or_else(|| resolve(DEFAULT_SEARCH_ENGINE))
        .unwrap_or(&SEARCH_ENGINES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_five_engines() {
        let ids: Vec<_> = all().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["google", "duckduckgo", "bing", "yahoo", "ecosia"]);
    }

    #[test]
    fn test_every_template_has_one_slot() {
        for engine in all() {
            assert_eq!(engine.url_template.matches(QUERY_SLOT).count(), 1, "{}", engine.id);
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        assert_eq!(resolve("bing").map(|e| e.name), Some("Bing"));
        assert!(resolve("altavista").is_none());
        assert!(resolve("Google").is_none());
    }

    #[test]
    fn test_resolve_or_default_falls_back_to_google() {
        assert_eq!(resolve_or_default("altavista").id, DEFAULT_SEARCH_ENGINE);
        assert_eq!(resolve_or_default("yahoo").id, "yahoo");
    }

    #[test]
    fn test_search_url() {
        let google = resolve("google").unwrap();
        assert_eq!(google.search_url("cats"), "https://www.google.com/search?q=cats");

        let yahoo = resolve("yahoo").unwrap();
        assert_eq!(yahoo.search_url("dogs"), "https://search.yahoo.com/search?p=dogs");
    }

    #[test]
    fn test_search_url_does_not_encode() {
        let google = resolve("google").unwrap();
        assert_eq!(
            google.search_url("a b&c=d"),
            "https://www.google.com/search?q=a b&c=d"
        );
    }

    #[test]
    fn test_query_containing_slot_is_not_reexpanded() {
        let ddg = resolve("duckduckgo").unwrap();
        assert_eq!(ddg.search_url("{}"), "https://duckduckgo.com/?q={}");
    }
}
