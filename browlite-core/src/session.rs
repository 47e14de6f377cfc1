//! Live browsing session.
//!
//! Holds the loaded settings, bookmarks and the page being shown. The window
//! owns one `Session` and passes it to handlers; nothing is written to disk
//! until one of the `save_*` methods is called.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::bookmarks::Bookmarks;
use crate::config::{Settings, DEFAULT_SEARCH_ENGINE};
use crate::navigation::{normalize_homepage, Navigation};
use crate::search::{self, SearchEngine};
use crate::store::{Store, StoreError};
use crate::view::PageView;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),
}

/// Result of bookmarking the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkOutcome {
    Added(String),
    AlreadySaved(String),
    NoPage,
}

/// Settings, bookmarks and the current URL of the open window.
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    pub bookmarks: Bookmarks,
    current_url: Option<String>,
}

impl Session {
    pub fn new(settings: Settings, bookmarks: Bookmarks) -> Self {
        if search::resolve(&settings.default_search_engine).is_none() {
            warn!(
                engine = %settings.default_search_engine,
                fallback = DEFAULT_SEARCH_ENGINE,
                "Unknown default search engine in config"
            );
        }
        Self {
            settings,
            bookmarks,
            current_url: None,
        }
    }

    /// Load settings and bookmarks from `store`.
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        Ok(Self::new(store.load_config()?, store.load_bookmarks()?))
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Pick up the URL the page view is showing.
    pub fn sync_url<V: PageView + ?Sized>(&mut self, view: &V) {
        self.current_url = view.current_url().map(str::to_string);
    }

    /// URL to open at startup: the explicit one, else the homepage.
    pub fn start_url(&self, requested: Option<&str>) -> String {
        requested
            .map(str::to_string)
            .unwrap_or_else(|| self.settings.homepage.clone())
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Engine used for searches.
    ///
    /// An unknown configured id falls back to the default engine.
    pub fn active_engine(&self) -> &'static SearchEngine {
        search::resolve_or_default(&self.settings.default_search_engine)
    }

    /// Configured engines that exist in the directory, in config order.
    pub fn selectable_engines(&self) -> Vec<&'static SearchEngine> {
        self.settings
            .available_search_engines
            .iter()
            .filter_map(|id| search::resolve(id))
            .collect()
    }

    /// Make `engine_id` the default search engine.
    pub fn set_search_engine(&mut self, engine_id: &str) -> Result<(), SessionError> {
        let engine = search::resolve(engine_id)
            .ok_or_else(|| SessionError::UnknownEngine(engine_id.to_string()))?;
        self.settings.default_search_engine = engine.id.to_string();
        info!(engine = engine.id, "Search engine changed");
        Ok(())
    }

    /// URL to load for `nav`, if it loads anything.
    ///
    /// `ShowBookmarks` and empty searches load nothing.
    pub fn target_for(&self, nav: &Navigation) -> Option<String> {
        match nav {
            Navigation::Direct(url) => Some(url.clone()),
            Navigation::ShowBookmarks => None,
            Navigation::Search(query) if query.is_empty() => None,
            Navigation::Search(query) => Some(self.active_engine().search_url(query)),
        }
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Set the homepage, adding `https://` if no scheme was given.
    ///
    /// Returns the stored homepage, or `None` if `raw` was blank.
    pub fn set_homepage(&mut self, raw: &str) -> Option<&str> {
        let homepage = normalize_homepage(raw)?;
        info!(%homepage, "Homepage changed");
        self.settings.homepage = homepage;
        Some(&self.settings.homepage)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        debug!(enabled, "Dark mode toggled");
        self.settings.dark_mode = enabled;
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    /// Bookmark the current page.
    pub fn bookmark_current(&mut self) -> BookmarkOutcome {
        let Some(url) = self.current_url.clone() else {
            return BookmarkOutcome::NoPage;
        };
        if self.bookmarks.add(url.clone()) {
            info!(%url, "Bookmark added");
            BookmarkOutcome::Added(url)
        } else {
            BookmarkOutcome::AlreadySaved(url)
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub fn save_config(&self, store: &Store) -> Result<(), StoreError> {
        store.save_config(&self.settings)
    }

    pub fn save_bookmarks(&self, store: &Store) -> Result<(), StoreError> {
        store.save_bookmarks(&self.bookmarks)
    }

    /// Save everything, as done on shutdown.
    pub fn save_all(&self, store: &Store) -> Result<(), StoreError> {
        self.save_config(store)?;
        self.save_bookmarks(store)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::interpret;
    use crate::view::{History, RenderPreferences};
    use tempfile::TempDir;

    /// Page view that records loads instead of rendering.
    #[derive(Default)]
    struct FakeView {
        history: History,
        loads: Vec<String>,
        /// Pages reached without a `load` call, e.g. by clicking a link.
        followed: Vec<String>,
    }

    impl PageView for FakeView {
        fn load(&mut self, url: &str) {
            self.loads.push(url.to_string());
            self.history.visit(url);
        }
        fn back(&mut self) {
            self.history.back();
        }
        fn forward(&mut self) {
            self.history.forward();
        }
        fn reload(&mut self) {}
        fn current_url(&self) -> Option<&str> {
            self.history.current()
        }
        fn apply_preferences(&mut self, _prefs: RenderPreferences) {}
        fn poll_navigation(&mut self) -> bool {
            let mut changed = false;
            for url in self.followed.drain(..) {
                changed |= self.history.record(&url);
            }
            changed
        }
    }

    fn session() -> Session {
        Session::new(Settings::default(), Bookmarks::new())
    }

    #[test]
    fn test_search_resolves_with_active_engine() {
        let session = session();
        assert_eq!(
            session.target_for(&interpret("cats")),
            Some("https://www.google.com/search?q=cats".to_string())
        );
    }

    #[test]
    fn test_direct_and_bookmark_targets() {
        let session = session();
        assert_eq!(
            session.target_for(&interpret("https://example.com")),
            Some("https://example.com".to_string())
        );
        assert_eq!(session.target_for(&interpret("-favs")), None);
        assert_eq!(session.target_for(&interpret("")), None);
    }

    #[test]
    fn test_unknown_engine_falls_back_to_google() {
        let mut session = session();
        session.settings.default_search_engine = "altavista".to_string();
        assert_eq!(session.active_engine().id, "google");
        assert_eq!(
            session.target_for(&Navigation::Search("x".to_string())),
            Some("https://www.google.com/search?q=x".to_string())
        );
        // The stored value is left as configured.
        assert_eq!(session.settings.default_search_engine, "altavista");
    }

    #[test]
    fn test_set_search_engine() {
        let mut session = session();
        session.set_search_engine("bing").unwrap();
        assert_eq!(session.active_engine().id, "bing");

        let err = session.set_search_engine("altavista").unwrap_err();
        assert!(matches!(err, SessionError::UnknownEngine(id) if id == "altavista"));
        assert_eq!(session.settings.default_search_engine, "bing");
    }

    #[test]
    fn test_selectable_engines_skip_unknown_ids() {
        let mut session = session();
        session.settings.available_search_engines =
            vec!["bing".into(), "altavista".into(), "google".into()];
        let ids: Vec<_> = session.selectable_engines().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["bing", "google"]);
    }

    #[test]
    fn test_set_homepage_normalizes() {
        let mut session = session();
        assert_eq!(session.set_homepage("example.org"), Some("https://example.org"));
        assert_eq!(session.settings.homepage, "https://example.org");
        assert_eq!(session.set_homepage(""), None);
        assert_eq!(session.settings.homepage, "https://example.org");
    }

    #[test]
    fn test_start_url() {
        let session = session();
        assert_eq!(session.start_url(None), "https://www.google.com");
        assert_eq!(session.start_url(Some("https://a.test")), "https://a.test");
    }

    #[test]
    fn test_bookmark_current_page() {
        let mut session = session();
        let mut view = FakeView::default();
        assert_eq!(session.bookmark_current(), BookmarkOutcome::NoPage);

        view.load("https://a.test");
        session.sync_url(&view);
        assert_eq!(
            session.bookmark_current(),
            BookmarkOutcome::Added("https://a.test".to_string())
        );
        assert_eq!(
            session.bookmark_current(),
            BookmarkOutcome::AlreadySaved("https://a.test".to_string())
        );
        assert_eq!(session.bookmarks.len(), 1);
    }

    #[test]
    fn test_bookmark_follows_page_reached_by_link() {
        let mut session = session();
        let mut view = FakeView::default();
        view.load("https://a.test");
        session.sync_url(&view);

        view.followed.push("https://b.test".to_string());
        assert!(view.poll_navigation());
        session.sync_url(&view);

        assert_eq!(session.current_url(), Some("https://b.test"));
        assert_eq!(
            session.bookmark_current(),
            BookmarkOutcome::Added("https://b.test".to_string())
        );
        assert!(!view.poll_navigation());
    }

    #[test]
    fn test_sync_follows_view_history() {
        let mut session = session();
        let mut view = FakeView::default();
        view.load("https://a.test");
        view.load("https://b.test");
        view.back();
        session.sync_url(&view);
        assert_eq!(session.current_url(), Some("https://a.test"));
        assert_eq!(view.loads.len(), 2);
    }

    #[test]
    fn test_save_all_and_reload() {
        let temp = TempDir::new().unwrap();
        let store = Store::open_at(temp.path()).unwrap();

        let mut session = session();
        session.set_dark_mode(false);
        session.bookmarks.add("https://a.test");
        session.save_all(&store).unwrap();

        let loaded = Session::load(&store).unwrap();
        assert!(!loaded.settings.dark_mode);
        assert_eq!(loaded.bookmarks, session.bookmarks);
        assert_eq!(loaded.current_url(), None);
    }
}
