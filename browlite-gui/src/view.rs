//! Page views the window can host.
//!
//! With the `webview` feature pages render inside the window. Without it, or
//! when the platform webview cannot be created, pages open in the system
//! browser.

use browlite_core::{History, PageView, RenderPreferences};
use eframe::egui;
use tracing::{debug, warn};

/// A [`PageView`] as the window uses it.
pub trait WindowView: PageView {
    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// Preferences last applied, if any.
    fn preferences(&self) -> Option<RenderPreferences>;

    /// Error from the most recent navigation, if it failed.
    fn last_error(&self) -> Option<&str>;

    /// Whether pages are drawn inside the window.
    fn is_embedded(&self) -> bool {
        false
    }

    /// Place the page in `area`, in window points.
    fn set_area(&mut self, _area: egui::Rect) {}

    /// Show or hide the page, e.g. while a dialog covers it.
    fn set_visible(&mut self, _visible: bool) {}
}

/// Create the best view available.
pub fn create(cc: &eframe::CreationContext<'_>) -> Box<dyn WindowView> {
    #[cfg(feature = "webview")]
    {
        match crate::webview::EmbeddedView::new(cc) {
            Ok(view) => return Box::new(view),
            Err(e) => warn!("Embedded webview unavailable, using the system browser: {e:#}"),
        }
    }
    #[cfg(not(feature = "webview"))]
    let _ = cc;

    Box::new(SystemBrowserView::new())
}

// =============================================================================
// System Browser
// =============================================================================

/// Hands every navigation to the system browser and tracks history locally.
#[derive(Debug, Default)]
pub struct SystemBrowserView {
    history: History,
    prefs: Option<RenderPreferences>,
    last_error: Option<String>,
}

impl SystemBrowserView {
    pub fn new() -> Self {
        Self::default()
    }

    fn open(&mut self, url: &str) {
        debug!(url, "Opening in system browser");
        if let Err(e) = webbrowser::open(url) {
            warn!(url, error = %e, "Failed to open URL");
            self.last_error = Some(e.to_string());
        }
    }
}

impl PageView for SystemBrowserView {
    fn load(&mut self, url: &str) {
        self.last_error = None;
        self.history.visit(url);
        self.open(url);
    }

    fn back(&mut self) {
        self.last_error = None;
        if let Some(url) = self.history.back().map(str::to_string) {
            self.open(&url);
        }
    }

    fn forward(&mut self) {
        self.last_error = None;
        if let Some(url) = self.history.forward().map(str::to_string) {
            self.open(&url);
        }
    }

    fn reload(&mut self) {
        self.last_error = None;
        if let Some(url) = self.history.current().map(str::to_string) {
            self.open(&url);
        }
    }

    fn current_url(&self) -> Option<&str> {
        self.history.current()
    }

    fn apply_preferences(&mut self, prefs: RenderPreferences) {
        // The system browser keeps its own content settings.
        debug!(?prefs, "Rendering preferences recorded");
        self.prefs = Some(prefs);
    }
}

impl WindowView for SystemBrowserView {
    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn preferences(&self) -> Option<RenderPreferences> {
        self.prefs
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_view() -> SystemBrowserView {
        SystemBrowserView {
            last_error: Some("no browser".to_string()),
            ..SystemBrowserView::default()
        }
    }

    #[test]
    fn test_back_at_start_clears_old_error() {
        let mut view = failed_view();
        view.back();
        assert_eq!(view.last_error(), None);

        let mut view = failed_view();
        view.forward();
        assert_eq!(view.last_error(), None);
    }

    #[test]
    fn test_reload_without_page_clears_old_error() {
        let mut view = failed_view();
        view.reload();
        assert_eq!(view.last_error(), None);
        assert_eq!(view.current_url(), None);
    }

    #[test]
    fn test_system_view_is_not_embedded() {
        let mut view = SystemBrowserView::new();
        assert!(!view.is_embedded());
        assert_eq!(view.preferences(), None);

        let prefs = RenderPreferences {
            block_ads: true,
            load_images: false,
        };
        view.apply_preferences(prefs);
        assert_eq!(view.preferences(), Some(prefs));
        assert!(!view.poll_navigation());
    }
}
