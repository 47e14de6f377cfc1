//! Seam to the rendering widget.
//!
//! Browlite never renders pages itself. A [`PageView`] is told which URL to
//! show and reports back the URL it is showing.

use crate::config::Settings;

/// Rendering options derived from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPreferences {
    pub block_ads: bool,
    pub load_images: bool,
}

impl From<&Settings> for RenderPreferences {
    fn from(settings: &Settings) -> Self {
        Self {
            block_ads: settings.block_ads,
            load_images: !settings.disable_images,
        }
    }
}

/// Something that can display web pages.
pub trait PageView {
    /// Navigate to `url`.
    fn load(&mut self, url: &str);

    /// Go back one page, if possible.
    fn back(&mut self);

    /// Go forward one page, if possible.
    fn forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// URL currently displayed.
    fn current_url(&self) -> Option<&str>;

    /// Apply rendering preferences. Views may ignore options they lack.
    fn apply_preferences(&mut self, prefs: RenderPreferences);

    /// Take in navigation the view did on its own, such as followed links.
    ///
    /// Returns `true` if the current URL changed since the last call.
    fn poll_navigation(&mut self) -> bool {
        false
    }
}

/// Most entries a [`History`] keeps; the oldest are dropped first.
pub const MAX_HISTORY: usize = 100;

/// Back/forward navigation history.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    index: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new page, dropping any forward entries.
    pub fn visit(&mut self, url: impl Into<String>) {
        let next = self.index.map_or(0, |i| i + 1);
        self.entries.truncate(next);
        self.entries.push(url.into());
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.index = Some(self.entries.len() - 1);
    }

    /// Record a page the view reports it is showing.
    ///
    /// Returns `false` if it is already the current page.
    pub fn record(&mut self, url: &str) -> bool {
        if self.current() == Some(url) {
            return false;
        }
        self.visit(url);
        true
    }

    /// Step back and return the page now current.
    pub fn back(&mut self) -> Option<&str> {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Step forward and return the page now current.
    pub fn forward(&mut self) -> Option<&str> {
        match self.index {
            Some(i) if i + 1 < self.entries.len() => {
                self.index = Some(i + 1);
                self.current()
            }
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.entries.len())
    }
}
