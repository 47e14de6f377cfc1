//! Ordered, duplicate-free bookmark list.

/// Saved bookmark URLs in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    urls: Vec<String>,
}

impl Bookmarks {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the on-disk format: one URL per line, blank lines dropped.
    pub fn parse(text: &str) -> Self {
        let mut bookmarks = Self::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            bookmarks.urls.push(line.to_string());
        }
        bookmarks
    }

    /// Serialize to the on-disk format (no trailing newline).
    pub fn to_text(&self) -> String {
        self.urls.join("\n")
    }

    /// Append `url` unless it is already saved.
    ///
    /// Returns `false` if the URL was already present.
    pub fn add(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.contains(&url) {
            return false;
        }
        self.urls.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    /// Get a bookmark by its 1-based menu number.
    pub fn get_numbered(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.urls.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_blank_lines() {
        let bookmarks = Bookmarks::parse("https://a.test\n\n  \nhttps://b.test  \n");
        let urls: Vec<_> = bookmarks.iter().collect();
        assert_eq!(urls, vec!["https://a.test", "https://b.test"]);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut bookmarks = Bookmarks::new();
        assert!(bookmarks.add("https://a.test"));
        assert!(bookmarks.add("https://b.test"));
        let urls: Vec<_> = bookmarks.iter().collect();
        assert_eq!(urls, vec!["https://a.test", "https://b.test"]);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut bookmarks = Bookmarks::parse("https://a.test\nhttps://b.test");
        assert!(!bookmarks.add("https://a.test"));
        assert_eq!(bookmarks.to_text(), "https://a.test\nhttps://b.test");
    }

    #[test]
    fn test_get_numbered() {
        let bookmarks = Bookmarks::parse("https://a.test\nhttps://b.test");
        assert_eq!(bookmarks.get_numbered(1), Some("https://a.test"));
        assert_eq!(bookmarks.get_numbered(2), Some("https://b.test"));
        assert_eq!(bookmarks.get_numbered(0), None);
        assert_eq!(bookmarks.get_numbered(3), None);
    }

    #[test]
    fn test_to_text_has_no_trailing_newline() {
        let mut bookmarks = Bookmarks::new();
        bookmarks.add("https://a.test");
        assert_eq!(bookmarks.to_text(), "https://a.test");
        assert_eq!(Bookmarks::new().to_text(), "");
    }
}
