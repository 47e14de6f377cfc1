//! Interpretation of text typed into the URL bar.

/// Reserved input that lists bookmarks instead of navigating.
pub const BOOKMARKS_TOKEN: &str = "-favs";

/// URL schemes that are navigated to directly.
pub const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// What a line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Load this URL as typed.
    Direct(String),
    /// Show the saved bookmarks.
    ShowBookmarks,
    /// Search for this text with the active engine.
    Search(String),
}

/// Interpret URL-bar input.
///
/// The bookmark token and URLs are matched on the trimmed input; a search
/// keeps the input exactly as typed.
pub fn interpret(input: &str) -> Navigation {
    let trimmed = input.trim();

    if trimmed == BOOKMARKS_TOKEN {
        Navigation::ShowBookmarks
    } else if has_url_scheme(trimmed) {
        Navigation::Direct(trimmed.to_string())
    } else {
        Navigation::Search(input.to_string())
    }
}

/// Whether `url` starts with one of [`URL_SCHEMES`].
pub fn has_url_scheme(url: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Normalize a homepage entered by the user.
///
/// Adds `https://` when no http(s) scheme is present. Returns `None` for
/// blank input.
pub fn normalize_homepage(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if has_url_scheme(raw) {
        Some(raw.to_string())
    } else {
        Some(format!("https://{raw}"))
    }
}
