//! UI components for Browlite.

pub mod bookmarks;
pub mod dialogs;
pub mod menu;
pub mod page;
pub mod status;
pub mod toolbar;

// Theme-aware colors for the UI
pub mod colors {
    use eframe::egui::{Color32, Visuals};

    /// Accent blue for primary buttons and links
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);

    /// Error red
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);

    /// Get muted text color based on theme
    pub fn muted(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Color32::from_rgb(156, 163, 175)
        } else {
            Color32::from_rgb(100, 100, 110)
        }
    }

    /// Get URL bar background based on theme
    pub fn url_bar_bg(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Color32::from_rgb(51, 51, 51)
        } else {
            Color32::from_rgb(245, 245, 250)
        }
    }
}
