//! Bookmarks window, opened by typing `-favs` or from the menu.

use eframe::egui::{self, RichText, Vec2};

use crate::app::BrowliteApp;
use crate::ui::colors;

/// Render the bookmarks window.
pub fn render(app: &mut BrowliteApp, ctx: &egui::Context) {
    let mut open = app.show_bookmarks;
    let mut selected: Option<String> = None;

    egui::Window::new("⭐ Bookmarks")
        .open(&mut open)
        .collapsible(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            if app.session.bookmarks.is_empty() {
                ui.label(
                    RichText::new(browlite_core::NO_BOOKMARKS_MESSAGE)
                        .color(colors::muted(ui.visuals())),
                );
                return;
            }

            egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                for (i, url) in app.session.bookmarks.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}.", i + 1)).color(colors::muted(ui.visuals())));
                        if ui.link(url).clicked() {
                            selected = Some(url.to_string());
                        }
                    });
                }
            });
        });

    app.show_bookmarks = open;
    if let Some(url) = selected {
        app.open_bookmark(&url);
    }
}
