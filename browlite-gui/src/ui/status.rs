//! Status bar at the bottom of the window.

use eframe::egui::{self, RichText};

use crate::app::BrowliteApp;
use crate::ui::colors;

/// Render the status bar.
pub fn render(app: &BrowliteApp, ui: &mut egui::Ui) {
    let muted = colors::muted(ui.visuals());

    ui.horizontal(|ui| {
        // Status message
        if let Some((msg, _)) = &app.status_message {
            ui.label(RichText::new(msg).size(11.0).color(muted));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("🔍 {}", app.session.active_engine().name))
                    .size(11.0)
                    .color(muted),
            );

            let count = app.session.bookmarks.len();
            if count > 0 {
                ui.separator();
                ui.label(
                    RichText::new(format!("⭐ {count}"))
                        .size(11.0)
                        .color(muted),
                );
            }
        });
    });
}
