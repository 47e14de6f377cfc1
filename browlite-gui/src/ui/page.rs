//! Page area.
//!
//! An embedded view is placed over this area. When pages open in the system
//! browser instead, this shows what is open and offers to open it again.

use eframe::egui::{self, RichText, Rounding, Sense, Vec2};

use crate::app::BrowliteApp;
use crate::ui::colors;

/// Render the page area.
pub fn render(app: &mut BrowliteApp, ui: &mut egui::Ui) {
    if app.view.is_embedded() {
        let (area, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        app.view.set_area(area);
        return;
    }

    let muted = colors::muted(ui.visuals());

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);

        let Some(url) = app.session.current_url().map(str::to_string) else {
            ui.label(RichText::new("No page open").size(16.0).color(muted));
            return;
        };

        ui.label(RichText::new("Opened in your browser").size(14.0).color(muted));
        ui.add_space(8.0);
        ui.label(RichText::new(&url).size(18.0).strong());
        ui.add_space(16.0);

        if ui
            .add_sized(
                Vec2::new(140.0, 32.0),
                egui::Button::new(RichText::new("Open again").strong())
                    .fill(colors::ACCENT)
                    .rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            app.reload();
        }

        if let Some(prefs) = app.view.preferences() {
            ui.add_space(12.0);
            let images = if prefs.load_images { "on" } else { "off" };
            let ads = if prefs.block_ads { "on" } else { "off" };
            ui.label(
                RichText::new(format!("Images: {images} · Ad blocking: {ads}"))
                    .size(11.0)
                    .color(muted)
                    .italics(),
            );
        }
    });
}
