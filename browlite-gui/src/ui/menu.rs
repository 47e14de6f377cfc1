//! Top menu bar.

use eframe::egui::{self, RichText};

use crate::app::{
    BrowliteApp, Dialog, BACK_SHORTCUT, BOOKMARK_SHORTCUT, FORWARD_SHORTCUT, HOME_SHORTCUT,
    RELOAD_SHORTCUT,
};

/// Render the top menu bar.
pub fn render(app: &mut BrowliteApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    egui::menu::bar(ui, |ui| {
        ui.label(RichText::new("Browlite").strong().size(15.0));
        ui.separator();

        // Navigation menu
        ui.menu_button("Navigation", |ui| {
            let item = |ui: &mut egui::Ui, label: &str, shortcut: &egui::KeyboardShortcut| {
                ui.add(egui::Button::new(label).shortcut_text(ctx.format_shortcut(shortcut)))
                    .clicked()
            };

            if item(ui, "Back", &BACK_SHORTCUT) {
                app.go_back();
                ui.close_menu();
            }
            if item(ui, "Forward", &FORWARD_SHORTCUT) {
                app.go_forward();
                ui.close_menu();
            }
            if item(ui, "Reload", &RELOAD_SHORTCUT) {
                app.reload();
                ui.close_menu();
            }
            if item(ui, "Home", &HOME_SHORTCUT) {
                app.go_home();
                ui.close_menu();
            }

            ui.separator();

            if item(ui, "Add to Bookmarks", &BOOKMARK_SHORTCUT) {
                app.add_to_bookmarks();
                ui.close_menu();
            }
            if ui.button("Show Bookmarks").clicked() {
                app.show_bookmarks = true;
                ui.close_menu();
            }
        });

        // Settings menu
        ui.menu_button("Settings", |ui| {
            if ui.button("Change Search Engine...").clicked() {
                let current = app.session.active_engine().id.to_string();
                app.dialog = Some(Dialog::SearchEngine(current));
                ui.close_menu();
            }

            let mut dark_mode = app.session.settings.dark_mode;
            if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                app.set_dark_mode(ctx, dark_mode);
            }

            if ui.button("Change Homepage...").clicked() {
                let current = app.session.settings.homepage.clone();
                app.dialog = Some(Dialog::Homepage(current));
                ui.close_menu();
            }
        });
    });
}
