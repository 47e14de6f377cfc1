//! Modal dialogs: search engine, homepage and notices.

use eframe::egui::{self, Key, RichText, Rounding, Vec2};

use crate::app::{BrowliteApp, Dialog};
use crate::ui::colors;

/// What the user did with the dialog this frame.
enum Action {
    None,
    Cancel,
    Confirm,
}

/// Render the open dialog.
pub fn render(app: &mut BrowliteApp, ctx: &egui::Context) {
    let Some(mut dialog) = app.dialog.take() else {
        return;
    };

    let title = match &dialog {
        Dialog::SearchEngine(_) => "Choose your search engine".to_string(),
        Dialog::Homepage(_) => "Change Homepage".to_string(),
        Dialog::Notice { title, .. } => title.clone(),
    };

    let engines = app.session.selectable_engines();
    let mut action = Action::None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing = Vec2::new(8.0, 10.0);

            match &mut dialog {
                Dialog::SearchEngine(selected) => {
                    ui.label("Select the default search engine:");
                    for engine in &engines {
                        ui.radio_value(selected, engine.id.to_string(), engine.name);
                    }
                    action = buttons(ui, true);
                }
                Dialog::Homepage(text) => {
                    ui.label("Enter the new homepage URL:");
                    let response = ui.add(
                        egui::TextEdit::singleline(text).desired_width(f32::INFINITY),
                    );
                    response.request_focus();
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        action = Action::Confirm;
                    } else {
                        action = buttons(ui, true);
                    }
                }
                Dialog::Notice { message, .. } => {
                    ui.label(RichText::new(message.as_str()).size(14.0));
                    action = buttons(ui, false);
                }
            }
        });

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        action = Action::Cancel;
    }

    match action {
        Action::None => app.dialog = Some(dialog),
        Action::Cancel => {}
        Action::Confirm => match dialog {
            Dialog::SearchEngine(id) => app.change_search_engine(ctx, &id),
            Dialog::Homepage(text) => app.change_homepage(&text),
            Dialog::Notice { .. } => {}
        },
    }
}

/// OK (and optionally Cancel) buttons.
fn buttons(ui: &mut egui::Ui, with_cancel: bool) -> Action {
    let mut action = Action::None;
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_sized(
                Vec2::new(90.0, 28.0),
                egui::Button::new(RichText::new("OK").strong())
                    .fill(colors::ACCENT)
                    .rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            action = Action::Confirm;
        }

        if with_cancel
            && ui
                .add_sized(
                    Vec2::new(90.0, 28.0),
                    egui::Button::new("Cancel").rounding(Rounding::same(8.0)),
                )
                .clicked()
        {
            action = Action::Cancel;
        }
    });
    action
}
