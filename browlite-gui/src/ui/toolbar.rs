//! Navigation toolbar with the URL/search bar.

use std::path::Path;

use eframe::egui::{self, Key, RichText, Rounding, Vec2};
use tracing::debug;

use browlite_core::SearchEngine;

use crate::app::BrowliteApp;
use crate::ui::colors;

const ICON_SIZE: f32 = 24.0;

/// Texture for the active search engine's icon, if its file could be read.
pub struct EngineIcon {
    pub engine_name: &'static str,
    texture: Option<egui::TextureHandle>,
}

impl EngineIcon {
    /// Load `engine.icon` from disk. A missing or unreadable file leaves the
    /// button text-only.
    pub fn load(ctx: &egui::Context, engine: &SearchEngine) -> Self {
        let texture = match load_png(Path::new(engine.icon)) {
            Ok(image) => Some(ctx.load_texture(engine.id, image, egui::TextureOptions::LINEAR)),
            Err(e) => {
                debug!(icon = engine.icon, error = %e, "Search icon unavailable");
                None
            }
        };

        Self {
            engine_name: engine.name,
            texture,
        }
    }
}

fn load_png(path: &Path) -> Result<egui::ColorImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Render the toolbar.
pub fn render(app: &mut BrowliteApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.horizontal(|ui| {
        let button_size = Vec2::splat(ICON_SIZE + 6.0);

        if ui
            .add_enabled(app.view.can_go_back(), egui::Button::new("⬅").min_size(button_size))
            .on_hover_text("Back")
            .clicked()
        {
            app.go_back();
        }

        if ui
            .add_enabled(
                app.view.can_go_forward(),
                egui::Button::new("➡").min_size(button_size),
            )
            .on_hover_text("Forward")
            .clicked()
        {
            app.go_forward();
        }

        // Search button shows the active engine
        let search_button = match &app.engine_icon.texture {
            Some(texture) => {
                let image = egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(Vec2::splat(ICON_SIZE));
                egui::Button::image(image)
            }
            None => egui::Button::new(RichText::new(app.engine_icon.engine_name).size(12.0)),
        };
        if ui
            .add(search_button.min_size(button_size))
            .on_hover_text(format!("Search with {}", app.engine_icon.engine_name))
            .clicked()
        {
            app.perform_search();
        }

        // Close button is laid out first so the URL bar can take the rest
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(
                    egui::Button::new(RichText::new("✖").color(colors::ERROR))
                        .min_size(button_size),
                )
                .on_hover_text("Close")
                .clicked()
            {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            let url_bar = egui::TextEdit::singleline(&mut app.url_input)
                .hint_text("Type a URL or search term...")
                .desired_width(ui.available_width())
                .frame(false)
                .margin(egui::Margin::symmetric(6.0, 5.0));

            let response = egui::Frame::none()
                .fill(colors::url_bar_bg(ui.visuals()))
                .rounding(Rounding::same(6.0))
                .show(ui, |ui| ui.add(url_bar))
                .inner;

            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                app.navigate_to_input();
            }
        });
    });
}
