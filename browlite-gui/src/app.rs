//! Main application state and update loop.

use eframe::egui::{self, Key, KeyboardShortcut, Modifiers};
use tracing::{debug, error, info};

use browlite_core::{
    interpret, BookmarkOutcome, Navigation, PageView, RenderPreferences, Session, Store,
};

use crate::startup::Startup;
use crate::ui;
use crate::view::{self, WindowView};

// =============================================================================
// Shortcuts
// =============================================================================

pub const BACK_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::ALT, Key::ArrowLeft);
pub const FORWARD_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::ALT, Key::ArrowRight);
pub const RELOAD_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::NONE, Key::F5);
pub const HOME_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::ALT, Key::Home);
pub const BOOKMARK_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::D);

// =============================================================================
// Dialog State
// =============================================================================

/// Modal dialog currently open, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Pick the default search engine; holds the highlighted engine id.
    SearchEngine(String),
    /// Edit the homepage; holds the text being typed.
    Homepage(String),
    /// Informational message with an OK button.
    Notice { title: String, message: String },
}

// =============================================================================
// Application State
// =============================================================================

/// Main application state.
pub struct BrowliteApp {
    /// Settings and bookmarks storage.
    pub store: Store,

    /// Settings, bookmarks and current page.
    pub session: Session,

    /// The rendering widget.
    pub view: Box<dyn WindowView>,

    // -------------------------------------------------------------------------
    // UI State
    // -------------------------------------------------------------------------
    /// Text in the URL bar.
    pub url_input: String,

    /// Show the bookmarks window.
    pub show_bookmarks: bool,

    /// Open dialog.
    pub dialog: Option<Dialog>,

    /// Status message.
    pub status_message: Option<(String, chrono::DateTime<chrono::Utc>)>,

    /// Toolbar icon of the active search engine.
    pub engine_icon: ui::toolbar::EngineIcon,
}

impl BrowliteApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, startup: Startup) -> Self {
        info!("Initializing BrowliteApp");

        let Startup {
            store,
            session,
            start_url,
        } = startup;
        debug!(settings = ?session.settings, "Loaded settings");

        apply_theme(&cc.egui_ctx, session.settings.dark_mode);

        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        cc.egui_ctx.set_style(style);

        let mut view = view::create(cc);
        view.apply_preferences(RenderPreferences::from(&session.settings));

        let engine_icon = ui::toolbar::EngineIcon::load(&cc.egui_ctx, session.active_engine());

        let mut app = Self {
            store,
            session,
            view,
            url_input: String::new(),
            show_bookmarks: false,
            dialog: None,
            status_message: None,
            engine_icon,
        };

        app.load_url(&start_url);
        app
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Act on the text in the URL bar.
    pub fn navigate_to_input(&mut self) {
        let nav = interpret(&self.url_input);
        debug!(?nav, "URL bar input");

        match nav {
            Navigation::ShowBookmarks => self.show_bookmarks = true,
            _ => {
                if let Some(url) = self.session.target_for(&nav) {
                    self.load_url(&url);
                }
            }
        }
    }

    /// Search for the URL bar text with the active engine.
    pub fn perform_search(&mut self) {
        let nav = Navigation::Search(self.url_input.clone());
        if let Some(url) = self.session.target_for(&nav) {
            self.load_url(&url);
        }
    }

    /// Load `url` in the page view and sync the URL bar.
    pub fn load_url(&mut self, url: &str) {
        info!(url, "Navigating");
        self.view.load(url);
        self.after_navigation();
    }

    pub fn go_back(&mut self) {
        self.view.back();
        self.after_navigation();
    }

    pub fn go_forward(&mut self) {
        self.view.forward();
        self.after_navigation();
    }

    pub fn reload(&mut self) {
        self.view.reload();
        self.after_navigation();
    }

    pub fn go_home(&mut self) {
        let homepage = self.session.settings.homepage.clone();
        self.load_url(&homepage);
    }

    fn after_navigation(&mut self) {
        self.session.sync_url(&*self.view);
        if let Some(url) = self.session.current_url() {
            self.url_input = url.to_string();
        }
        if let Some(err) = self.view.last_error() {
            let msg = format!("Could not open page: {err}");
            self.set_status(&msg);
        }
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    /// Bookmark the current page (Ctrl+D).
    pub fn add_to_bookmarks(&mut self) {
        match self.session.bookmark_current() {
            BookmarkOutcome::Added(_) => {
                self.save_bookmarks();
                self.notify("Bookmarks", "Bookmark added!");
            }
            BookmarkOutcome::AlreadySaved(_) => {
                self.notify("Bookmarks", "This URL is already in your bookmarks!");
            }
            BookmarkOutcome::NoPage => self.set_status("No page to bookmark"),
        }
    }

    /// Open a bookmark from the bookmarks window.
    pub fn open_bookmark(&mut self, url: &str) {
        self.show_bookmarks = false;
        self.load_url(url);
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Switch the default search engine and persist it.
    pub fn change_search_engine(&mut self, ctx: &egui::Context, engine_id: &str) {
        if let Err(e) = self.session.set_search_engine(engine_id) {
            error!("Failed to change search engine: {}", e);
            self.set_status(&e.to_string());
            return;
        }
        self.engine_icon = ui::toolbar::EngineIcon::load(ctx, self.session.active_engine());
        self.save_config();
    }

    /// Toggle dark mode, apply it and persist it.
    pub fn set_dark_mode(&mut self, ctx: &egui::Context, enabled: bool) {
        self.session.set_dark_mode(enabled);
        apply_theme(ctx, enabled);
        self.save_config();
    }

    /// Set the homepage from the dialog text and persist it.
    pub fn change_homepage(&mut self, raw: &str) {
        if self.session.set_homepage(raw).is_none() {
            return;
        }
        self.save_config();
        self.notify("Success", "Homepage updated!");
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save settings to disk.
    pub fn save_config(&mut self) {
        if let Err(e) = self.session.save_config(&self.store) {
            error!("Failed to save settings: {}", e);
            self.set_status("Failed to save settings");
        } else {
            self.set_status("Settings saved");
        }
    }

    /// Save bookmarks to disk.
    pub fn save_bookmarks(&mut self) {
        if let Err(e) = self.session.save_bookmarks(&self.store) {
            error!("Failed to save bookmarks: {}", e);
            self.set_status("Failed to save bookmarks");
        }
    }

    /// Save everything before the window closes.
    fn save_on_exit(&self) {
        info!("Saving session before exit");
        if let Err(e) = self.session.save_all(&self.store) {
            error!("Failed to save session: {}", e);
        }
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Show an informational dialog.
    pub fn notify(&mut self, title: &str, message: &str) {
        self.dialog = Some(Dialog::Notice {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// Set a status message.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some((msg.to_string(), chrono::Utc::now()));
    }

    /// Clear old status messages.
    pub fn clear_old_status(&mut self) {
        if let Some((_, time)) = &self.status_message {
            if chrono::Utc::now() - *time > chrono::Duration::seconds(5) {
                self.status_message = None;
            }
        }
    }

    /// Handle global keyboard shortcuts.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&BACK_SHORTCUT)) {
            self.go_back();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&FORWARD_SHORTCUT)) {
            self.go_forward();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&RELOAD_SHORTCUT)) {
            self.reload();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&HOME_SHORTCUT)) {
            self.go_home();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&BOOKMARK_SHORTCUT)) {
            self.add_to_bookmarks();
        }
    }
}

/// Apply the dark or light theme.
pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}

impl eframe::App for BrowliteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_on_exit();
        }

        if self.view.poll_navigation() {
            self.after_navigation();
        }

        if self.dialog.is_none() {
            self.handle_shortcuts(ctx);
        }
        self.clear_old_status();

        // Top panel with menu
        egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
            ui::menu::render(self, ui, ctx);
        });

        // Toolbar with URL bar
        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            ui::toolbar::render(self, ui, ctx);
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_panel")
            .max_height(24.0)
            .show(ctx, |ui| {
                ui::status::render(self, ui);
            });

        if self.show_bookmarks {
            ui::bookmarks::render(self, ctx);
        }

        if self.dialog.is_some() {
            ui::dialogs::render(self, ctx);
        }

        // Child webviews draw above egui, so hide the page under overlays.
        self.view
            .set_visible(self.dialog.is_none() && !self.show_bookmarks);

        // Page area (fills remaining space)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::page::render(self, ui);
        });

        if self.status_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
