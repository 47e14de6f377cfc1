//! Page view embedded in the window through the platform webview.
//!
//! The webview is a child of the eframe window placed over the page area.
//! It reports finished page loads over a channel; the window picks them up
//! each frame through [`PageView::poll_navigation`].

use std::sync::mpsc::{self, Receiver};

use anyhow::Context as _;
use browlite_core::{History, PageView, RenderPreferences};
use eframe::egui;
use tracing::{debug, info, warn};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::view::WindowView;

/// Adds a stylesheet hiding images, once per document.
const HIDE_IMAGES_SCRIPT: &str = "(function () {
  if (document.getElementById('browlite-no-images')) return;
  var style = document.createElement('style');
  style.id = 'browlite-no-images';
  style.textContent = 'img, picture, svg image { visibility: hidden !important; }';
  (document.head || document.documentElement).appendChild(style);
})();";

/// Removes the stylesheet added by [`HIDE_IMAGES_SCRIPT`].
const SHOW_IMAGES_SCRIPT: &str = "(function () {
  var style = document.getElementById('browlite-no-images');
  if (style) style.remove();
})();";

/// Webview-backed page view.
pub struct EmbeddedView {
    webview: WebView,
    history: History,
    /// URLs of pages the webview finished loading.
    loaded: Receiver<String>,
    /// Page requested with `load` that has not finished yet.
    loading: Option<String>,
    prefs: Option<RenderPreferences>,
    last_error: Option<String>,
    area: Option<egui::Rect>,
    visible: bool,
}

impl EmbeddedView {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        #[cfg(target_os = "linux")]
        gtk::init().context("Failed to initialize GTK")?;

        let (tx, loaded) = mpsc::channel();
        let ctx = cc.egui_ctx.clone();

        let webview = WebViewBuilder::new()
            .with_visible(false)
            .with_on_page_load_handler(move |event, url| {
                if let PageLoadEvent::Finished = event {
                    debug!(%url, "Page finished loading");
                    let _ = tx.send(url);
                    ctx.request_repaint();
                }
            })
            .build_as_child(cc)
            .context("Failed to create webview")?;

        info!("Embedded webview created");
        Ok(Self {
            webview,
            history: History::new(),
            loaded,
            loading: None,
            prefs: None,
            last_error: None,
            area: None,
            visible: false,
        })
    }

    fn run_script(&mut self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!(error = %e, "Script failed");
            self.last_error = Some(e.to_string());
        }
    }

    fn apply_image_preference(&mut self) {
        match self.prefs {
            Some(prefs) if !prefs.load_images => self.run_script(HIDE_IMAGES_SCRIPT),
            Some(_) => self.run_script(SHOW_IMAGES_SCRIPT),
            None => {}
        }
    }

    #[cfg(target_os = "linux")]
    fn pump_gtk(&self) {
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }
    }
}

impl PageView for EmbeddedView {
    fn load(&mut self, url: &str) {
        self.last_error = None;
        match self.webview.load_url(url) {
            Ok(()) => self.loading = Some(url.to_string()),
            Err(e) => {
                warn!(url, error = %e, "Failed to load URL");
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn back(&mut self) {
        self.last_error = None;
        if self.history.back().is_some() {
            self.loading = None;
            self.run_script("history.back();");
        }
    }

    fn forward(&mut self) {
        self.last_error = None;
        if self.history.forward().is_some() {
            self.loading = None;
            self.run_script("history.forward();");
        }
    }

    fn reload(&mut self) {
        self.last_error = None;
        if self.current_url().is_some() {
            self.run_script("location.reload();");
        }
    }

    fn current_url(&self) -> Option<&str> {
        self.loading.as_deref().or_else(|| self.history.current())
    }

    fn apply_preferences(&mut self, prefs: RenderPreferences) {
        if prefs.block_ads {
            debug!("Ad blocking is not available in the embedded view");
        }
        self.prefs = Some(prefs);
        self.apply_image_preference();
    }

    fn poll_navigation(&mut self) -> bool {
        #[cfg(target_os = "linux")]
        self.pump_gtk();

        let before = self.current_url().map(str::to_string);
        let mut finished = false;
        while let Ok(url) = self.loaded.try_recv() {
            self.loading = None;
            self.history.record(&url);
            finished = true;
        }
        if finished {
            self.apply_image_preference();
        }
        finished && self.current_url() != before.as_deref()
    }
}

impl WindowView for EmbeddedView {
    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn preferences(&self) -> Option<RenderPreferences> {
        self.prefs
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn is_embedded(&self) -> bool {
        true
    }

    fn set_area(&mut self, area: egui::Rect) {
        if self.area == Some(area) {
            return;
        }
        self.area = Some(area);

        let bounds = Rect {
            position: LogicalPosition::new(area.min.x as f64, area.min.y as f64).into(),
            size: LogicalSize::new(area.width() as f64, area.height() as f64).into(),
        };
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(error = %e, "Failed to place webview");
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if let Err(e) = self.webview.set_visible(visible) {
            warn!(error = %e, "Failed to change webview visibility");
        }
    }
}
