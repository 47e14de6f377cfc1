//! Browlite GUI Application
//!
//! A minimal desktop browser shell with a URL/search bar and bookmarks.

mod app;
mod cli;
mod startup;
mod ui;
mod view;
#[cfg(feature = "webview")]
mod webview;

use anyhow::Context;
use browlite_core::Store;
use clap::Parser;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    // Initialize logging
    let level = if args.verbose { "browlite=debug" } else { "browlite=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.parse()?)
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    tracing::info!("Starting Browlite v{}", browlite_core::VERSION);

    let store = match &args.profile {
        Some(dir) => Store::open_at(dir.clone()),
        None => Store::open(),
    }
    .context("Failed to open profile directory")?;

    // Console prompts run here, before the window exists.
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let startup = match startup::prepare(store, args.target.as_deref(), &mut input, &mut output)
        .context("Startup failed")?
    {
        startup::Outcome::Launch(startup) => startup,
        startup::Outcome::Exit => return Ok(()),
    };

    // Window configuration
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Browlite"),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Browlite",
        options,
        Box::new(move |cc| Ok(Box::new(app::BrowliteApp::new(cc, startup)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {e}"))
}
