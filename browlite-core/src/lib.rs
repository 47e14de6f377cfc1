//! Browlite Core Library
//!
//! This crate provides everything in Browlite that is not window plumbing:
//!
//! - Typed settings stored in an INI file, plus first-run presets
//! - Flat-file storage for settings and bookmarks
//! - The search engine directory
//! - Interpretation of URL-bar input
//! - The live session passed to window handlers
//! - The first-run wizard and console bookmark picker
//! - The seam to the rendering widget

pub mod bookmarks;
pub mod config;
pub mod console;
pub mod navigation;
pub mod search;
pub mod session;
pub mod store;
pub mod view;
pub mod wizard;

// Re-exports for convenience
pub use bookmarks::Bookmarks;
pub use config::{Preset, Settings};
pub use console::{pick_bookmark, NO_BOOKMARKS_MESSAGE};
pub use navigation::{interpret, Navigation, BOOKMARKS_TOKEN};
pub use search::SearchEngine;
pub use session::{BookmarkOutcome, Session, SessionError};
pub use store::{Store, StoreError};
pub use view::{History, PageView, RenderPreferences};
pub use wizard::{FirstRunWizard, WizardState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
