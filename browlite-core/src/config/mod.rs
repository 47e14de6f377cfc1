//! Configuration module for Browlite.
//!
//! Typed settings, the INI format they are stored in, and the first-run
//! presets.

mod format;
mod presets;
mod settings;

pub use format::parse_bool;
pub use presets::Preset;
pub use settings::{
    Settings, DEFAULT_AVAILABLE_ENGINES, DEFAULT_HOMEPAGE, DEFAULT_SEARCH_ENGINE,
    KEY_DEFAULT_SEARCH_ENGINE,
};
