//! Flat-file storage for Browlite.
//!
//! Provides persistent storage for:
//! - Settings (`config.ini`)
//! - Bookmarks (`favs.txt`, one URL per line)
//! - The two first-run presets the config is created from

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::bookmarks::Bookmarks;
use crate::config::{Preset, Settings};

/// Config file name inside the profile directory.
pub const CONFIG_FILE: &str = "config.ini";

/// Bookmarks file name inside the profile directory.
pub const BOOKMARKS_FILE: &str = "favs.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not determine config directory")]
    NoProfileDir,
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Console I/O error: {0}")]
    Console(#[source] std::io::Error),
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// File store rooted at a profile directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store at the default location.
    ///
    /// Default path: `~/.config/browlite/` (or platform equivalent).
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(Self::default_path()?)
    }

    /// Open the store at a specific directory, creating it if needed.
    pub fn open_at(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        debug!(dir = %dir.display(), "Opened profile directory");
        Ok(Self { dir })
    }

    /// Get the default profile directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let config_dir = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .ok_or(StoreError::NoProfileDir)?;

        Ok(config_dir.join("browlite"))
    }

    /// Get the profile directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn bookmarks_path(&self) -> PathBuf {
        self.dir.join(BOOKMARKS_FILE)
    }

    pub fn preset_path(&self, preset: Preset) -> PathBuf {
        self.dir.join(preset.file_name())
    }

    /// Whether `config.ini` exists yet.
    pub fn has_config(&self) -> bool {
        self.config_path().exists()
    }

    // =========================================================================
    // Presets
    // =========================================================================

    /// Write any preset file that is missing from the profile directory.
    ///
    /// Existing preset files are left alone so users can customise them.
    pub fn ensure_presets(&self) -> Result<(), StoreError> {
        for preset in Preset::all() {
            let path = self.preset_path(*preset);
            if !path.exists() {
                debug!(path = %path.display(), "Writing preset");
                std::fs::write(&path, preset.contents()).map_err(|e| StoreError::io(&path, e))?;
            }
        }
        Ok(())
    }

    /// Copy a preset file verbatim over `config.ini`.
    pub fn apply_preset(&self, preset: Preset) -> Result<(), StoreError> {
        self.ensure_presets()?;
        let from = self.preset_path(preset);
        let to = self.config_path();
        std::fs::copy(&from, &to).map_err(|e| StoreError::io(&from, e))?;
        info!(?preset, "Applied configuration preset");
        Ok(())
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Load settings, filling defaults for missing keys.
    ///
    /// A missing file yields the defaults.
    pub fn load_config(&self) -> Result<Settings, StoreError> {
        Ok(self
            .read_lossy(&self.config_path())?
            .map(|text| Settings::from_ini_str(&text))
            .unwrap_or_default())
    }

    /// Load settings, running the first-run wizard on the console if no
    /// config exists yet.
    pub fn load_or_initialize<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Settings, StoreError> {
        if !self.has_config() {
            info!("No configuration found, starting first-run setup");
            crate::wizard::run_console(self, input, output)?;
        }
        self.load_config()
    }

    /// Save settings, replacing the whole file.
    pub fn save_config(&self, settings: &Settings) -> Result<(), StoreError> {
        let path = self.config_path();
        let text = settings
            .to_ini_string()
            .map_err(|e| StoreError::io(&path, e))?;
        self.write_atomic(&path, &text)?;
        debug!("Saved configuration");
        Ok(())
    }

    /// Rewrite only `default_search_engine` in the stored config.
    pub fn set_default_search_engine(&self, engine_id: &str) -> Result<(), StoreError> {
        let mut settings = self.load_config()?;
        settings.default_search_engine = engine_id.to_string();
        self.save_config(&settings)?;
        info!(engine = engine_id, "Default search engine updated");
        Ok(())
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    /// Load bookmarks; a missing file is an empty list.
    pub fn load_bookmarks(&self) -> Result<Bookmarks, StoreError> {
        Ok(self
            .read_lossy(&self.bookmarks_path())?
            .map(|text| Bookmarks::parse(&text))
            .unwrap_or_default())
    }

    /// Save bookmarks, replacing the whole file.
    pub fn save_bookmarks(&self, bookmarks: &Bookmarks) -> Result<(), StoreError> {
        self.write_atomic(&self.bookmarks_path(), &bookmarks.to_text())?;
        debug!(count = bookmarks.len(), "Saved bookmarks");
        Ok(())
    }

    /// Read a text file, replacing invalid UTF-8. A missing file is `None`.
    fn read_lossy(&self, path: &Path) -> Result<Option<String>, StoreError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Write through a sibling temp file and rename over the target.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, contents).map_err(|e| StoreError::io(&tmp, e))?;
        std::fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
