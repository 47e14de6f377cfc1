//! Built-in configuration presets offered on first run.

/// A predefined configuration copied verbatim to create `config.ini`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Balanced defaults with every search engine enabled.
    #[default]
    Secure,
    /// Blank homepage, no images, fewer engines.
    Light,
}

impl Preset {
    /// Get all presets in menu order.
    pub fn all() -> &'static [Preset] {
        &[Self::Secure, Self::Light]
    }

    /// Map a first-run menu answer to a preset.
    ///
    /// Only `"2"` selects [`Preset::Light`]; anything else is the default.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Self::Light,
            _ => Self::Secure,
        }
    }

    /// File name the preset is stored under in the profile directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Secure => "config_minimal.ini",
            Self::Light => "config_light.ini",
        }
    }

    /// Exact file contents of the preset.
    pub fn contents(&self) -> &'static str {
        match self {
            Self::Secure => SECURE_PRESET,
            Self::Light => LIGHT_PRESET,
        }
    }

    /// Label shown in the first-run menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Secure => "Secure minimal (recommended)",
            Self::Light => "Extremely light (maximum performance)",
        }
    }

    /// Message printed once the preset has been applied.
    pub fn activated_message(&self) -> &'static str {
        match self {
            Self::Secure => "Secure minimal mode enabled!",
            Self::Light => "Extremely light mode enabled!",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const SECURE_PRESET: &str = "[DEFAULT]
homepage = https://www.google.com
dark_mode = true
block_ads = true
disable_images = false
default_search_engine = google
available_search_engines = google,duckduckgo,bing,yahoo,ecosia";

const LIGHT_PRESET: &str = "[DEFAULT]
homepage = about:blank
dark_mode = true
block_ads = true
disable_images = true
default_search_engine = duckduckgo
available_search_engines = google,duckduckgo,bing";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_from_choice() {
        assert_eq!(Preset::from_choice("2"), Preset::Light);
        assert_eq!(Preset::from_choice(" 2\n"), Preset::Light);
        assert_eq!(Preset::from_choice("1"), Preset::Secure);
        assert_eq!(Preset::from_choice(""), Preset::Secure);
        assert_eq!(Preset::from_choice("x"), Preset::Secure);
    }

    #[test]
    fn test_secure_preset_settings() {
        let settings = Settings::from_ini_str(Preset::Secure.contents());
        assert_eq!(settings.homepage, "https://www.google.com");
        assert!(!settings.disable_images);
        assert_eq!(settings.default_search_engine, "google");
        assert_eq!(settings.available_search_engines.len(), 5);
    }

    #[test]
    fn test_light_preset_settings() {
        let settings = Settings::from_ini_str(Preset::Light.contents());
        assert_eq!(settings.homepage, "about:blank");
        assert!(settings.dark_mode);
        assert!(settings.disable_images);
        assert_eq!(settings.default_search_engine, "duckduckgo");
        assert_eq!(
            settings.available_search_engines,
            vec!["google", "duckduckgo", "bing"]
        );
    }

    #[test]
    fn test_presets_have_distinct_files() {
        assert_ne!(Preset::Secure.file_name(), Preset::Light.file_name());
        assert_eq!(Preset::all().len(), 2);
    }
}
