//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// A minimal desktop browser shell.
#[derive(Parser, Debug)]
#[command(name = "browlite", version, about)]
pub struct Args {
    /// URL to open, or `-favs` to pick a bookmark on the console first.
    #[arg(value_name = "TARGET", allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Directory holding config.ini, favs.txt and the presets.
    #[arg(long, value_name = "DIR", env = "BROWLITE_HOME")]
    pub profile: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["browlite"]).unwrap();
        assert!(args.target.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_url_target() {
        let args = Args::try_parse_from(["browlite", "https://example.com"]).unwrap();
        assert_eq!(args.target.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_bookmarks_token_is_a_value() {
        let args = Args::try_parse_from(["browlite", "-favs"]).unwrap();
        assert_eq!(args.target.as_deref(), Some(browlite_core::BOOKMARKS_TOKEN));
    }

    #[test]
    fn test_profile_and_verbose() {
        let args =
            Args::try_parse_from(["browlite", "--verbose", "--profile", "/tmp/p", "about:blank"])
                .unwrap();
        assert!(args.verbose);
        assert_eq!(args.profile, Some(PathBuf::from("/tmp/p")));
        assert_eq!(args.target.as_deref(), Some("about:blank"));
    }
}
