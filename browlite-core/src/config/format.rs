//! INI file format of the configuration.
//!
//! The file holds one `[DEFAULT]` section of flat `key = value` pairs. Keys
//! are case-insensitive. Values are taken raw, without quote or escape
//! processing.

use ini::{EscapePolicy, Ini, LineSeparator, ParseOption, WriteOption};
use serde_json::{Map, Value};

/// Section every key is written to.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Parse INI text into a flat key/value map.
///
/// Entries from all sections are merged, keys are lowercased and later
/// duplicates win.
pub fn read_entries(text: &str) -> Result<Map<String, Value>, ini::ParseError> {
    let opt = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let doc = Ini::load_from_str_opt(text, opt)?;

    let mut entries = Map::new();
    for (_, props) in doc.iter() {
        for (key, value) in props.iter() {
            entries.insert(key.to_ascii_lowercase(), Value::String(value.to_string()));
        }
    }
    Ok(entries)
}

/// Write a flat map as a single `[DEFAULT]` section, in map order.
pub fn write_entries(entries: &Map<String, Value>) -> std::io::Result<String> {
    let mut doc = Ini::new();
    for (key, value) in entries {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        doc.with_section(Some(DEFAULT_SECTION)).set(key.as_str(), value);
    }

    let mut buf = Vec::new();
    doc.write_to_opt(
        &mut buf,
        WriteOption {
            escape_policy: EscapePolicy::Nothing,
            line_separator: LineSeparator::CR,
            kv_separator: " = ",
        },
    )?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse an INI boolean.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(entries: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
        entries.get(key).and_then(Value::as_str)
    }

    #[test]
    fn test_read_basic_entries() {
        let entries =
            read_entries("[DEFAULT]\nhomepage = https://a.test\ndark_mode=false\n").unwrap();
        assert_eq!(get(&entries, "homepage"), Some("https://a.test"));
        assert_eq!(get(&entries, "dark_mode"), Some("false"));
    }

    #[test]
    fn test_read_colon_delimiter_and_comments() {
        let entries = read_entries("# comment\n; other\n[DEFAULT]\nhomepage: https://b.test\n")
            .unwrap();
        assert_eq!(get(&entries, "homepage"), Some("https://b.test"));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_value_keeps_later_delimiters() {
        let entries = read_entries("[DEFAULT]\nhomepage = https://c.test/?a=b\n").unwrap();
        assert_eq!(get(&entries, "homepage"), Some("https://c.test/?a=b"));
    }

    #[test]
    fn test_keys_are_lowercased() {
        let entries = read_entries("[DEFAULT]\nHomePage = x\n").unwrap();
        assert_eq!(get(&entries, "homepage"), Some("x"));
    }

    #[test]
    fn test_values_are_raw() {
        let entries = read_entries("[DEFAULT]\nhomepage = \"x\"\n").unwrap();
        assert_eq!(get(&entries, "homepage"), Some("\"x\""));
    }

    #[test]
    fn test_write_then_read_keeps_order() {
        let mut entries = Map::new();
        entries.insert("homepage".into(), Value::String("about:blank".into()));
        entries.insert("dark_mode".into(), Value::String("true".into()));

        let text = write_entries(&entries).unwrap();
        assert!(text.contains("[DEFAULT]"));
        assert!(text.contains("homepage = about:blank"));

        let read = read_entries(&text).unwrap();
        let keys: Vec<_> = read.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["homepage", "dark_mode"]);
    }

    #[test]
    fn test_parse_bool_spellings() {
        for s in ["1", "yes", "TRUE", "On"] {
            assert_eq!(parse_bool(s), Some(true), "{s}");
        }
        for s in ["0", "No", "false", "OFF"] {
            assert_eq!(parse_bool(s), Some(false), "{s}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }
}
