//! Blocking console prompts used before the window opens.

use std::io::{BufRead, Write};

use crate::bookmarks::Bookmarks;
use crate::store::StoreError;

/// Message printed when there is nothing to pick from.
pub const NO_BOOKMARKS_MESSAGE: &str = "No bookmarks saved.";

/// Parse a 1-based menu answer.
///
/// Only plain ASCII digits in `1..=len` are accepted.
pub fn parse_menu_choice(answer: &str, len: usize) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
}

/// Print `prompt` and read one line. EOF reads as an empty answer.
///
/// Bytes that are not UTF-8 are replaced rather than rejected.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, StoreError> {
    write!(output, "{prompt}").map_err(StoreError::Console)?;
    output.flush().map_err(StoreError::Console)?;

    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .map_err(StoreError::Console)?;
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}

/// List bookmarks and let the user pick one by number.
///
/// Returns `None` when the list is empty or the answer is not a valid number.
pub fn pick_bookmark<R: BufRead, W: Write>(
    bookmarks: &Bookmarks,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>, StoreError> {
    if bookmarks.is_empty() {
        writeln!(output, "{NO_BOOKMARKS_MESSAGE}").map_err(StoreError::Console)?;
        return Ok(None);
    }

    writeln!(output, "\nBookmarks:").map_err(StoreError::Console)?;
    for (i, url) in bookmarks.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, url).map_err(StoreError::Console)?;
    }

    let answer = ask(input, output, "\nChoose a number (or Enter to cancel): ")?;
    Ok(parse_menu_choice(&answer, bookmarks.len())
        .and_then(|n| bookmarks.get_numbered(n))
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bookmarks() -> Bookmarks {
        Bookmarks::parse("https://a.test\nhttps://b.test")
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1", 3), Some(1));
        assert_eq!(parse_menu_choice(" 3 ", 3), Some(3));
        assert_eq!(parse_menu_choice("0", 3), None);
        assert_eq!(parse_menu_choice("4", 3), None);
        assert_eq!(parse_menu_choice("+2", 3), None);
        assert_eq!(parse_menu_choice("-1", 3), None);
        assert_eq!(parse_menu_choice("two", 3), None);
        assert_eq!(parse_menu_choice("", 3), None);
    }

    #[test]
    fn test_ask_reads_trimmed_line() {
        let mut input = Cursor::new(b"  hello \nrest\n".to_vec());
        let mut output = Vec::new();
        let answer = ask(&mut input, &mut output, "> ").unwrap();
        assert_eq!(answer, "hello");
        assert_eq!(String::from_utf8(output).unwrap(), "> ");
    }

    #[test]
    fn test_ask_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"\xff2\n".to_vec());
        let mut output = Vec::new();
        let answer = ask(&mut input, &mut output, "> ").unwrap();
        assert_eq!(answer, "\u{FFFD}2");
        assert_eq!(parse_menu_choice(&answer, 5), None);
    }

    #[test]
    fn test_ask_eof_is_empty() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert_eq!(ask(&mut input, &mut output, "> ").unwrap(), "");
    }

    #[test]
    fn test_pick_bookmark_valid_choice() {
        let mut input = Cursor::new(b"2\n".to_vec());
        let mut output = Vec::new();
        let picked = pick_bookmark(&bookmarks(), &mut input, &mut output).unwrap();
        assert_eq!(picked.as_deref(), Some("https://b.test"));

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("1. https://a.test"));
        assert!(printed.contains("2. https://b.test"));
    }

    #[test]
    fn test_pick_bookmark_cancel() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(pick_bookmark(&bookmarks(), &mut input, &mut output).unwrap(), None);

        let mut input = Cursor::new(b"9\n".to_vec());
        assert_eq!(pick_bookmark(&bookmarks(), &mut input, &mut output).unwrap(), None);
    }

    #[test]
    fn test_pick_bookmark_empty_list() {
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut output = Vec::new();
        let picked = pick_bookmark(&Bookmarks::new(), &mut input, &mut output).unwrap();
        assert_eq!(picked, None);
        assert_eq!(String::from_utf8(output).unwrap(), "No bookmarks saved.\n");
    }
}
