#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path, sync::Arc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into a source file, with the file's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<str>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::from("<null>"))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line's text (with its newline) and
/// the offset of `position` within that line, or `None` past the end.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// 1-based line and column of byte `position`; the column counts characters.
pub fn line_col(content: &str, position: u32) -> Option<(usize, usize)> {
    let (line, text, line_pos) = get_line_at_position(content, position)?;
    let column = text.get(..line_pos)?.chars().count() + 1;
    Some((line, column))
}


/// Formats `error` as a caret diagnostic against the `source` it came from.
///
/// ```text
/// Error: InvalidCharacter
/// -> main.c:2:12
///   |
/// 2 | return @;
///   | -------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("-> {}\n", file.to_string_lossy()));
        return out;
    };

    let column = line_col(source, position.0).map_or(1, |(_, column)| column);
    out.push_str(&format!("-> {}:{}:{}\n", file.to_string_lossy(), line, column));

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |prefix| prefix.chars().count())
        + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Prints `error` to stderr as a caret diagnostic.
pub fn display_error(error: &Error, source: &str, file: &Path) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += c.len_utf8();
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
