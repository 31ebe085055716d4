//! Line-oriented parsing for the plain-text embedding and grid formats.
//!
//! Values are separated by whitespace and/or commas. Brackets and braces are
//! ignored so that literal arrays pasted from source code parse as-is, one
//! row per line. Blank lines and lines starting with `#` are skipped.

use std::str::FromStr;

/// Yields `(line_number, line)` for every line carrying data. Line numbers
/// are one-based.
pub fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(idx, line)| {
        let trimmed = line.trim();
        let bare = trimmed.trim_matches(|c: char| is_bracket(c) || c == ',' || c.is_whitespace());
        if bare.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some((idx + 1, trimmed))
        }
    })
}

/// Parses every value on one line.
///
/// A line holds exactly one row: once a bracket closes, anything but more
/// closing brackets and separators is rejected, so `[[0,0],[1,1]]` cannot
/// silently flatten into a single row.
pub fn parse_values<T: FromStr>(line: &str) -> Result<Vec<T>, String> {
    let mut closed = false;
    for c in line.chars() {
        match c {
            ']' | '}' => closed = true,
            c if c == ',' || c.is_whitespace() => {}
            _ if closed => {
                return Err(
                    "more than one row on a line; put each row on its own line".to_string(),
                )
            }
            _ => {}
        }
    }

    line.split(|c: char| c == ',' || c.is_whitespace() || is_bracket(c))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|_| format!("cannot parse value '{token}'"))
        })
        .collect()
}

fn is_bracket(c: char) -> bool {
    matches!(c, '[' | ']' | '{' | '}')
}
