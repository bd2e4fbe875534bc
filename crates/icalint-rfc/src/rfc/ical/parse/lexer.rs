//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line-ending normalization, unfolding and the split of a content
//! line into name, parameters and value.

use crate::rfc::ical::core::{Parameter, Property};

/// Rewrites every `\r\n` and bare `\r` as `\n`.
#[must_use]
pub fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Unfolds content lines by removing line breaks followed by whitespace.
///
/// Per RFC 5545 §3.1:
/// - Lines are folded by inserting a line break followed by SPACE or HTAB
/// - Unfolding removes the line break and that single whitespace character
///
/// Expects input whose line endings were already normalized to `\n`.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' && matches!(chars.peek(), Some(' ' | '\t')) {
            // Fold: drop the break and the one continuation character
            chars.next();
        } else {
            result.push(c);
        }
    }

    result
}

/// Byte order mark some editors put at the start of `.ics` files.
const BOM: char = '\u{FEFF}';

/// Turns raw text into logical content lines.
///
/// Line endings are normalized, folded lines are joined, and each remaining
/// line is trimmed of whitespace and byte order marks; lines that are empty
/// after trimming are dropped. Never fails: empty input yields no lines.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    unfold(&normalize_line_endings(input))
        .split('\n')
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == BOM))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decomposes a content line into a [`Property`].
///
/// Format: `name *(";" param) ":" value`
///
/// Only the first `:` separates the value, so values such as `mailto:` URIs
/// keep their colons. The caller must pass a line that contains a colon;
/// without one the whole line is taken as the name and the value is empty.
#[must_use]
pub fn parse_content_line(line: &str, line_num: usize) -> Property {
    let (name_and_params, value) = line.split_once(':').unwrap_or((line, ""));

    let (name, parameters) = match name_and_params.split_once(';') {
        Some((name, params)) => (name, parse_parameters(params)),
        None => (name_and_params, Vec::new()),
    };

    Property {
        name: name.to_ascii_uppercase(),
        value: value.to_string(),
        parameters,
        line: line_num,
    }
}

/// Parses a `;`-separated list of `NAME=VALUE` pairs.
///
/// Segments without `=` are skipped. Only the name is uppercased.
#[must_use]
pub fn parse_parameters(params: &str) -> Vec<Parameter> {
    params
        .split(';')
        .filter_map(|segment| segment.split_once('='))
        .map(|(name, value)| Parameter::new(name, value))
        .collect()
}
