//! Quoted `#include` line recognition.
//!
//! The check is a loose heuristic, not a preprocessor:
//! a line qualifies when its raw text (no leading whitespace stripped) starts
//! with `#include` and contains a `"` anywhere. The target is the text between
//! the first and second quote, or the rest of the line when there is no
//! second quote.

const INCLUDE_DIRECTIVE: &str = "#include";

/// Whether `line` should be inspected for a local include target.
pub fn is_include_line(line: &str) -> bool {
    line.starts_with(INCLUDE_DIRECTIVE) && line.contains('"')
}

/// Extract the include target from a line, if it is a valid include line.
///
/// Returns `None` for non-include lines and for empty targets (`#include ""`).
///
/// Both of these depart from a plain split on `"`. An unterminated quote
/// yields the rest of the line rather than a target carrying the line
/// ending. An empty target is dropped because as a suffix it would match
/// every indexed file.
pub fn include_target(line: &str) -> Option<&str> {
    if !is_include_line(line) {
        return None;
    }

    let target = line.split('"').nth(1)?;
    if target.is_empty() {
        return None;
    }

    Some(target)
}

/// Collect include targets from file contents in line order.
pub fn include_targets(contents: &str) -> Vec<&str> {
    contents.lines().filter_map(include_target).collect()
}
