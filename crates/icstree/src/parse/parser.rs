//! Recursive component-tree builder.

use crate::core::Component;

use super::lexer::{logical_lines, parse_parameters, split_content_line};
use super::names::{BEGIN, END, canonical_name};

/// Parses a complete iCalendar document into its component tree.
///
/// The input splits on any of CRLF, LF, or CR, mixed freely. The returned
/// root component holds the top-level components of the document, typically
/// a single `VCalendar`.
///
/// Parsing never fails: non-conforming input produces best-effort,
/// partially-structured output rather than a diagnostic.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Component {
    let physical: Vec<&str> = input.split(['\r', '\n']).collect();
    parse_physical_lines(&physical)
}

/// Parses a document already split into physical lines.
///
/// Folded continuations are still resolved here; only the line splitting has
/// been done by the caller. Same output and failure semantics as [`parse`].
#[must_use]
pub fn parse_physical_lines<S: AsRef<str>>(physical: &[S]) -> Component {
    let lines = logical_lines(physical);
    tracing::debug!(count = lines.len(), "unfolded logical lines");

    build_level(&lines)
}

/// Assembles one nesting level from a slice of logical lines.
///
/// Recursion depth is bounded by the number of input lines, since every
/// nested call strips at least the enclosing BEGIN line.
fn build_level(lines: &[String]) -> Component {
    let mut output = Component::new();
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        let (raw_key, raw_value) = split_content_line(line);

        if raw_key == BEGIN {
            let end = find_matching_end(lines, i, raw_value);
            let body = &lines[i + 1..end];
            if !body.is_empty() {
                let child = build_level(body);
                output.push_component(canonical_name(raw_value), child);
            }
            // Skip to the END line; the increment below consumes it. An
            // immediately-empty BEGIN/END pair leaves no entry behind.
            i = end;
        } else if !line.starts_with(END) {
            match parse_parameters(raw_key, raw_value) {
                Some(property) => output.insert_property(property),
                None => output.insert_value(canonical_name(raw_key), raw_value),
            }
        }
        // A stray END line (malformed nesting) falls through untouched.

        i += 1;
    }

    output
}

/// Finds the line closing `BEGIN:<type_name>`: the first line at or after
/// `begin` exactly equal to `END:<type_name>`.
///
/// This is deliberately a first-match scan, not a depth-counting matcher: a
/// component nested inside a same-named component matches the inner END
/// first. The scan is kept for compatibility with consumers of the
/// historical output shape and is isolated here so a stricter matcher could
/// be swapped in.
///
/// Returns `lines.len()` when no END is found, which makes an unmatched
/// BEGIN swallow the remainder of its level as the component body.
fn find_matching_end(lines: &[String], begin: usize, type_name: &str) -> usize {
    let terminator = format!("{END}:{type_name}");
    lines[begin..]
        .iter()
        .position(|line| *line == terminator)
        .map_or(lines.len(), |offset| begin + offset)
}
