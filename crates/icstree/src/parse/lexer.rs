//! Content-line lexing: unfolding, splitting, and the parameter grammar
//! (RFC 5545 §3.1).

use crate::core::Property;

use super::names::canonical_name;

/// Merges a sequence of physical lines into logical content lines, undoing
/// RFC 5545 line folding.
///
/// A physical line beginning with a single space is a continuation of the
/// previous logical line: the leading space is dropped, the remainder is
/// trimmed and appended verbatim (no separator). Any other line is trimmed
/// of surrounding whitespace; a line that is empty after trimming is dropped
/// and neither starts a logical line nor serves as a continuation target.
///
/// A continuation with no preceding logical line (a document that opens with
/// a folded line) is dropped silently.
#[must_use]
pub fn logical_lines<S: AsRef<str>>(physical: &[S]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(physical.len());

    for raw in physical {
        let raw = raw.as_ref();
        if let Some(continuation) = raw.strip_prefix(' ') {
            if let Some(previous) = lines.last_mut() {
                previous.push_str(continuation.trim());
            }
            continue;
        }

        let line = raw.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

/// Splits a logical line into its raw key and raw value around the first `:`.
///
/// The value may itself contain colons (`mailto:` URIs); only the first one
/// delimits. A colon-less line yields the whole line as the key and an empty
/// value.
#[must_use]
pub fn split_content_line(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((raw_key, raw_value)) => (raw_key, raw_value),
        None => (line, ""),
    }
}

/// Decomposes a raw key of the form `NAME;P1=V1;P2=V2` into a parameterized
/// [`Property`] carrying `raw_value`.
///
/// Returns `None` when the key contains no `;`, in which case the caller
/// stores the line as a bare name/value pair. Each parameter segment splits
/// on its first `=`; a segment without `=` is kept with an empty-string
/// value. Parameter values are not unescaped.
#[must_use]
pub fn parse_parameters(raw_key: &str, raw_value: &str) -> Option<Property> {
    if !raw_key.contains(';') {
        return None;
    }

    let mut segments = raw_key.split(';');
    let base_name = segments.next().unwrap_or_default();
    let mut property = Property::new(canonical_name(base_name), raw_value);

    for segment in segments {
        let (name, value) = match segment.split_once('=') {
            Some((name, value)) => (name, value),
            None => (segment, ""),
        };
        property.set_param(canonical_name(name), value);
    }

    Some(property)
}
