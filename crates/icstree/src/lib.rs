//! Lenient iCalendar (RFC 5545) content-line parser.
//!
//! Converts raw iCalendar text into a nested tree of components and
//! properties: line unfolding, content-line splitting, the
//! `KEY;PARAM=VALUE:VALUE` parameter grammar, and recursive BEGIN/END block
//! matching. Value strings (dates, durations, recurrence rules) pass through
//! untouched; interpreting them is the caller's concern, as is strict RFC
//! 5545 validation.
//!
//! The parser is a best-effort structural transform and never fails on
//! textual input. Unbalanced blocks, colon-less lines, and unknown names all
//! produce defined output rather than an error.
//!
//! ## Usage
//!
//! ```rust
//! let input = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! BEGIN:VEVENT\r\n\
//! UID:abc123\r\n\
//! SUMMARY:Meeting\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let tree = icstree::parse(input);
//! let calendar = tree.component("VCalendar").unwrap();
//! assert_eq!(calendar.value("version"), Some("2.0"));
//!
//! let event = &calendar.events()[0];
//! assert_eq!(event.value("summary"), Some("Meeting"));
//! ```

pub mod core;
pub mod parse;

pub use crate::core::{Component, Entry, Property};
pub use crate::parse::{parse, parse_physical_lines};
