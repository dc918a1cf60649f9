//! iCalendar content-line parsing (RFC 5545 §3.1).
//!
//! This module turns raw iCalendar text into the component tree defined in
//! [`crate::core`]. The pipeline is a single synchronous pass: physical
//! lines are unfolded into logical content lines, each line splits into a
//! raw key and raw value at its first `:`, keys carrying `;`-separated
//! parameters are decomposed, names are canonicalized, and nested
//! BEGIN/END blocks assemble recursively.
//!
//! ## Usage
//!
//! ```rust
//! use icstree::parse;
//!
//! let input = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! BEGIN:VEVENT\r\n\
//! ATTENDEE;CUTYPE=INDIVIDUAL;ROLE=CHAIR:mailto:a@b.com\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let tree = parse::parse(input);
//! let event = &tree.calendars()[0].events()[0];
//! let attendee = event.property("attendee").unwrap();
//! assert_eq!(attendee.value, "mailto:a@b.com");
//! assert_eq!(attendee.param("role"), Some("CHAIR"));
//! ```
//!
//! ## Leniency
//!
//! The parser recognizes no error conditions: unbalanced BEGIN/END blocks,
//! colon-less lines, and unknown names all map to defined output, never a
//! panic or an error value. Callers needing strict RFC 5545 conformance
//! must validate the returned tree themselves.

mod lexer;
mod names;
mod parser;

pub use lexer::{logical_lines, parse_parameters, split_content_line};
pub use names::canonical_name;
pub use parser::{parse, parse_physical_lines};
