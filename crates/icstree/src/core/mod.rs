//! Core data model for the parsed component tree.
//!
//! These types are designed for:
//! - Structural fidelity: the string/record duality of bare vs. parameterized
//!   properties and the single/list duality of sibling components survive
//!   into the output instead of being collapsed
//! - Deterministic serialization: entries are kept in a sorted map so the
//!   same document always serializes to the same JSON

mod component;
mod property;

pub use component::{Component, Entry};
pub use property::Property;
