//! iCalendar serialization (RFC 5545).
//!
//! Writes a parsed component tree back out as content lines. Values are
//! written verbatim and lines are never folded.

mod serializer;

pub use serializer::{serialize, serialize_component, serialize_property};
