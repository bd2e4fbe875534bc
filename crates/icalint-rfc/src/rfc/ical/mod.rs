//! iCalendar (RFC 5545) support.
//!
//! - `core`: components, properties and diagnostics
//! - `parse`: text to [`ParseResult`]
//! - `build`: component tree back to text

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use self::core::{
    CalendarComponent, ComponentKind, Diagnostic, DiagnosticCode, Diagnostics, Parameter,
    Property, Severity,
};
pub use self::parse::{ParseOptions, ParseResult, parse_icalendar, parse_with_options};
