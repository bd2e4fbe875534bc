#![allow(dead_code)]
//! Test helpers for integration tests.
//!
//! Provides:
//! - Fixture documents under `tests/fixtures`
//! - Shorthand for comparing diagnostics by code and line

use icalint_test::ical::{Diagnostic, DiagnosticCode, ParseOptions, ParseResult};

/// A complete calendar with a timezone, a recurring event, an alarm and a task.
pub const MEETING: &str = include_str!("../fixtures/meeting.ics");

/// One calendar with a semantic or value problem in every component.
pub const BROKEN: &str = include_str!("../fixtures/broken.ics");

/// Smallest document that passes every check.
pub const MINIMAL: &str = "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//x//y//EN\nEND:VCALENDAR\n";

/// Options with every value check enabled.
#[must_use]
pub fn with_value_checks() -> ParseOptions {
    ParseOptions::default().with_value_checks(true)
}

/// `(code, line)` pairs in the order they were reported.
#[must_use]
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<(DiagnosticCode, usize)> {
    diagnostics.iter().map(|d| (d.code, d.line)).collect()
}

#[must_use]
pub fn error_codes(result: &ParseResult) -> Vec<(DiagnosticCode, usize)> {
    codes(result.errors())
}

#[must_use]
pub fn warning_codes(result: &ParseResult) -> Vec<(DiagnosticCode, usize)> {
    codes(result.warnings())
}
