//! ## Summary
//! Grammar checks for individual property values.
//!
//! These are not part of the default parse. Callers run them per property, or
//! over a whole forest with [`validate_property_values`], or enable
//! `ParseOptions::value_checks`.

use std::sync::LazyLock;

use regex::Regex;

use crate::rfc::ical::core::{CalendarComponent, Diagnostic, DiagnosticCode, Property};

/// RFC 5545 §3.3.4 DATE: `YYYYMMDD`.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{8}$"));

/// RFC 5545 §3.3.5 DATE-TIME: `YYYYMMDDTHHMMSS` with optional UTC `Z`.
static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{8}T[0-9]{6}Z?$"));

/// RFC 5545 §3.3.6 DURATION, with every component optional after `P`.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[+-]?P([0-9]+Y)?([0-9]+M)?([0-9]+W)?([0-9]+D)?(T([0-9]+H)?([0-9]+M)?([0-9]+S)?)?$",
    )
});

/// RFC 5545 §3.3.10 FREQ values. Matching is exact (case-sensitive).
const RRULE_FREQUENCIES: &[&str] = &[
    "SECONDLY", "MINUTELY", "HOURLY", "DAILY", "WEEKLY", "MONTHLY", "YEARLY",
];

#[expect(clippy::expect_used, reason = "patterns are string literals")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("value pattern must compile")
}

/// ## Summary
/// Runs the value check that applies to this property's name, if any.
///
/// `DTSTART`, `DTEND` and `DTSTAMP` are checked as DATE or DATE-TIME,
/// `DURATION` as a duration and `RRULE` as a recurrence rule.
#[must_use]
pub fn validate_property_value(property: &Property) -> Option<Diagnostic> {
    match property.name.as_str() {
        "DTSTART" | "DTEND" | "DTSTAMP" => validate_datetime(property),
        "DURATION" => validate_duration(property),
        "RRULE" => validate_rrule(property),
        _ => None,
    }
}

/// Checks that the value is a DATE or a DATE-TIME.
#[must_use]
pub fn validate_datetime(property: &Property) -> Option<Diagnostic> {
    let value = property.value.as_str();
    if DATE_PATTERN.is_match(value) || DATE_TIME_PATTERN.is_match(value) {
        return None;
    }

    Some(Diagnostic::error(
        DiagnosticCode::InvalidDatetime,
        property.line,
        format!("Invalid {} format: \"{value}\"", property.name),
    ))
}

/// Checks that the value matches the DURATION grammar.
#[must_use]
pub fn validate_duration(property: &Property) -> Option<Diagnostic> {
    if DURATION_PATTERN.is_match(&property.value) {
        return None;
    }

    Some(Diagnostic::error(
        DiagnosticCode::InvalidDuration,
        property.line,
        format!("Invalid DURATION format: \"{}\"", property.value),
    ))
}

/// Checks that the rule has a `FREQ` part with a known frequency.
///
/// Only FREQ is inspected; the first FREQ part with an unknown value is
/// reported. Text after a second `=` in a part is ignored. Other rule parts
/// are not validated.
#[must_use]
pub fn validate_rrule(property: &Property) -> Option<Diagnostic> {
    let mut has_freq = false;

    for part in property.value.split(';') {
        let mut pieces = part.split('=');
        if pieces.next() != Some("FREQ") {
            continue;
        }
        has_freq = true;

        let value = pieces.next().unwrap_or_default();
        if !RRULE_FREQUENCIES.contains(&value) {
            return Some(Diagnostic::error(
                DiagnosticCode::InvalidRruleFreq,
                property.line,
                format!("Invalid FREQ value in RRULE: \"{value}\""),
            ));
        }
    }

    if has_freq {
        None
    } else {
        Some(Diagnostic::error(
            DiagnosticCode::MissingRruleFreq,
            property.line,
            "RRULE must contain FREQ",
        ))
    }
}

/// ## Summary
/// Runs [`validate_property_value`] over top-level properties and every
/// component at any depth, returning the diagnostics ordered by line.
#[must_use]
pub fn validate_property_values(
    components: &[CalendarComponent],
    properties: &[Property],
) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = properties
        .iter()
        .filter_map(validate_property_value)
        .collect();

    let mut pending: Vec<&CalendarComponent> = components.iter().collect();
    while let Some(component) = pending.pop() {
        diagnostics.extend(component.properties.iter().filter_map(validate_property_value));
        pending.extend(&component.sub_components);
    }

    diagnostics.sort_by_key(|d| d.line);
    diagnostics
}
