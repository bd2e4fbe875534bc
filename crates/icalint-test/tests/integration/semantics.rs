//! Semantic validation of parsed calendars.

use icalint_test::RfcError;
use icalint_test::ical::{DiagnosticCode, Severity, parse_icalendar};

use super::helpers::*;

#[test_log::test]
fn broken_fixture_reports_each_component() {
    let result = parse_icalendar(BROKEN);

    assert!(!result.is_valid());
    assert_eq!(
        error_codes(&result),
        vec![
            (DiagnosticCode::MissingDtstartOrMethod, 4),
            (DiagnosticCode::MissingTimezoneDefinition, 10),
            (DiagnosticCode::MissingRequiredProperty, 13),
        ]
    );
    assert_eq!(
        warning_codes(&result),
        vec![(DiagnosticCode::InvalidVersion, 3)]
    );
    assert_eq!(
        result.errors()[2].message,
        "VTODO missing required property: UID"
    );
}

#[test]
fn warnings_do_not_affect_validity() {
    let input = MINIMAL.replace("VERSION:2.0", "VERSION:3.0");
    let result = parse_icalendar(&input);

    assert!(result.is_valid());
    let warning = &result.warnings()[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.code, DiagnosticCode::InvalidVersion);
    assert_eq!(warning.line, 2);
}

#[test]
fn method_stands_in_for_dtstart() {
    let input = "\
BEGIN:VCALENDAR
VERSION:2.0
PRODID:x
BEGIN:VEVENT
UID:1
DTSTAMP:20260101T000000Z
METHOD:REQUEST
END:VEVENT
END:VCALENDAR";
    assert!(parse_icalendar(input).is_valid());
}

#[test]
fn event_with_identity_and_start_is_clean() {
    let input = "\
BEGIN:VCALENDAR
VERSION:2.0
PRODID:x
BEGIN:VEVENT
UID:1
DTSTAMP:20260101T000000Z
DTSTART:20260102T000000Z
END:VEVENT
END:VCALENDAR";
    let result = parse_icalendar(input);
    assert!(result.diagnostics().is_empty(), "{:?}", result.diagnostics());
}

#[test]
fn second_calendar_is_reported_but_not_validated() {
    let input = format!("{MINIMAL}BEGIN:VCALENDAR\nEND:VCALENDAR\n");
    let result = parse_icalendar(&input);

    assert_eq!(
        error_codes(&result),
        vec![(DiagnosticCode::MultipleVcalendar, 5)]
    );
    assert_eq!(result.components().len(), 2);
}

#[test]
fn missing_calendar_skips_component_checks() {
    let result = parse_icalendar("BEGIN:VEVENT\nSUMMARY:loose\nEND:VEVENT\n");
    assert_eq!(
        error_codes(&result),
        vec![(DiagnosticCode::MissingVcalendar, 1)]
    );
}

#[test]
fn ensure_valid_converts_to_an_error() -> anyhow::Result<()> {
    let valid = parse_icalendar(MEETING).ensure_valid()?;
    assert!(valid.is_valid());

    let err = parse_icalendar(BROKEN)
        .ensure_valid()
        .expect_err("broken fixture must not pass");
    match err {
        RfcError::InvalidCalendar { count, line, .. } => {
            assert_eq!(count, 3);
            assert_eq!(line, 4);
        }
        other @ RfcError::UnknownDiagnosticCode(_) => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn diagnostic_codes_parse_from_their_names() {
    for name in ["MISSING_VCALENDAR", "INVALID_RRULE_FREQ", "UNCLOSED_COMPONENT"] {
        let code: DiagnosticCode = name.parse().expect("known code");
        assert_eq!(code.to_string(), name);
    }
    assert!(matches!(
        "NOT_A_CODE".parse::<DiagnosticCode>(),
        Err(RfcError::UnknownDiagnosticCode(_))
    ));
}
