//! Structural parsing through the public entry points.
//!
//! Verifies BEGIN/END matching, recovery and logical line numbering.

use icalint_test::ical::{
    ComponentKind, DiagnosticCode, ParseOptions, parse_icalendar, parse_with_options,
};

use super::helpers::*;

#[test_log::test]
fn meeting_fixture_builds_the_expected_tree() {
    let result = parse_icalendar(MEETING);
    assert!(result.is_valid(), "{:?}", result.errors());
    assert!(result.warnings().is_empty());

    let calendar = result.calendar().expect("fixture has a VCALENDAR");
    assert_eq!((calendar.start_line, calendar.end_line), (1, Some(44)));

    let kinds: Vec<_> = calendar.sub_components.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![ComponentKind::Timezone, ComponentKind::Event, ComponentKind::Todo]
    );

    let timezone = &calendar.sub_components[0];
    let observances: Vec<_> = timezone
        .sub_components
        .iter()
        .map(|c| (c.kind, c.start_line, c.end_line))
        .collect();
    assert_eq!(
        observances,
        vec![
            (ComponentKind::Daylight, 7, Some(13)),
            (ComponentKind::Standard, 14, Some(20)),
        ]
    );

    let event = &calendar.sub_components[1];
    assert_eq!((event.start_line, event.end_line), (22, Some(37)));
    assert_eq!(event.children_of_kind(ComponentKind::Alarm).len(), 1);
}

#[test]
fn properties_are_decomposed() {
    let result = parse_icalendar(MEETING);
    let event = &result.calendar().expect("fixture has a VCALENDAR").sub_components[1];

    let start = event.property("DTSTART").expect("event has DTSTART");
    assert_eq!(start.parameter("TZID"), Some("Europe/Berlin"));
    assert_eq!(start.value, "20260115T100000");
    assert_eq!(start.line, 25);

    let organizer = event.property("ORGANIZER").expect("event has ORGANIZER");
    assert_eq!(organizer.parameter("CN"), Some("Planning Lead"));
    assert_eq!(organizer.value, "mailto:lead@example.com");

    // Folded and still escaped.
    let description = event.property("DESCRIPTION").expect("event has DESCRIPTION");
    assert_eq!(
        description.value,
        "Agenda: review last quarter\\, agree on goals and assign owners for each goal."
    );
    // Lines after a fold are numbered logically.
    assert_eq!(event.property("ORGANIZER").map(|p| p.line), Some(29));
}

#[test]
fn empty_calendar_needs_version_and_prodid() {
    let result = parse_icalendar("BEGIN:VCALENDAR\nEND:VCALENDAR");

    assert!(!result.is_valid());
    assert_eq!(
        error_codes(&result),
        vec![
            (DiagnosticCode::MissingRequiredProperty, 1),
            (DiagnosticCode::MissingRequiredProperty, 1),
        ]
    );
    assert!(result.errors()[0].message.contains("VERSION"));
    assert!(result.errors()[1].message.contains("PRODID"));
}

#[test]
fn mismatched_end_then_unclosed_event() {
    let result = parse_icalendar("BEGIN:VCALENDAR\nBEGIN:VEVENT\nEND:VCALENDAR\n");

    let errors = error_codes(&result);
    assert_eq!(errors[0], (DiagnosticCode::MismatchedEnd, 3));
    assert_eq!(errors[1].0, DiagnosticCode::UnclosedComponent);
    assert!(result.errors()[1].message.contains("VEVENT"));
}

#[test]
fn unknown_component_is_not_recorded() {
    let result = parse_icalendar("BEGIN:FOO\nEND:FOO\n");

    assert!(result.components().is_empty());
    let errors = error_codes(&result);
    assert!(errors.contains(&(DiagnosticCode::UnknownComponent, 1)));
    assert!(errors.contains(&(DiagnosticCode::UnmatchedEnd, 2)));
}

#[test]
fn minimal_calendar_is_clean() {
    let result = parse_icalendar(MINIMAL);
    assert!(result.is_valid());
    assert!(result.diagnostics().is_empty());
}

#[test]
fn line_endings_and_blank_lines() {
    let crlf = MINIMAL.replace('\n', "\r\n");
    let cr = MINIMAL.replace('\n', "\r");
    let spaced = MINIMAL.replace('\n', "\n\n   \n");

    for input in [crlf, cr, spaced] {
        let result = parse_icalendar(&input);
        assert_eq!(result, parse_icalendar(MINIMAL), "{input:?}");
    }
}

#[test]
fn whitespace_only_input_has_no_calendar() {
    let result = parse_icalendar(" \r\n\t\n\n");
    assert_eq!(
        error_codes(&result),
        vec![(DiagnosticCode::MissingVcalendar, 1)]
    );
}

#[test]
fn strict_components_option() {
    let strict = ParseOptions::default().with_strict_components(true);
    let result = parse_with_options(MEETING, &strict);

    assert!(!result.is_valid());
    assert!(result.has_code(DiagnosticCode::UnknownComponent));
    let calendar = result.calendar().expect("fixture has a VCALENDAR");
    assert!(calendar.sub_components[0].sub_components.is_empty());
}
