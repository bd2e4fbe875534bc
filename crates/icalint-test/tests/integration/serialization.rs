//! Serializing parse results back to iCalendar text and to JSON.

use icalint_test::ical::build::serialize;
use icalint_test::ical::parse_icalendar;

use super::helpers::*;

#[test]
fn serialized_meeting_reparses_identically() {
    let first = parse_icalendar(MEETING);
    let text = serialize(first.components(), first.properties());

    assert!(text.lines().count() > 40);
    assert!(text.split("\r\n").all(|line| !line.contains('\n')));
    assert!(text.contains("DTSTART;TZID=Europe/Berlin:20260115T100000\r\n"));

    // No blank lines or folds in the output, so line numbers match too.
    assert_eq!(parse_icalendar(&text), first);
}

#[test]
fn serialized_broken_fixture_keeps_its_findings() {
    let first = parse_icalendar(BROKEN);
    let second = parse_icalendar(&serialize(first.components(), first.properties()));

    assert_eq!(error_codes(&first), error_codes(&second));
    assert_eq!(warning_codes(&first), warning_codes(&second));
}

#[test]
fn json_shape() -> anyhow::Result<()> {
    let result = parse_icalendar(BROKEN);
    let json = serde_json::to_value(&result)?;

    assert_eq!(json["valid"], false);
    assert_eq!(json["warnings"][0]["code"], "INVALID_VERSION");
    assert_eq!(json["warnings"][0]["severity"], "warning");
    assert_eq!(json["warnings"][0]["line"], 3);

    let calendar = &json["components"][0];
    assert_eq!(calendar["type"], "VCALENDAR");
    assert_eq!(calendar["start_line"], 1);
    assert_eq!(calendar["end_line"], 16);
    assert_eq!(calendar["sub_components"][0]["type"], "VEVENT");
    assert_eq!(calendar["properties"][0]["name"], "PRODID");

    let unclosed = serde_json::to_value(parse_icalendar("BEGIN:VCALENDAR\n"))?;
    assert!(unclosed["components"][0]["end_line"].is_null());
    Ok(())
}
