//! The command-line report built on top of the parser.

use icalint_test::app::report::{FileReport, render};
use icalint_test::config::OutputFormat;
use icalint_test::ical::ParseOptions;

use super::helpers::*;

#[test]
fn exit_status_follows_the_reports() {
    let options = ParseOptions::default();
    let reports = [
        FileReport::lint("meeting.ics", MEETING, &options),
        FileReport::lint("broken.ics", BROKEN, &options),
    ];

    assert!(reports[0].passes(true));
    assert!(!reports[1].passes(false));
}

#[test]
fn text_report_prefixes_the_source() {
    let reports = [FileReport::lint("broken.ics", BROKEN, &with_value_checks())];
    let text = render(&reports, OutputFormat::Text).expect("text rendering cannot fail");

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|line| line.starts_with("broken.ics: ")));
    assert_eq!(
        lines[0],
        "broken.ics: line 3: warning[INVALID_VERSION]: VERSION should be \"2.0\" (found: \"2.1\")"
    );
    assert_eq!(lines[7], "broken.ics: 6 errors, 1 warning");
}

#[test]
fn json_report_lists_every_document() -> anyhow::Result<()> {
    let options = ParseOptions::default();
    let reports = [
        FileReport::lint("a.ics", MINIMAL, &options),
        FileReport::lint("b.ics", BROKEN, &options),
    ];
    let json: serde_json::Value = serde_json::from_str(&render(&reports, OutputFormat::Json)?)?;

    assert_eq!(json.as_array().map(Vec::len), Some(2));
    assert_eq!(json[0]["source"], "a.ics");
    assert_eq!(json[0]["valid"], true);
    assert_eq!(json[1]["errors"].as_array().map(Vec::len), Some(3));
    Ok(())
}
