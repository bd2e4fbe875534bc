//! iCalendar document parser (RFC 5545).
//!
//! Walks logical lines once, keeping open components on an explicit stack.
//! Structural problems become diagnostics and parsing carries on with
//! whatever component is still open.

use super::lexer::{parse_content_line, split_lines};
use super::options::ParseOptions;
use super::result::ParseResult;
use crate::rfc::ical::core::{CalendarComponent, DiagnosticCode, Diagnostics, Property};
use crate::rfc::validation::{validate_calendar, validate_property_values};

/// Parses an iCalendar document with the default [`ParseOptions`].
///
/// Never fails; check [`ParseResult::is_valid`] and the diagnostics instead.
#[must_use]
pub fn parse_icalendar(input: &str) -> ParseResult {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses an iCalendar document.
///
/// Structural parsing and semantic validation always both run. Value checks
/// run as well when [`ParseOptions::value_checks`] is set.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_with_options(input: &str, options: &ParseOptions) -> ParseResult {
    tracing::debug!("Parsing iCalendar document");

    let lines = split_lines(input);
    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = StructuralParser::new(options);
    for (index, line) in lines.iter().enumerate() {
        parser.feed(index + 1, line);
    }
    let (components, properties, mut diagnostics) = parser.finish(lines.len());

    validate_calendar(&components, &mut diagnostics);

    if options.value_checks {
        diagnostics.extend(validate_property_values(&components, &properties));
    }

    let result = ParseResult::new(diagnostics, components, properties);

    tracing::debug!(
        valid = result.is_valid(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "iCalendar document parsed"
    );

    result
}

/// Line-by-line state: the open-component stack plus everything finished.
///
/// The stack top is the innermost open component. A component is attached to
/// its parent (the next entry down) or to the top-level list when it is
/// closed, so siblings keep source order.
struct StructuralParser<'a> {
    options: &'a ParseOptions,
    stack: Vec<CalendarComponent>,
    components: Vec<CalendarComponent>,
    properties: Vec<Property>,
    diagnostics: Diagnostics,
}

impl<'a> StructuralParser<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            components: Vec::new(),
            properties: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Classifies one trimmed, non-empty logical line.
    fn feed(&mut self, line_num: usize, line: &str) {
        if let Some(name) = line.strip_prefix("BEGIN:") {
            self.begin(name.trim(), line_num);
        } else if let Some(name) = line.strip_prefix("END:") {
            self.end(name.trim(), line_num);
        } else if line.contains(':') {
            let property = parse_content_line(line, line_num);
            match self.stack.last_mut() {
                Some(open) => open.properties.push(property),
                None => self.properties.push(property),
            }
        } else {
            self.diagnostics.error(
                DiagnosticCode::InvalidLine,
                line_num,
                format!("Invalid line format: \"{line}\""),
            );
        }
    }

    fn begin(&mut self, name: &str, line_num: usize) {
        let Some(kind) = self.options.component_kind(name) else {
            tracing::trace!(line = line_num, name, "Unknown component");
            self.diagnostics.error(
                DiagnosticCode::UnknownComponent,
                line_num,
                format!("Unknown component type: {name}"),
            );
            return;
        };

        tracing::trace!(line = line_num, %kind, depth = self.stack.len(), "Open component");
        self.stack.push(CalendarComponent::new(kind, line_num));
    }

    fn end(&mut self, name: &str, line_num: usize) {
        let Some(open) = self.stack.last_mut() else {
            self.diagnostics.error(
                DiagnosticCode::UnmatchedEnd,
                line_num,
                format!("END without matching BEGIN: {name}"),
            );
            return;
        };

        if open.name() != name {
            // The open component stays open; a later END may still close it.
            self.diagnostics.error(
                DiagnosticCode::MismatchedEnd,
                line_num,
                format!("Mismatched END:{name} for BEGIN:{}", open.kind),
            );
            return;
        }

        open.end_line = Some(line_num);
        self.close_innermost();
    }

    fn close_innermost(&mut self) {
        if let Some(component) = self.stack.pop() {
            self.attach(component);
        }
    }

    fn attach(&mut self, component: CalendarComponent) {
        match self.stack.last_mut() {
            Some(parent) => parent.sub_components.push(component),
            None => self.components.push(component),
        }
    }

    /// Reports the innermost unclosed component and folds the rest of the
    /// stack into the tree, leaving their `end_line` unset.
    fn finish(
        mut self,
        last_line: usize,
    ) -> (Vec<CalendarComponent>, Vec<Property>, Diagnostics) {
        if let Some(innermost) = self.stack.last() {
            let message = format!("Unclosed component: {}", innermost.kind);
            self.diagnostics
                .error(DiagnosticCode::UnclosedComponent, last_line, message);
        }

        while !self.stack.is_empty() {
            self.close_innermost();
        }

        (self.components, self.properties, self.diagnostics)
    }
}
