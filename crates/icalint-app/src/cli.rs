//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use icalint_core::config::{OutputFormat, Settings};

/// Lint iCalendar (RFC 5545) documents.
///
/// Reads each FILE (or standard input when none is given, or for `-`) and
/// reports structural and semantic problems. Exits with status 1 when any
/// document is invalid.
#[derive(Debug, Parser)]
#[command(name = "icalint", version, about)]
pub struct Cli {
    /// Files to lint; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format (`text` or `json`)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Also check DATE-TIME, DURATION and RRULE values
    #[arg(long)]
    pub value_checks: bool,

    /// Treat STANDARD and DAYLIGHT as unknown components
    #[arg(long)]
    pub strict_components: bool,

    /// Fail when a document has warnings
    #[arg(long)]
    pub deny_warnings: bool,
}

impl Cli {
    /// Applies flags on top of loaded settings. Flags only ever switch
    /// behaviour on; an absent flag keeps the configured value.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        settings.parser.value_checks |= self.value_checks;
        settings.parser.strict_components |= self.strict_components;
        settings.output.deny_warnings |= self.deny_warnings;
    }
}
