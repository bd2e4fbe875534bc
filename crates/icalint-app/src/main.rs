use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use icalint_app::cli::Cli;
use icalint_app::input::Input;
use icalint_app::report::{FileReport, render};
use icalint_core::config::load_config;
use icalint_rfc::rfc::ical::parse::ParseOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Lints every input and reports whether all of them passed.
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let mut settings = load_config().context("failed to load configuration")?;

    if let Ok(filter) = EnvFilter::try_new(settings.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %settings.logging.level, "Invalid log level in config, keeping info");
    }

    cli.apply(&mut settings);
    let options = ParseOptions::from(settings.parser);

    let mut reports = Vec::new();
    for input in Input::from_args(&cli.files) {
        let text = input.read()?;
        reports.push(FileReport::lint(input.to_string(), &text, &options));
    }

    let rendered = render(&reports, settings.output.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write report")?;
    if !rendered.ends_with('\n') {
        writeln!(stdout).context("failed to write report")?;
    }

    let passed = reports
        .iter()
        .all(|report| report.passes(settings.output.deny_warnings));
    tracing::info!(files = reports.len(), passed, "Lint finished");

    Ok(passed)
}
