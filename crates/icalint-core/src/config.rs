use std::str::FromStr;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Parser behaviour switches, see `icalint_rfc::rfc::ical::parse::ParseOptions`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParserConfig {
    /// Run the DATE-TIME / DURATION / RRULE value checks as part of every parse.
    pub value_checks: bool,
    /// Only recognise the seven top-level component names; STANDARD and
    /// DAYLIGHT are then reported as unknown.
    pub strict_components: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CoreError::InvalidInput(format!(
                "unknown output format `{other}` (expected `text` or `json`)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Treat warnings as failures when computing the exit status.
    pub deny_warnings: bool,
}

impl Settings {
    /// ## Summary
    /// Defaults shared by every load path.
    fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("parser.value_checks", false)?
            .set_default("parser.strict_components", false)?
            .set_default("output.format", "text")?
            .set_default("output.deny_warnings", false)?)
    }

    /// `ICALINT_` prefix, `__` between section and key.
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `icalint.toml` into a `Settings`.
    ///
    /// Environment variables use the `ICALINT_` prefix and a double underscore
    /// between section and key, e.g. `ICALINT_PARSER__VALUE_CHECKS=true`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            .add_source(Self::environment())
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "Settings loaded");
    Ok(settings)
}
