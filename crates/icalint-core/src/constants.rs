/// Application name, used for the binary, env prefix and config file
pub const APP_NAME: &str = "icalint";

/// Prefix for environment variable overrides (e.g. `ICALINT_LOGGING__LEVEL`)
pub const ENV_PREFIX: &str = const_str::convert_ascii_case!(upper, APP_NAME);

/// Optional TOML config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = const_str::concat!(APP_NAME, ".toml");

