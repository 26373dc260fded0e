//! Configuration from environment variables (a `.env` file is loaded first by the binary).

use std::env;
use std::time::Duration;

pub const WRAP_WIDTH_VAR: &str = "CONCIERGE_WRAP_WIDTH";
pub const POLL_INTERVAL_VAR: &str = "CONCIERGE_POLL_INTERVAL_MS";
pub const FOLLOW_VAR: &str = "CONCIERGE_FOLLOW";

pub const DEFAULT_WRAP_WIDTH: usize = 80;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Plain-output wrap width; 0 disables wrapping.
    pub wrap_width: usize,
    /// How often the viewer checks a watched file.
    pub poll_interval: Duration,
    /// Whether the viewer starts pinned to the bottom of the message.
    pub follow: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            follow: true,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|name| env::var(name).ok())
}

/// Load configuration through `lookup`. Unset or empty variables keep their defaults.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let mut config = Config::default();

    if let Some(value) = get(WRAP_WIDTH_VAR) {
        config.wrap_width = value.parse().map_err(|_| ConfigError::InvalidValue {
            var: WRAP_WIDTH_VAR,
            value,
        })?;
    }
    if let Some(value) = get(POLL_INTERVAL_VAR) {
        let ms: u64 = value
            .parse()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or(ConfigError::InvalidValue {
                var: POLL_INTERVAL_VAR,
                value,
            })?;
        config.poll_interval = Duration::from_millis(ms);
    }
    if let Some(value) = get(FOLLOW_VAR) {
        config.follow = parse_bool(&value).ok_or(ConfigError::InvalidValue {
            var: FOLLOW_VAR,
            value,
        })?;
    }
    Ok(config)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Where a variable's effective value comes from, for the `config` command.
pub fn source_of(var: &str) -> &'static str {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => "env",
        _ => "default",
    }
}
