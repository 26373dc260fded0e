//! CLI-only commands: format to stdout and config info.
//!
//! These run without opening the TUI and produce plain text output.

use concierge_format::core::config::{self, Config};
use concierge_format::core::format::format_message;
use concierge_format::core::input::{self, InputError, InputSource};
use concierge_format::core::render::render_plain;

/// Output form of the `format` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain { width: usize },
    Json,
}

/// Format the message from `source` and return what to print.
pub fn format_source(
    source: &InputSource,
    from_json: bool,
    output: OutputFormat,
) -> Result<String, InputError> {
    let content = input::load(source, from_json)?;
    let blocks = format_message(&content);
    Ok(match output {
        OutputFormat::Plain { width } => render_plain(&blocks, width),
        OutputFormat::Json => serde_json::to_string_pretty(&blocks)?,
    })
}

/// Run the `config` command: display effective values and their source.
pub fn run_config(config: &Config) {
    println!(
        "Wrap width:    {} ({})",
        config.wrap_width,
        config::source_of(config::WRAP_WIDTH_VAR)
    );
    println!(
        "Poll interval: {} ms ({})",
        config.poll_interval.as_millis(),
        config::source_of(config::POLL_INTERVAL_VAR)
    );
    println!(
        "Follow:        {} ({})",
        config.follow,
        config::source_of(config::FOLLOW_VAR)
    );
}
