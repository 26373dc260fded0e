//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  concierge-format reply.txt              Print the formatted message
  concierge-format < reply.txt            Read the message from stdin
  concierge-format --json reply.txt       Print the blocks as JSON
  concierge-format --from-json turn.json  Format the text of a chat payload
  concierge-format --view --watch out.txt Follow a file as the reply streams in
  concierge-format config                 Show the effective configuration
  concierge-format completions bash       Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Format concierge chat responses into paragraphs, headings, and lists",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Message file to format ('-' or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Print the blocks as JSON instead of plain text
    #[arg(long, conflicts_with = "view")]
    pub json: bool,

    /// Treat the input as a chat message JSON payload and format its text
    #[arg(long)]
    pub from_json: bool,

    /// Wrap width for plain output (0 disables wrapping; default from CONCIERGE_WRAP_WIDTH)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Open the interactive viewer
    #[arg(long)]
    pub view: bool,

    /// In the viewer, reload the input file whenever it changes
    #[arg(long, requires = "view")]
    pub watch: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective configuration and where each value comes from
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_from_flags() {
        let args = Args::parse_from(["concierge-format"]);
        assert_eq!(args.log_level(), "warn");
        let args = Args::parse_from(["concierge-format", "-vv"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["concierge-format", "-q", "-v"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn input_and_flags_parse() {
        let args = Args::parse_from(["concierge-format", "--json", "-w", "40", "reply.txt"]);
        assert!(args.json);
        assert_eq!(args.width, Some(40));
        assert_eq!(args.input, Some(PathBuf::from("reply.txt")));
        assert!(args.command.is_none());
    }

    #[test]
    fn watch_requires_view() {
        assert!(Args::try_parse_from(["concierge-format", "--watch", "reply.txt"]).is_err());
        assert!(Args::try_parse_from(["concierge-format", "--view", "--watch", "r.txt"]).is_ok());
    }

    #[test]
    fn config_subcommand() {
        let args = Args::parse_from(["concierge-format", "config"]);
        assert!(matches!(args.command, Some(Commands::Config)));
    }
}
