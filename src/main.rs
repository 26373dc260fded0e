//! # concierge-format
//!
//! Entry point for the concierge message formatter CLI and viewer.
//!
//! ## Features
//! - Plain-text or JSON rendering of a chat response (file or stdin)
//! - Interactive viewer that follows a file as the response grows
//! - Configuration from environment variables / `.env`

mod cli;
mod commands;
mod tui;

use std::io;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use concierge_format::core::app;
use concierge_format::core::config;
use concierge_format::core::input::{self, InputError, InputSource};

use cli::{Args, Commands};
use commands::OutputFormat;

/// Print an error the way users expect (Display, not Debug) and exit with status 1.
fn exit_with(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging (warn by default; -v/-q or RUST_LOG to change)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .try_init()
        .ok();

    if let Some(Commands::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, app::NAME, &mut io::stdout());
        return Ok(());
    }

    let config = config::load().unwrap_or_else(|e| exit_with(e));

    if let Some(Commands::Config) = args.command {
        commands::run_config(&config);
        return Ok(());
    }

    let source = InputSource::from_arg(args.input.as_deref());
    log::debug!("{} {} formatting {}", app::NAME, app::VERSION, source.label());

    if args.view {
        if args.watch && source.path().is_none() {
            exit_with(InputError::NotWatchable);
        }
        let content = input::load(&source, args.from_json).unwrap_or_else(|e| exit_with(e));
        tui::run(tui::ViewerOptions {
            source,
            content,
            from_json: args.from_json,
            watch: args.watch,
            config,
        })?;
        return Ok(());
    }

    let output = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain {
            width: args.width.unwrap_or(config.wrap_width),
        }
    };
    let text = commands::format_source(&source, args.from_json, output)
        .unwrap_or_else(|e| exit_with(e));
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}
