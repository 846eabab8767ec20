//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use taskdeck::config::GlobalConfig;
use taskdeck::output::OutputMode;

/// taskdeck - an interactive task list for your terminal
#[derive(Parser, Debug)]
#[command(
    name = "taskdeck",
    version,
    about = "An interactive task-list manager for your terminal session",
    long_about = "Track short text tasks for the lifetime of a session.\n\n\
                  Start a session, then add, toggle, delete, and clear tasks\n\
                  at the prompt. Nothing is written to disk."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive session (the default when no subcommand is given)
    Session,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    if output_mode == OutputMode::Json || !config.ui.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("taskdeck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        Some(Command::Session) | None => commands::session(&config, output_mode),
    }
}
