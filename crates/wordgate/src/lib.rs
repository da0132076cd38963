//! Library interface for the `wordgate` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! Without a subcommand, `wordgate` runs the banned-word check described by
//! [`commands::check::CheckArgs`].

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use wordgate_core::ExitCodeScheme;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
EXIT STATUS:
    0    No banned word found
    1    A banned word was found
    2    Usage, I/O, parse or configuration error (1 with --exit-codes flat)

ENVIRONMENT VARIABLES:
    RUST_LOG                    Console log filter (e.g., debug, wordgate=trace)
    WORDGATE_LOG_PATH           Explicit JSONL log file path
    WORDGATE_LOG_DIR            JSONL log directory
    WORDGATE_EXIT_CODES         Exit code scheme (distinct, flat)
    WORDGATE_MAX_INPUT_BYTES    Maximum size of each input file
";

/// Command-line interface definition for wordgate.
#[derive(Parser)]
#[command(name = "wordgate")]
#[command(about = "Fail when a file contains any configured banned word", long_about = None)]
#[command(version, subcommand_negates_reqs = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files for the default banned-word check.
    #[command(flatten)]
    pub check: commands::check::CheckArgs,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Never print log output to the terminal
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print log output to stderr (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Exit code scheme for errors (overrides config)
    #[arg(long, global = true, value_enum, value_name = "SCHEME")]
    pub exit_codes: Option<ExitCodeScheme>,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Show package information and effective configuration
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
