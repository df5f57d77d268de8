//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - launch: launch.json check arguments
//! - rules: rules document check arguments
//! - inspect: strip / front-matter arguments
//! - completions: completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

pub mod completions;
pub mod inspect;
pub mod launch;
pub mod rules;

pub use completions::CompletionsArgs;
pub use inspect::{FrontMatterArgs, StripArgs};
pub use launch::LaunchArgs;
pub use rules::RulesArgs;

/// confcheck - lint editor launch configurations and project rules
#[derive(Parser, Debug)]
#[command(
    name = "confcheck",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Lint VS Code launch configurations and project rules documents",
    long_about = "confcheck validates .vscode/launch.json (JSON with // comments) and the \
                  project rules document (Markdown with YAML front matter) against the \
                  expectations in confcheck.yaml, or the built-in defaults.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  confcheck check                     \x1b[90m# Run every check\x1b[0m\n   \
                  confcheck launch                    \x1b[90m# Check launch.json only\x1b[0m\n   \
                  confcheck rules --format json       \x1b[90m# Machine-readable rules report\x1b[0m\n   \
                  confcheck strip .vscode/launch.json \x1b[90m# Print launch.json without comments\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "CONFCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/confcheck.yaml when present)
    #[arg(long, short = 'c', global = true, env = "CONFCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check launch.json
    Launch(LaunchArgs),

    /// Check the project rules document
    Rules(RulesArgs),

    /// Run every check
    Check,

    /// Print a JSON-with-comments file with comments removed
    Strip(StripArgs),

    /// Print the parsed front matter of a Markdown file as JSON
    FrontMatter(FrontMatterArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
