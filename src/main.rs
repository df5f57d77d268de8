//! confcheck - lint editor launch configurations and project rules
//!
//! Validates a VS Code `launch.json` (JSON with `//` comments) and a project
//! rules document (Markdown with YAML-style front matter), reporting each
//! check as passed or failed.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod jsonc;
mod launch;
mod report;
mod rules;
mod schema;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "confcheck=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let context = || Context::load(cli.root.clone(), cli.config.as_deref(), cli.format);

    match cli.command {
        Commands::Launch(args) => commands::launch::run(&context()?, args),
        Commands::Rules(args) => commands::rules::run(&context()?, args),
        Commands::Check => commands::check::run(&context()?),
        Commands::Strip(args) => commands::inspect::strip(args),
        Commands::FrontMatter(args) => commands::inspect::front_matter(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
