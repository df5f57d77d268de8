use clap::Parser;
use std::path::PathBuf;

/// Arguments for the launch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the project's launch.json:\n    confcheck launch\n\n\
                  Check a specific file:\n    confcheck launch --file .vscode/launch.json")]
pub struct LaunchArgs {
    /// launch.json to check, relative to the project root (skips discovery)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}
