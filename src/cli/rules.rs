use clap::Parser;
use std::path::PathBuf;

/// Arguments for the rules command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the project's rules document:\n    confcheck rules\n\n\
                  Check a specific file:\n    confcheck rules --file docs/project-rules.md\n\n\
                  Point discovery at a file via the environment:\n    RULES_FILE=handbook/rules.md confcheck rules")]
pub struct RulesArgs {
    /// Rules document to check, relative to the project root (skips discovery, including RULES_FILE)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}
