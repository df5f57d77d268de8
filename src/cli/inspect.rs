use clap::Parser;
use std::path::PathBuf;

/// Arguments for the strip command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print launch.json without comments:\n    confcheck strip .vscode/launch.json | jq .")]
pub struct StripArgs {
    /// JSON-with-comments file to strip
    pub file: PathBuf,
}

/// Arguments for the front-matter command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the parsed front matter of RULES.md:\n    confcheck front-matter RULES.md")]
pub struct FrontMatterArgs {
    /// Markdown file whose front matter to parse
    pub file: PathBuf,
}
