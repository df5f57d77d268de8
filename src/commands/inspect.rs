//! Strip and front-matter commands: show what the checks see

use std::path::Path;

use crate::cli::{FrontMatterArgs, StripArgs};
use crate::error::{Result, fs as fs_error};
use crate::{frontmatter, jsonc};

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))
}

/// Print a JSON-with-comments file with its `//` comments removed
pub fn strip(args: StripArgs) -> Result<()> {
    let raw = read(&args.file)?;
    println!("{}", jsonc::strip_comments(&raw));
    Ok(())
}

/// Print the parsed front matter of a Markdown file as JSON
pub fn front_matter(args: FrontMatterArgs) -> Result<()> {
    let raw = read(&args.file)?;
    let parsed = frontmatter::parse_document(&raw)?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
