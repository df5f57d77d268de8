//! Command implementations for confcheck CLI

pub mod check;
pub mod completions;
pub mod inspect;
pub mod launch;
pub mod rules;
pub mod version;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::report::OutputFormat;

/// Options shared by the checking commands
#[derive(Debug)]
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the project root and load its configuration
    pub fn load(root: Option<PathBuf>, config: Option<&Path>, format: OutputFormat) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };
        tracing::debug!("project root: {}", root.display());
        let config = Config::load(&root, config)?;
        Ok(Self {
            root,
            config,
            format,
        })
    }
}
