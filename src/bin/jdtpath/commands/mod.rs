//! Command implementations

pub mod classpath;
pub mod projects;
pub mod runtimes;

use std::path::PathBuf;

use anyhow::{Context, Result};

use jdtpath::ops::{open_workspace, OpenWorkspace};

/// Options shared by every command.
pub struct GlobalArgs {
    pub workspace: Option<PathBuf>,
    pub use_global_config: bool,
    pub verbose: bool,
}

impl GlobalArgs {
    /// Discover the workspace and configure a session for it.
    pub fn open(&self) -> Result<OpenWorkspace> {
        let root = match &self.workspace {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("failed to get current directory")?,
        };
        open_workspace(&root, self.use_global_config)
    }
}
