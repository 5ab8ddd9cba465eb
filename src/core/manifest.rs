//! Project.toml parsing.
//!
//! ```toml
//! [project]
//! name = "app"
//! output = "bin"
//!
//! [[classpath]]
//! kind = "src"
//! path = "src"
//!
//! [[classpath]]
//! kind = "project"
//! name = "core"
//! exported = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::entry::RawClasspathEntry;
use crate::core::project::{Project, DEFAULT_OUTPUT};

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "Project.toml";

/// The parsed Project.toml manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub project: ProjectMetadata,

    #[serde(default)]
    pub classpath: Vec<RawClasspathEntry>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name; defaults to the directory name when omitted
    #[serde(default)]
    pub name: Option<String>,

    /// Project-wide output folder
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl ProjectManifest {
    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Parse manifest contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let manifest: ProjectManifest = toml::from_str(contents)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.project.name {
            if name.trim().is_empty() {
                bail!("project name must not be empty");
            }
        }
        for entry in &self.classpath {
            match entry {
                RawClasspathEntry::Project { name, .. } if name.trim().is_empty() => {
                    bail!("project reference with an empty name")
                }
                RawClasspathEntry::Container { path, .. } if path.as_str().is_empty() => {
                    bail!("container entry with an empty path")
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Turn the manifest into a project located at `location`.
    pub fn into_project(self, location: &Path) -> Project {
        let name = self.project.name.unwrap_or_else(|| {
            location
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Project::new(name, location)
            .with_default_output(self.project.output)
            .with_entries(self.classpath)
    }
}
