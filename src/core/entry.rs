//! Raw classpath entries as declared by a project.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::container_path::ContainerPath;

/// One declared dependency line of a project.
///
/// In `Project.toml` these appear as `[[classpath]]` tables tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawClasspathEntry {
    /// A source folder with an optional dedicated output folder.
    #[serde(rename = "src")]
    Source {
        path: PathBuf,
        #[serde(default)]
        output: Option<PathBuf>,
    },

    /// A library file (jar or class folder).
    #[serde(rename = "lib")]
    Library {
        path: PathBuf,
        #[serde(default, rename = "source")]
        source_attachment: Option<PathBuf>,
        #[serde(default)]
        exported: bool,
    },

    /// A reference to another project in the workspace.
    #[serde(rename = "project")]
    Project {
        name: String,
        #[serde(default)]
        exported: bool,
    },

    /// A symbolic container resolved by a pluggable resolver.
    #[serde(rename = "con")]
    Container {
        path: ContainerPath,
        #[serde(default)]
        exported: bool,
    },
}

impl RawClasspathEntry {
    /// Source folder without a dedicated output folder.
    pub fn source(path: impl Into<PathBuf>) -> Self {
        RawClasspathEntry::Source {
            path: path.into(),
            output: None,
        }
    }

    /// Source folder compiled into `output`.
    pub fn source_with_output(path: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        RawClasspathEntry::Source {
            path: path.into(),
            output: Some(output.into()),
        }
    }

    /// Non-exported library without source attachment.
    pub fn library(path: impl Into<PathBuf>) -> Self {
        RawClasspathEntry::Library {
            path: path.into(),
            source_attachment: None,
            exported: false,
        }
    }

    pub fn project(name: impl Into<String>, exported: bool) -> Self {
        RawClasspathEntry::Project {
            name: name.into(),
            exported,
        }
    }

    pub fn container(path: impl Into<ContainerPath>, exported: bool) -> Self {
        RawClasspathEntry::Container {
            path: path.into(),
            exported,
        }
    }

    /// Mark a library, project or container entry as exported.
    ///
    /// Source folders are always visible to dependents and are returned as-is.
    pub fn exported(mut self) -> Self {
        match &mut self {
            RawClasspathEntry::Library { exported, .. }
            | RawClasspathEntry::Project { exported, .. }
            | RawClasspathEntry::Container { exported, .. } => *exported = true,
            RawClasspathEntry::Source { .. } => {}
        }
        self
    }

    /// Attach a source archive to a library entry.
    pub fn with_source_attachment(mut self, attachment: impl Into<PathBuf>) -> Self {
        if let RawClasspathEntry::Library {
            source_attachment, ..
        } = &mut self
        {
            *source_attachment = Some(attachment.into());
        }
        self
    }

    /// Whether dependents of the declaring project see this entry.
    pub fn is_exported(&self) -> bool {
        match self {
            RawClasspathEntry::Source { .. } => true,
            RawClasspathEntry::Library { exported, .. }
            | RawClasspathEntry::Project { exported, .. }
            | RawClasspathEntry::Container { exported, .. } => *exported,
        }
    }

    /// Short kind tag, as written in `Project.toml`.
    pub fn kind(&self) -> &'static str {
        match self {
            RawClasspathEntry::Source { .. } => "src",
            RawClasspathEntry::Library { .. } => "lib",
            RawClasspathEntry::Project { .. } => "project",
            RawClasspathEntry::Container { .. } => "con",
        }
    }

    /// The output folder of a source entry, if one is declared.
    pub fn output(&self) -> Option<&Path> {
        match self {
            RawClasspathEntry::Source { output, .. } => output.as_deref(),
            _ => None,
        }
    }
}
