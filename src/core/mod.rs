//! Core data structures for jdtpath.
//!
//! This module contains the workspace model that resolution works on:
//! - Container paths and container arguments
//! - Raw classpath entries
//! - Projects and their `Project.toml` manifests
//! - Workspace discovery

pub mod arguments;
pub mod container_path;
pub mod entry;
pub mod manifest;
pub mod project;
pub mod workspace;

pub use arguments::ContainerArguments;
pub use container_path::ContainerPath;
pub use entry::RawClasspathEntry;
pub use manifest::{ProjectManifest, MANIFEST_NAME};
pub use project::Project;
pub use workspace::Workspace;
