//! Test utilities for jdtpath unit tests.
//!
//! Most resolver tests work on an in-memory [`Workspace`] built with
//! [`workspace_with`]. Tests that touch the filesystem (runtime layouts,
//! library existence, manifest discovery) write fixtures into a temporary
//! directory using the types in [`fixtures`].
//!
//! # Example
//!
//! ```rust,ignore
//! use jdtpath::test_support::{workspace_with, JdkFixture};
//!
//! #[test]
//! fn test_example() {
//!     let tmp = tempfile::TempDir::new().unwrap();
//!     let jdk = JdkFixture::legacy("jdk8").write_to(tmp.path()).unwrap();
//!     let ws = workspace_with(tmp.path(), vec![Project::new("app", tmp.path().join("app"))]);
//!     // Register the runtime and resolve...
//! }
//! ```

pub mod fixtures;

use std::path::Path;

use crate::core::{Project, RawClasspathEntry, Workspace};
use crate::runtime::{RuntimeRegistry, RuntimeSpec};

// Re-export fixtures for convenience
pub use fixtures::*;

/// Build an in-memory workspace rooted at `root`.
///
/// Panics on duplicate project names; fixtures are expected to be valid.
pub fn workspace_with(root: &Path, projects: Vec<Project>) -> Workspace {
    let mut workspace = Workspace::new(root);
    for project in projects {
        workspace
            .add_project(project)
            .expect("fixture projects must have unique names");
    }
    workspace
}

/// A project at `<root>/<name>` with a `src` folder and the given entries.
pub fn source_project(
    root: &Path,
    name: &str,
    entries: impl IntoIterator<Item = RawClasspathEntry>,
) -> Project {
    Project::new(name, root.join(name))
        .with_entry(RawClasspathEntry::source("src"))
        .with_entries(entries)
}

/// A runtime registry holding one default runtime with explicit files.
///
/// The runtime location must exist, so a temporary directory is expected.
pub fn registry_with_default(location: &Path, id: &str, files: &[&str]) -> RuntimeRegistry {
    let mut registry = RuntimeRegistry::new();
    registry
        .register(
            RuntimeSpec::new(id, location)
                .with_files(files.iter().map(|f| location.join(f)).collect()),
        )
        .expect("fixture runtime must register");
    registry
        .set_default(id)
        .expect("fixture runtime must exist");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_workspace_with() {
        let root = Path::new("/ws");
        let ws = workspace_with(
            root,
            vec![
                source_project(root, "app", [RawClasspathEntry::project("lib", false)]),
                source_project(root, "lib", []),
            ],
        );
        assert_eq!(ws.len(), 2);
        assert_eq!(
            ws.find_project("app").unwrap().referenced_projects().collect::<Vec<_>>(),
            vec!["lib"]
        );
    }

    #[test]
    fn test_registry_with_default() {
        let tmp = TempDir::new().unwrap();
        let registry = registry_with_default(tmp.path(), "jdk", &["rt.jar"]);
        assert_eq!(registry.default_id(), Some("jdk"));
        assert_eq!(
            registry.default_runtime().unwrap().libraries(),
            vec![tmp.path().join("rt.jar")]
        );
    }
}
