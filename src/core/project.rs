//! A workspace project: its location and raw classpath declaration.

use std::path::{Path, PathBuf};

use crate::core::entry::RawClasspathEntry;
use crate::util::fs::{absolutize, normalize_lexically};

/// Default output folder when a project does not declare one.
pub const DEFAULT_OUTPUT: &str = "bin";

/// A project as seen by the classpath engine.
///
/// Read-only once constructed; the resolver never mutates projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    location: PathBuf,
    default_output: PathBuf,
    entries: Vec<RawClasspathEntry>,
}

impl Project {
    /// Create a project located at `location` with no classpath entries.
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Project {
            name: name.into(),
            location: location.into(),
            default_output: PathBuf::from(DEFAULT_OUTPUT),
            entries: Vec::new(),
        }
    }

    /// Set the project-wide output folder (relative to the project location).
    pub fn with_default_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.default_output = output.into();
        self
    }

    /// Append a raw classpath entry.
    pub fn with_entry(mut self, entry: RawClasspathEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = RawClasspathEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute directory of the project.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn default_output(&self) -> &Path {
        &self.default_output
    }

    /// Declared entries, in declaration order.
    pub fn raw_classpath_entries(&self) -> &[RawClasspathEntry] {
        &self.entries
    }

    /// All output folders: the default one followed by distinct per-source outputs.
    pub fn output_folders(&self) -> Vec<PathBuf> {
        let mut folders = vec![self.default_output.clone()];
        for output in self.entries.iter().filter_map(RawClasspathEntry::output) {
            if !folders.iter().any(|f| f == output) {
                folders.push(output.to_path_buf());
            }
        }
        folders
    }

    /// Names of directly referenced projects, in declaration order.
    pub fn referenced_projects(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            RawClasspathEntry::Project { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Resolve a project-relative path against the project location.
    ///
    /// The result is lexically normalized, so `../shared/x.jar` and the
    /// equivalent absolute path compare equal.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        normalize_lexically(&absolutize(&self.location, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_folders_are_distinct() {
        let project = Project::new("app", "/ws/app")
            .with_entry(RawClasspathEntry::source_with_output("src", "bin"))
            .with_entry(RawClasspathEntry::source_with_output("test", "test-bin"))
            .with_entry(RawClasspathEntry::source("res"));

        assert_eq!(
            project.output_folders(),
            vec![PathBuf::from("bin"), PathBuf::from("test-bin")]
        );
    }

    #[test]
    fn test_referenced_projects() {
        let project = Project::new("app", "/ws/app")
            .with_entry(RawClasspathEntry::project("core", true))
            .with_entry(RawClasspathEntry::library("a.jar"))
            .with_entry(RawClasspathEntry::project("util", false));

        let refs: Vec<_> = project.referenced_projects().collect();
        assert_eq!(refs, vec!["core", "util"]);
    }

    #[test]
    fn test_resolve_path() {
        let project = Project::new("app", "/ws/app");
        assert_eq!(
            project.resolve_path(Path::new("lib/a.jar")),
            PathBuf::from("/ws/app/lib/a.jar")
        );
        assert_eq!(
            project.resolve_path(Path::new("/opt/x.jar")),
            PathBuf::from("/opt/x.jar")
        );
        assert_eq!(
            project.resolve_path(Path::new("../shared/./x.jar")),
            PathBuf::from("/ws/shared/x.jar")
        );
    }
}
