//! Workspace - the set of projects classpaths are resolved against.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use walkdir::WalkDir;

use crate::core::manifest::{ProjectManifest, MANIFEST_NAME};
use crate::core::project::Project;
use crate::resolver::errors::{ClasspathError, NotFoundKind};

/// A workspace: a root directory and the projects it contains.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    projects: BTreeMap<String, Project>,
}

impl Workspace {
    /// Create an empty workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace {
            root: root.into(),
            projects: BTreeMap::new(),
        }
    }

    /// Discover projects under `root`.
    ///
    /// Looks for `Project.toml` in the root itself and in each direct
    /// subdirectory. Hidden directories are skipped.
    pub fn discover(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("workspace root does not exist: {}", root.display()))?;
        let mut ws = Workspace::new(&root);

        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = entry.with_context(|| format!("failed to scan {}", root.display()))?;
            if !entry.file_type().is_file() || entry.file_name() != MANIFEST_NAME {
                continue;
            }

            let manifest_path = entry.path();
            let location = manifest_path.parent().unwrap_or(&root);
            let project = ProjectManifest::load(manifest_path)?.into_project(location);
            tracing::debug!("found project `{}` at {}", project.name(), location.display());
            ws.add_project(project)
                .with_context(|| format!("in {}", manifest_path.display()))?;
        }

        Ok(ws)
    }

    /// Add a project; names must be unique.
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        if project.name().is_empty() {
            bail!("project at {} has no name", project.location().display());
        }
        if let Some(existing) = self.projects.get(project.name()) {
            bail!(
                "duplicate project `{}` at {} (already defined at {})",
                project.name(),
                project.location().display(),
                existing.location().display()
            );
        }
        self.projects.insert(project.name().to_string(), project);
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a project by name.
    pub fn find_project(&self, name: &str) -> Result<&Project, ClasspathError> {
        self.projects
            .get(name)
            .ok_or_else(|| ClasspathError::not_found(NotFoundKind::Project, name))
    }

    /// All projects, sorted by name.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, contents: &str) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join(MANIFEST_NAME), contents).unwrap();
    }

    #[test]
    fn test_discover_projects() {
        let tmp = TempDir::new().unwrap();
        write_manifest(&tmp.path().join("app"), "[project]\nname = \"app\"\n");
        write_manifest(&tmp.path().join("core"), "[project]\n");
        write_manifest(&tmp.path().join(".hidden"), "[project]\nname = \"hidden\"\n");

        let ws = Workspace::discover(tmp.path()).unwrap();
        let names: Vec<_> = ws.projects().map(|p| p.name()).collect();
        assert_eq!(names, vec!["app", "core"]);
        assert!(ws.find_project("core").unwrap().location().ends_with("core"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let tmp = TempDir::new().unwrap();
        write_manifest(&tmp.path().join("a"), "[project]\nname = \"same\"\n");
        write_manifest(&tmp.path().join("b"), "[project]\nname = \"same\"\n");

        let err = Workspace::discover(tmp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate project `same`"));
    }

    #[test]
    fn test_find_missing_project() {
        let ws = Workspace::new("/ws");
        let err = ws.find_project("nope").unwrap_err();
        assert!(matches!(
            err,
            ClasspathError::NotFound {
                kind: NotFoundKind::Project,
                ..
            }
        ));
    }
}
