//! Test fixtures for common test scenarios.
//!
//! This module provides fixture generators that lay out projects and Java
//! homes on disk the way jdtpath expects to find them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::MANIFEST_NAME;

/// Fixture for a project directory with a `Project.toml`.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// Project directory name.
    pub name: String,
    /// Project.toml content.
    pub manifest: String,
    /// Extra files (path relative to project root -> content).
    pub files: BTreeMap<PathBuf, String>,
}

impl ProjectFixture {
    /// Create a project with a `src` folder and no other entries.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let manifest = manifests::simple(&name);
        ProjectFixture {
            name,
            manifest,
            files: BTreeMap::new(),
        }
    }

    /// Replace the manifest content.
    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Add a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Write the project below `base_path`, returning the project directory.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<PathBuf> {
        let project_dir = base_path.join(&self.name);
        std::fs::create_dir_all(project_dir.join("src"))?;
        std::fs::write(project_dir.join(MANIFEST_NAME), &self.manifest)?;

        for (path, content) in &self.files {
            let full_path = project_dir.join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(full_path, content)?;
        }

        Ok(project_dir)
    }
}

/// Fixture for a Java home directory.
#[derive(Debug, Clone)]
pub struct JdkFixture {
    /// Directory name (also the discovered runtime id).
    pub name: String,
    /// Archive files relative to the home (`jre/lib/rt.jar`, `jmods/java.base.jmod`).
    pub archives: Vec<PathBuf>,
}

impl JdkFixture {
    /// A pre-module JDK: core jars under `jre/lib`, one extension jar.
    pub fn legacy(name: impl Into<String>) -> Self {
        JdkFixture {
            name: name.into(),
            archives: vec![
                "bin/java".into(),
                "jre/lib/rt.jar".into(),
                "jre/lib/jce.jar".into(),
                "jre/lib/ext/zipfs.jar".into(),
            ],
        }
    }

    /// A modular JDK: `jmods/*.jmod`.
    pub fn modular(name: impl Into<String>) -> Self {
        JdkFixture {
            name: name.into(),
            archives: vec![
                "bin/java".into(),
                "jmods/java.base.jmod".into(),
                "jmods/java.sql.jmod".into(),
            ],
        }
    }

    /// Write the Java home below `base_path`, returning its directory.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<PathBuf> {
        let home = base_path.join(&self.name);
        for archive in &self.archives {
            let full_path = home.join(archive);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(full_path, "")?;
        }
        Ok(home)
    }
}

/// Pre-built Project.toml contents.
pub mod manifests {
    /// A project with a single source folder.
    pub fn simple(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"

[[classpath]]
kind = "src"
path = "src"
"#
        )
    }

    /// A project with a source folder, the default JRE and references.
    pub fn with_references(name: &str, references: &[(&str, bool)]) -> String {
        let mut manifest = format!(
            r#"[project]
name = "{name}"

[[classpath]]
kind = "src"
path = "src"

[[classpath]]
kind = "con"
path = "org.eclipse.jdt.launching.JRE_CONTAINER"
"#
        );

        for (reference, exported) in references {
            manifest.push_str(&format!(
                r#"
[[classpath]]
kind = "project"
name = "{reference}"
exported = {exported}
"#
            ));
        }

        manifest
    }
}
