//! The immutable result of a resolve call.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One concrete classpath entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedClasspathEntry {
    pub path: PathBuf,

    /// Source archive or folder, carried along for tooling only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_attachment: Option<PathBuf>,
}

impl ResolvedClasspathEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ResolvedClasspathEntry {
            path: path.into(),
            source_attachment: None,
        }
    }

    pub fn with_source_attachment(mut self, attachment: Option<PathBuf>) -> Self {
        self.source_attachment = attachment;
        self
    }
}

/// Resolved classpath: ordered main entries plus a separate boot classpath.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedClasspath {
    classpath: Vec<ResolvedClasspathEntry>,
    boot_classpath: Vec<ResolvedClasspathEntry>,
    referenced_projects: Vec<String>,
}

impl ResolvedClasspath {
    pub(crate) fn new(
        classpath: Vec<ResolvedClasspathEntry>,
        boot_classpath: Vec<ResolvedClasspathEntry>,
        referenced_projects: Vec<String>,
    ) -> Self {
        ResolvedClasspath {
            classpath,
            boot_classpath,
            referenced_projects,
        }
    }

    /// Main classpath entries in discovery order.
    pub fn classpath(&self) -> &[ResolvedClasspathEntry] {
        &self.classpath
    }

    pub fn boot_classpath(&self) -> &[ResolvedClasspathEntry] {
        &self.boot_classpath
    }

    pub fn classpath_files(&self) -> Vec<&Path> {
        self.classpath.iter().map(|e| e.path.as_path()).collect()
    }

    pub fn boot_classpath_files(&self) -> Vec<&Path> {
        self.boot_classpath.iter().map(|e| e.path.as_path()).collect()
    }

    /// Projects expanded while resolving, root excluded, in expansion order.
    pub fn referenced_projects(&self) -> &[String] {
        &self.referenced_projects
    }

    pub fn is_empty(&self) -> bool {
        self.classpath.is_empty() && self.boot_classpath.is_empty()
    }

    /// Join the main classpath with `separator` (`:` or `;`).
    pub fn to_path_string(&self, separator: char) -> String {
        join(&self.classpath, separator)
    }

    pub fn to_boot_path_string(&self, separator: char) -> String {
        join(&self.boot_classpath, separator)
    }
}

fn join(entries: &[ResolvedClasspathEntry], separator: char) -> String {
    entries
        .iter()
        .map(|e| e.path.display().to_string())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_string() {
        let resolved = ResolvedClasspath::new(
            vec![
                ResolvedClasspathEntry::new("app/bin"),
                ResolvedClasspathEntry::new("lib/a.jar"),
            ],
            vec![ResolvedClasspathEntry::new("rt.jar")],
            vec![],
        );
        assert_eq!(resolved.to_path_string(':'), "app/bin:lib/a.jar");
        assert_eq!(resolved.to_boot_path_string(';'), "rt.jar");
        assert!(!resolved.is_empty());
        assert!(ResolvedClasspath::default().is_empty());
    }

    #[test]
    fn test_json_skips_missing_attachment() {
        let resolved = ResolvedClasspath::new(vec![ResolvedClasspathEntry::new("a.jar")], vec![], vec![]);
        let json = serde_json::to_string(&resolved).unwrap();
        assert!(json.contains("\"path\":\"a.jar\""));
        assert!(!json.contains("source_attachment"));
    }
}
