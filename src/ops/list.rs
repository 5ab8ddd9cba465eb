//! Listing projects and runtimes.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::Workspace;
use crate::runtime::RuntimeRegistry;
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::fs::relative_path;

/// Summary of one workspace project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,

    /// Location relative to the workspace root
    pub location: PathBuf,

    /// Referenced project names in declaration order
    pub references: Vec<String>,

    /// Output folders of the project
    pub outputs: Vec<PathBuf>,
}

/// Summary of one registered runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    pub id: String,
    pub location: PathBuf,
    pub default: bool,
    pub libraries: Vec<PathBuf>,
}

/// Projects of `workspace`, sorted by name.
pub fn list_projects(workspace: &Workspace) -> Vec<ProjectInfo> {
    workspace
        .projects()
        .map(|project| ProjectInfo {
            name: project.name().to_string(),
            location: relative_path(workspace.root(), project.location()),
            references: project.referenced_projects().map(str::to_string).collect(),
            outputs: project.output_folders(),
        })
        .collect()
}

/// Runtimes of `registry`, in registration order.
pub fn list_runtimes(registry: &RuntimeRegistry) -> Vec<RuntimeInfo> {
    let default = registry.default_id();
    registry
        .runtimes()
        .map(|runtime| RuntimeInfo {
            id: runtime.id().to_string(),
            location: runtime.location().to_path_buf(),
            default: default == Some(runtime.id()),
            libraries: runtime.libraries(),
        })
        .collect()
}

/// Human readable project listing.
pub fn format_projects(projects: &[ProjectInfo], root: &Path) -> String {
    if projects.is_empty() {
        return Diagnostic::warning(format!("no projects found in {}", root.display()))
            .with_suggestion(suggestions::NO_PROJECTS)
            .to_string();
    }

    let mut output = String::new();
    for project in projects {
        output.push_str(&format!("{} ({})\n", project.name, project.location.display()));
        for reference in &project.references {
            output.push_str(&format!("  -> {}\n", reference));
        }
    }
    output
}

/// Human readable runtime listing. `verbose` adds the library list.
pub fn format_runtimes(runtimes: &[RuntimeInfo], verbose: bool) -> String {
    if runtimes.is_empty() {
        return Diagnostic::warning("no runtimes registered")
            .with_suggestion(suggestions::NO_RUNTIMES)
            .to_string();
    }

    let mut output = String::new();
    for runtime in runtimes {
        let marker = if runtime.default { " (default)" } else { "" };
        output.push_str(&format!(
            "{}{}  {}\n",
            runtime.id,
            marker,
            runtime.location.display()
        ));
        if verbose {
            for library in &runtime.libraries {
                output.push_str(&format!("    {}\n", library.display()));
            }
        }
    }
    output
}
