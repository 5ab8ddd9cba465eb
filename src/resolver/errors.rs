//! Classpath resolution error types and diagnostics.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// What kind of entity a [`ClasspathError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Project,
    Runtime,
    DefaultRuntime,
    UserLibrary,
    TargetPlatform,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundKind::Project => write!(f, "project"),
            NotFoundKind::Runtime => write!(f, "runtime"),
            NotFoundKind::DefaultRuntime => write!(f, "default runtime"),
            NotFoundKind::UserLibrary => write!(f, "user library"),
            NotFoundKind::TargetPlatform => write!(f, "target platform"),
        }
    }
}

/// Error during classpath resolution or registry configuration.
///
/// Every variant is fatal to the enclosing resolve call.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ClasspathError {
    #[error("invalid configuration: {message}")]
    #[diagnostic(code(jdtpath::configuration))]
    Configuration { message: String },

    #[error("{kind} not found: `{name}`")]
    #[diagnostic(code(jdtpath::not_found))]
    NotFound { kind: NotFoundKind, name: String },

    #[error(
        "cycle detected: project `{project}` references `{reference}` ({})",
        .chain.join(" -> ")
    )]
    #[diagnostic(
        code(jdtpath::cycle),
        help("Break the cycle by removing one of the project references")
    )]
    Cycle {
        project: String,
        reference: String,
        chain: Vec<String>,
    },

    #[error("no resolver for container `{container}`{}", project_suffix(.project))]
    #[diagnostic(
        code(jdtpath::unresolved_container),
        help("Register a container resolver for this prefix")
    )]
    UnresolvedContainer {
        project: Option<String>,
        container: String,
    },

    #[error("library `{}` of project `{project}` does not exist", .path.display())]
    #[diagnostic(code(jdtpath::missing_library))]
    MissingLibrary { project: String, path: PathBuf },
}

impl ClasspathError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ClasspathError::Configuration {
            message: message.into(),
        }
    }

    pub fn not_found(kind: NotFoundKind, name: impl Into<String>) -> Self {
        ClasspathError::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Attach the declaring project to an unresolved-container error that
    /// does not name one yet.
    pub fn in_project(self, name: &str) -> Self {
        match self {
            ClasspathError::UnresolvedContainer {
                project: None,
                container,
            } => ClasspathError::UnresolvedContainer {
                project: Some(name.to_string()),
                container,
            },
            other => other,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ClasspathError::Configuration { message } => {
                Diagnostic::error(format!("invalid configuration: {}", message))
                    .with_suggestion("Check the [[runtime]] entries in .jdtpath/config.toml")
            }

            ClasspathError::NotFound { kind, name } => {
                let diag = Diagnostic::error(format!("could not find {} `{}`", kind, name));
                match kind {
                    NotFoundKind::Project => diag
                        .with_suggestion("Run `jdtpath projects` to list workspace projects"),
                    NotFoundKind::Runtime | NotFoundKind::DefaultRuntime => diag
                        .with_suggestion("Run `jdtpath runtimes` to list registered runtimes")
                        .with_suggestion("Mark one runtime with `default = true`"),
                    NotFoundKind::UserLibrary => diag
                        .with_suggestion("Declare it under [user_libraries] in the config"),
                    NotFoundKind::TargetPlatform => diag.with_suggestion(
                        "Declare it under [target_platforms] or pass --arg target.platform=<name>",
                    ),
                }
            }

            ClasspathError::Cycle {
                project,
                reference,
                chain,
            } => Diagnostic::error("cycle detected in project references")
                .with_context(format!("`{}` references `{}`", project, reference))
                .with_context(format!("cycle: {} -> {}", chain.join(" -> "), reference))
                .with_suggestion("Break the cycle by removing one of the project references"),

            ClasspathError::UnresolvedContainer { project, container } => {
                let mut diag =
                    Diagnostic::error(format!("no resolver for container `{}`", container));
                if let Some(project) = project {
                    diag = diag.with_context(format!("declared by project `{}`", project));
                }
                diag.with_suggestion("Check the container path for typos")
            }

            ClasspathError::MissingLibrary { project, path } => Diagnostic::error(format!(
                "library `{}` does not exist",
                path.display()
            ))
            .with_context(format!("declared by project `{}`", project))
            .with_suggestion("Build the library first or resolve without --strict"),
        }
    }
}

fn project_suffix(project: &Option<String>) -> String {
    project
        .as_ref()
        .map(|p| format!(" (in project `{}`)", p))
        .unwrap_or_default()
}
