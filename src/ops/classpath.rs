//! Resolving and printing a project classpath.

use std::str::FromStr;

use anyhow::{bail, Result};

use crate::core::ContainerArguments;
use crate::ops::session::{resolve_options, OpenWorkspace};
use crate::resolver::ResolvedClasspath;

/// Platform path list separator.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// How a resolved classpath is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Lines,
    /// A single separator-joined path list
    Path,
    /// The whole result as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lines" => Ok(OutputFormat::Lines),
            "path" => Ok(OutputFormat::Path),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format `{}` (expected lines, path or json)", other),
        }
    }
}

/// A classpath request; flags add to the configured `[resolve]` defaults and
/// arguments override configured `[arguments]`.
#[derive(Debug, Clone, Default)]
pub struct ClasspathRequest {
    pub project: String,
    pub runtime: bool,
    pub workspace_relative: bool,
    pub strict: bool,
    pub arguments: ContainerArguments,
}

impl ClasspathRequest {
    pub fn new(project: impl Into<String>) -> Self {
        ClasspathRequest {
            project: project.into(),
            ..Default::default()
        }
    }
}

/// Resolve the classpath of the requested project.
pub fn resolve_classpath(open: &OpenWorkspace, request: &ClasspathRequest) -> Result<ResolvedClasspath> {
    let defaults = resolve_options(&open.config);

    let mut arguments = request.arguments.clone();
    arguments.merge_defaults(&defaults.arguments);

    let options = defaults
        .runtime(open.config.resolve.runtime || request.runtime)
        .workspace_relative(open.config.resolve.workspace_relative || request.workspace_relative)
        .strict(open.config.resolve.strict || request.strict)
        .arguments(arguments);

    let resolved = open
        .session
        .resolve_project_classpath(&open.workspace, &request.project, &options)?;
    Ok(resolved)
}

/// Render `resolved` in `format`. `boot` selects the boot classpath for the
/// line and path formats; JSON always carries both.
pub fn format_classpath(resolved: &ResolvedClasspath, format: OutputFormat, boot: bool) -> Result<String> {
    let entries = if boot {
        resolved.boot_classpath()
    } else {
        resolved.classpath()
    };

    let output = match format {
        OutputFormat::Lines => {
            let mut out = String::new();
            for entry in entries {
                out.push_str(&entry.path.display().to_string());
                out.push('\n');
            }
            out
        }
        OutputFormat::Path => {
            let joined = if boot {
                resolved.to_boot_path_string(PATH_SEPARATOR)
            } else {
                resolved.to_path_string(PATH_SEPARATOR)
            };
            format!("{}\n", joined)
        }
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(resolved)?),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::session::open_workspace;
    use crate::resolver::ClasspathError;
    use crate::test_support::{manifests, JdkFixture, ProjectFixture};
    use std::path::Path;
    use tempfile::TempDir;

    fn app_lib_workspace(root: &Path) {
        JdkFixture::legacy("jdk8").write_to(&root.join("jvm")).unwrap();
        std::fs::create_dir_all(root.join(".jdtpath")).unwrap();
        std::fs::write(
            root.join(".jdtpath/config.toml"),
            r#"
[[runtime]]
id = "jdk8"
location = "jvm/jdk8"
files = ["jre/lib/rt.jar"]
default = true
"#,
        )
        .unwrap();

        ProjectFixture::new("app")
            .with_manifest(manifests::with_references("app", &[("lib", false)]))
            .write_to(root)
            .unwrap();
        ProjectFixture::new("lib").write_to(root).unwrap();
    }

    #[test]
    fn test_resolve_app_lib() {
        let tmp = TempDir::new().unwrap();
        app_lib_workspace(tmp.path());

        let open = open_workspace(tmp.path(), false).unwrap();
        let mut request = ClasspathRequest::new("app");
        request.workspace_relative = true;
        let resolved = resolve_classpath(&open, &request).unwrap();

        assert_eq!(
            resolved.classpath_files(),
            vec![Path::new("app/bin"), Path::new("lib/bin")]
        );
        assert_eq!(resolved.boot_classpath_files(), vec![Path::new("jvm/jdk8/jre/lib/rt.jar")]);
        assert_eq!(resolved.referenced_projects(), ["lib".to_string()]);

        let lines = format_classpath(&resolved, OutputFormat::Lines, false).unwrap();
        assert_eq!(lines, "app/bin\nlib/bin\n");

        let path = format_classpath(&resolved, OutputFormat::Path, true).unwrap();
        assert_eq!(path, "jvm/jdk8/jre/lib/rt.jar\n");
    }

    #[test]
    fn test_unknown_project_keeps_classpath_error() {
        let tmp = TempDir::new().unwrap();
        app_lib_workspace(tmp.path());

        let open = open_workspace(tmp.path(), false).unwrap();
        let err = resolve_classpath(&open, &ClasspathRequest::new("ghost")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClasspathError>(),
            Some(ClasspathError::NotFound { .. })
        ));
    }

    #[test]
    fn test_json_output() {
        let tmp = TempDir::new().unwrap();
        app_lib_workspace(tmp.path());

        let open = open_workspace(tmp.path(), false).unwrap();
        let resolved = resolve_classpath(&open, &ClasspathRequest::new("lib")).unwrap();
        let json = format_classpath(&resolved, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["classpath"].as_array().unwrap().len(), 1);
        assert!(value["boot_classpath"].as_array().unwrap().is_empty());
        assert!(value["referenced_projects"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("path".parse::<OutputFormat>().unwrap(), OutputFormat::Path);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
