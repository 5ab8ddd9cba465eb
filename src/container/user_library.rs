//! User library containers: `org.eclipse.jdt.USER_LIBRARY/<name>`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::container::ContainerResolver;
use crate::core::container_path::USER_LIBRARY_CONTAINER;
use crate::core::ContainerPath;
use crate::resolver::{ClasspathError, NotFoundKind, ResolutionContext, ResolvedClasspathEntry};

/// A named set of library files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLibrary {
    /// Library files; relative paths resolve against the workspace root
    pub files: Vec<PathBuf>,

    /// System libraries belong on the boot classpath.
    pub system: bool,
}

impl UserLibrary {
    pub fn new(files: Vec<PathBuf>) -> Self {
        UserLibrary {
            files,
            system: false,
        }
    }

    pub fn system(mut self, system: bool) -> Self {
        self.system = system;
        self
    }
}

/// Resolves user library containers from a fixed set of definitions.
#[derive(Debug, Clone, Default)]
pub struct UserLibraryContainerResolver {
    libraries: BTreeMap<String, UserLibrary>,
}

impl UserLibraryContainerResolver {
    pub fn new() -> Self {
        UserLibraryContainerResolver::default()
    }

    /// Define (or redefine) a library.
    pub fn with_library(mut self, name: impl Into<String>, library: UserLibrary) -> Self {
        self.libraries.insert(name.into(), library);
        self
    }
}

impl ContainerResolver for UserLibraryContainerResolver {
    fn name(&self) -> &str {
        "user-library"
    }

    fn can_resolve(&self, path: &ContainerPath) -> bool {
        path.starts_with_prefix(USER_LIBRARY_CONTAINER) && path.remainder().is_some()
    }

    fn resolve(
        &self,
        path: &ContainerPath,
        ctx: &mut ResolutionContext<'_>,
    ) -> Result<(), ClasspathError> {
        let name = path.last_segment().unwrap_or_default();
        let library = self
            .libraries
            .get(name)
            .ok_or_else(|| ClasspathError::not_found(NotFoundKind::UserLibrary, name))?;

        let root = ctx.workspace().root();
        for file in &library.files {
            let file = if file.is_absolute() {
                file.clone()
            } else {
                root.join(file)
            };
            let entry = ResolvedClasspathEntry::new(ctx.to_emitted_path(&file));
            if library.system {
                ctx.add_boot_classpath_entry(entry);
            } else {
                ctx.add_classpath_entry(entry);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::{Project, RawClasspathEntry};
    use crate::resolver::{ResolveOptions, Session};
    use crate::test_support::workspace_with;

    fn session() -> Session {
        let mut session = Session::new();
        let libraries = UserLibraryContainerResolver::new()
            .with_library(
                "junit",
                UserLibrary::new(vec!["libs/junit.jar".into(), "libs/hamcrest.jar".into()]),
            )
            .with_library("endorsed", UserLibrary::new(vec!["/opt/xml.jar".into()]).system(true));
        session
            .resolvers_mut()
            .register(USER_LIBRARY_CONTAINER, libraries, 0)
            .unwrap();
        session
    }

    #[test]
    fn test_user_library_entries() {
        let ws = workspace_with(
            Path::new("/ws"),
            vec![Project::new("app", "/ws/app")
                .with_entry(RawClasspathEntry::container(
                    "org.eclipse.jdt.USER_LIBRARY/junit",
                    false,
                ))
                .with_entry(RawClasspathEntry::container(
                    "org.eclipse.jdt.USER_LIBRARY/endorsed",
                    false,
                ))],
        );

        let resolved = session()
            .resolve_project_classpath(&ws, "app", &ResolveOptions::default().workspace_relative(true))
            .unwrap();
        assert_eq!(
            resolved.classpath_files(),
            vec![Path::new("libs/junit.jar"), Path::new("libs/hamcrest.jar")]
        );
        assert_eq!(resolved.boot_classpath_files(), vec![Path::new("/opt/xml.jar")]);
    }

    #[test]
    fn test_unknown_user_library() {
        let ws = workspace_with(
            Path::new("/ws"),
            vec![Project::new("app", "/ws/app").with_entry(RawClasspathEntry::container(
                "org.eclipse.jdt.USER_LIBRARY/mockito",
                false,
            ))],
        );

        let err = session()
            .resolve_project_classpath(&ws, "app", &ResolveOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ClasspathError::NotFound {
                kind: NotFoundKind::UserLibrary,
                ref name,
            } if name == "mockito"
        ));
    }
}
