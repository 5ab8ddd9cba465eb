//! Argument-driven extension containers.
//!
//! An extension container delegates to a provider function that receives
//! the value of one caller-supplied container argument. The bundled use is
//! the plug-in dependencies container, which reads its files from the target
//! platform named by the `target.platform` argument.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::container::ContainerResolver;
use crate::core::ContainerPath;
use crate::resolver::{ClasspathError, NotFoundKind, ResolutionContext, ResolvedClasspathEntry};
use crate::util::fs::glob_files;

/// Argument naming the target platform for the plug-in dependencies container.
pub const TARGET_PLATFORM_ARGUMENT: &str = "target.platform";

/// Maps an argument value (if any) and a container path to library files.
pub type EntryProvider =
    dyn Fn(Option<&str>, &ContainerPath) -> Result<Vec<PathBuf>, ClasspathError> + Send + Sync;

/// A container resolver parameterized by a container argument.
pub struct ExtensionContainerResolver {
    name: String,
    argument: String,
    default_value: Option<String>,
    provider: Box<EntryProvider>,
}

impl ExtensionContainerResolver {
    /// Create an extension resolver reading `argument` and calling `provider`.
    pub fn new<F>(name: impl Into<String>, argument: impl Into<String>, provider: F) -> Self
    where
        F: Fn(Option<&str>, &ContainerPath) -> Result<Vec<PathBuf>, ClasspathError>
            + Send
            + Sync
            + 'static,
    {
        ExtensionContainerResolver {
            name: name.into(),
            argument: argument.into(),
            default_value: None,
            provider: Box::new(provider),
        }
    }

    /// Value used when the caller does not supply the argument.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The argument key this resolver consumes.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Resolver for the plug-in dependencies container backed by named
    /// target platforms.
    ///
    /// Each platform is a list of locations; every `*.jar` directly in a
    /// location or in its `plugins` directory is added, sorted by path.
    pub fn target_platforms(platforms: BTreeMap<String, Vec<PathBuf>>) -> Self {
        ExtensionContainerResolver::new(
            "target-platform",
            TARGET_PLATFORM_ARGUMENT,
            move |value, path| {
                let name = value.ok_or_else(|| {
                    ClasspathError::configuration(format!(
                        "container `{}` requires the `{}` argument",
                        path, TARGET_PLATFORM_ARGUMENT
                    ))
                })?;
                let locations = platforms
                    .get(name)
                    .ok_or_else(|| ClasspathError::not_found(NotFoundKind::TargetPlatform, name))?;

                let patterns = ["*.jar".to_string(), "plugins/*.jar".to_string()];
                let mut files = Vec::new();
                for location in locations {
                    let found = glob_files(location, &patterns).map_err(|e| {
                        ClasspathError::configuration(format!(
                            "cannot scan target platform `{}` at {}: {:#}",
                            name,
                            location.display(),
                            e
                        ))
                    })?;
                    files.extend(found);
                }
                Ok(files)
            },
        )
    }
}

impl ContainerResolver for ExtensionContainerResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(
        &self,
        path: &ContainerPath,
        ctx: &mut ResolutionContext<'_>,
    ) -> Result<(), ClasspathError> {
        let value = ctx
            .argument(&self.argument)
            .or(self.default_value.as_deref());
        tracing::debug!(
            "container `{}` with {} = {:?}",
            path,
            self.argument,
            value
        );

        for file in (self.provider)(value, path)? {
            let emitted = ctx.to_emitted_path(&file);
            ctx.add_classpath_entry(ResolvedClasspathEntry::new(emitted));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ExtensionContainerResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionContainerResolver")
            .field("name", &self.name)
            .field("argument", &self.argument)
            .field("default_value", &self.default_value)
            .finish_non_exhaustive()
    }
}
