//! The Java runtime container.
//!
//! `org.eclipse.jdt.launching.JRE_CONTAINER` stands for the default runtime,
//! as does `org.eclipse.jdt.launching.JRE_CONTAINER/<vm-type>`;
//! `org.eclipse.jdt.launching.JRE_CONTAINER/<vm-type>/<id>` names one
//! explicitly. Runtime libraries go to the boot classpath.

use crate::container::ContainerResolver;
use crate::core::container_path::JRE_CONTAINER;
use crate::core::ContainerPath;
use crate::resolver::{ClasspathError, NotFoundKind, ResolutionContext, ResolvedClasspathEntry};

/// Resolves JRE containers through the session's runtime registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct JreContainerResolver;

impl JreContainerResolver {
    pub fn new() -> Self {
        JreContainerResolver
    }
}

impl ContainerResolver for JreContainerResolver {
    fn name(&self) -> &str {
        "jre"
    }

    fn can_resolve(&self, path: &ContainerPath) -> bool {
        path.starts_with_prefix(JRE_CONTAINER)
    }

    fn resolve(
        &self,
        path: &ContainerPath,
        ctx: &mut ResolutionContext<'_>,
    ) -> Result<(), ClasspathError> {
        let runtimes = ctx.runtimes();
        let runtime = match runtime_id(path) {
            Some(id) => runtimes.resolve(id)?,
            None => runtimes.default_runtime().map_err(|_| {
                ClasspathError::not_found(NotFoundKind::DefaultRuntime, path.to_string())
            })?,
        };

        tracing::debug!("container `{}` uses runtime `{}`", path, runtime.id());
        for library in runtimes.libraries(runtime) {
            let emitted = ctx.to_emitted_path(&library);
            ctx.add_boot_classpath_entry(ResolvedClasspathEntry::new(emitted));
        }
        Ok(())
    }
}

/// The runtime id of a container path, present only after a vm-type segment.
fn runtime_id(path: &ContainerPath) -> Option<&str> {
    path.remainder()?.rsplit_once('/').map(|(_, id)| id)
}
