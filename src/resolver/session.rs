//! Session - the explicitly constructed owner of the registries.
//!
//! Lifecycle: construct, register runtimes and container resolvers, then
//! resolve any number of projects through `&Session`. Resolving never
//! mutates the session, so one configured session can serve concurrent
//! resolve calls.

use crate::container::{ContainerResolver, JreContainerResolver, ResolverRegistry};
use crate::core::container_path::JRE_CONTAINER;
use crate::core::Workspace;
use crate::resolver::{resolve_project_classpath, ClasspathError, ResolveOptions, ResolvedClasspath};
use crate::runtime::RuntimeRegistry;

/// Runtime and container resolver registries for a workspace.
#[derive(Debug)]
pub struct Session {
    runtimes: RuntimeRegistry,
    resolvers: ResolverRegistry,
}

impl Session {
    /// A session with no runtimes and the JRE container resolver registered.
    pub fn new() -> Self {
        let mut resolvers = ResolverRegistry::new();
        resolvers.push(JRE_CONTAINER, Box::new(JreContainerResolver::new()), 0);
        Session::with_registries(RuntimeRegistry::new(), resolvers)
    }

    /// A session from pre-built registries.
    pub fn with_registries(runtimes: RuntimeRegistry, resolvers: ResolverRegistry) -> Self {
        Session {
            runtimes,
            resolvers,
        }
    }

    pub fn runtimes(&self) -> &RuntimeRegistry {
        &self.runtimes
    }

    pub fn runtimes_mut(&mut self) -> &mut RuntimeRegistry {
        &mut self.runtimes
    }

    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }

    pub fn resolvers_mut(&mut self) -> &mut ResolverRegistry {
        &mut self.resolvers
    }

    /// Shorthand for registering a container resolver.
    pub fn register_resolver(
        &mut self,
        prefix: impl Into<String>,
        resolver: impl ContainerResolver + 'static,
        priority: i32,
    ) -> Result<(), ClasspathError> {
        self.resolvers.register(prefix, resolver, priority)
    }

    /// Resolve the classpath of the project named `project`.
    pub fn resolve_project_classpath(
        &self,
        workspace: &Workspace,
        project: &str,
        options: &ResolveOptions,
    ) -> Result<ResolvedClasspath, ClasspathError> {
        let project = workspace.find_project(project)?;
        resolve_project_classpath(workspace, project, &self.runtimes, &self.resolvers, options)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::NotFoundKind;

    #[test]
    fn test_new_session_handles_jre_container() {
        let session = Session::new();
        assert_eq!(session.resolvers().prefixes().collect::<Vec<_>>(), vec![JRE_CONTAINER]);
        assert!(session.runtimes().is_empty());
    }

    #[test]
    fn test_unknown_project() {
        let session = Session::new();
        let ws = Workspace::new("/ws");
        let err = session
            .resolve_project_classpath(&ws, "ghost", &ResolveOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ClasspathError::NotFound {
                kind: NotFoundKind::Project,
                ..
            }
        ));
    }

    #[test]
    fn test_session_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
