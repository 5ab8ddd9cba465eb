//! Container resolver registry.
//!
//! Selection rules, in order: longest matching prefix, highest priority,
//! earliest registration.

use std::cmp::Ordering;

use crate::container::ContainerResolver;
use crate::core::ContainerPath;
use crate::resolver::ClasspathError;

struct Registration {
    prefix: String,
    priority: i32,
    order: usize,
    resolver: Box<dyn ContainerResolver>,
}

impl Registration {
    fn rank(&self, other: &Registration) -> Ordering {
        self.prefix
            .len()
            .cmp(&other.prefix.len())
            .then(self.priority.cmp(&other.priority))
            .then(other.order.cmp(&self.order))
    }
}

/// Registry of container resolvers keyed by path prefix.
///
/// Configure fully before the first resolve; lookups never mutate it.
#[derive(Default)]
pub struct ResolverRegistry {
    registrations: Vec<Registration>,
}

impl ResolverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ResolverRegistry::default()
    }

    /// Register `resolver` for container paths starting with `prefix`.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        resolver: impl ContainerResolver + 'static,
        priority: i32,
    ) -> Result<(), ClasspathError> {
        self.register_boxed(prefix, Box::new(resolver), priority)
    }

    pub fn register_boxed(
        &mut self,
        prefix: impl Into<String>,
        resolver: Box<dyn ContainerResolver>,
        priority: i32,
    ) -> Result<(), ClasspathError> {
        let prefix = prefix.into().trim().trim_matches('/').to_string();
        if prefix.is_empty() {
            return Err(ClasspathError::configuration(format!(
                "container resolver `{}` registered with an empty prefix",
                resolver.name()
            )));
        }

        self.push(prefix, resolver, priority);
        Ok(())
    }

    /// Register under a prefix that is already known to be non-empty.
    pub(crate) fn push(
        &mut self,
        prefix: impl Into<String>,
        resolver: Box<dyn ContainerResolver>,
        priority: i32,
    ) {
        let prefix = prefix.into();
        tracing::debug!(
            "registered container resolver `{}` for `{}` (priority {})",
            resolver.name(),
            prefix,
            priority
        );
        let order = self.registrations.len();
        self.registrations.push(Registration {
            prefix,
            priority,
            order,
            resolver,
        });
    }

    /// Select the resolver for `path`.
    pub fn resolver_for(&self, path: &ContainerPath) -> Result<&dyn ContainerResolver, ClasspathError> {
        self.registrations
            .iter()
            .filter(|r| path.starts_with_prefix(&r.prefix) && r.resolver.can_resolve(path))
            .max_by(|a, b| a.rank(b))
            .map(|r| r.resolver.as_ref())
            .ok_or_else(|| ClasspathError::UnresolvedContainer {
                project: None,
                container: path.to_string(),
            })
    }

    /// Registered prefixes, in registration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.registrations.iter().map(|r| r.prefix.as_str())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.registrations
                    .iter()
                    .map(|r| (r.prefix.as_str(), r.resolver.name(), r.priority)),
            )
            .finish()
    }
}
