//! Classpath containers.
//!
//! A container is a symbolic classpath source. Its path prefix selects a
//! [`ContainerResolver`] from the [`ResolverRegistry`]; the resolver pushes
//! concrete entries into the resolution context.

pub mod extension;
pub mod jre;
pub mod registry;
pub mod user_library;

pub use extension::{ExtensionContainerResolver, TARGET_PLATFORM_ARGUMENT};
pub use jre::JreContainerResolver;
pub use registry::ResolverRegistry;
pub use user_library::{UserLibrary, UserLibraryContainerResolver};

use crate::core::ContainerPath;
use crate::resolver::{ClasspathError, ResolutionContext};

/// A pluggable container resolver.
///
/// Resolvers are shared by every resolve call of a session, so they must be
/// `Send + Sync` and keep no per-call state.
pub trait ContainerResolver: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Whether this resolver handles `path`. Called after prefix matching,
    /// so a resolver may decline paths it cannot interpret.
    fn can_resolve(&self, path: &ContainerPath) -> bool {
        let _ = path;
        true
    }

    /// Push the entries `path` stands for into `ctx`.
    fn resolve(
        &self,
        path: &ContainerPath,
        ctx: &mut ResolutionContext<'_>,
    ) -> Result<(), ClasspathError>;
}
