//! jdtpath - classpath resolution for Java workspaces
//!
//! This crate computes the ordered classpath and boot classpath of a project
//! from its raw classpath entries: source folders, libraries, references to
//! other projects and containers backed by pluggable resolvers.

pub mod container;
pub mod core;
pub mod ops;
pub mod resolver;
pub mod runtime;
pub mod util;

/// Test utilities for jdtpath unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides in-memory workspaces and on-disk fixtures
/// for projects and Java runtimes.
#[cfg(test)]
pub mod test_support;

pub use core::{
    container_path::ContainerPath, entry::RawClasspathEntry, project::Project,
    workspace::Workspace,
};

pub use container::{ContainerResolver, ResolverRegistry};
pub use resolver::{
    ClasspathError, ResolveOptions, ResolvedClasspath, ResolvedClasspathEntry, Session,
};
pub use runtime::{JavaRuntime, RuntimeRegistry, RuntimeSpec};
