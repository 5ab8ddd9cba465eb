//! Classpath resolution.
//!
//! Walks a project's raw classpath depth-first, in declaration order,
//! recursing into referenced projects and dispatching containers to their
//! resolvers. The result is deterministic for a given workspace, session and
//! set of options.

pub mod context;
pub mod errors;
pub mod resolved;
pub mod session;

pub use context::{ResolutionContext, StackGuard};
pub use errors::{ClasspathError, NotFoundKind};
pub use resolved::{ResolvedClasspath, ResolvedClasspathEntry};
pub use session::Session;

use crate::container::ResolverRegistry;
use crate::core::{ContainerArguments, ContainerPath, Project, RawClasspathEntry, Workspace};
use crate::runtime::RuntimeRegistry;

/// Options for a single resolve call.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Compute the runtime classpath: non-exported entries of referenced
    /// projects are followed too.
    pub runtime: bool,

    /// Emit paths inside the workspace relative to the workspace root.
    pub workspace_relative: bool,

    /// Fail on library entries whose file does not exist.
    pub strict: bool,

    pub arguments: ContainerArguments,
}

impl ResolveOptions {
    pub fn new() -> Self {
        ResolveOptions::default()
    }

    pub fn runtime(mut self, runtime: bool) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn workspace_relative(mut self, relative: bool) -> Self {
        self.workspace_relative = relative;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn arguments(mut self, arguments: ContainerArguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(key, value);
        self
    }
}

/// Resolve the classpath of `project`.
///
/// Any error aborts the call; no partial classpath is returned.
pub fn resolve_project_classpath(
    workspace: &Workspace,
    project: &Project,
    runtimes: &RuntimeRegistry,
    resolvers: &ResolverRegistry,
    options: &ResolveOptions,
) -> Result<ResolvedClasspath, ClasspathError> {
    tracing::debug!(
        "resolving {} classpath of `{}`",
        if options.runtime { "runtime" } else { "compile" },
        project.name()
    );

    let mut ctx = ResolutionContext::new(workspace, runtimes, resolvers, options);
    expand_project(&mut ctx, project, true)?;
    let resolved = ctx.into_resolved();

    tracing::debug!(
        "resolved `{}`: {} classpath entries, {} boot entries",
        project.name(),
        resolved.classpath().len(),
        resolved.boot_classpath().len()
    );
    Ok(resolved)
}

/// Push `project` on the stack and process its entries.
pub(crate) fn expand_project<'a>(
    ctx: &mut ResolutionContext<'a>,
    project: &'a Project,
    root: bool,
) -> Result<(), ClasspathError> {
    let mut guard = ctx.push_stack(project, root)?;
    if !root {
        guard.add_referenced_project(project.name());
    }

    for entry in project.raw_classpath_entries() {
        process_entry(&mut guard, project, entry)?;
    }
    Ok(())
}

fn process_entry<'a>(
    ctx: &mut ResolutionContext<'a>,
    project: &'a Project,
    entry: &'a RawClasspathEntry,
) -> Result<(), ClasspathError> {
    // A back-reference is a cycle whether or not it would be followed.
    if let RawClasspathEntry::Project { name, .. } = entry {
        if ctx.is_on_stack(name) {
            return Err(ClasspathError::Cycle {
                project: project.name().to_string(),
                reference: name.clone(),
                chain: ctx.stack().to_vec(),
            });
        }
    }

    // Dependents only see what a referenced project exports, unless the
    // full runtime classpath is requested.
    if !ctx.is_root() && !ctx.is_runtime() && !entry.is_exported() {
        tracing::trace!(
            "skipping non-exported {} entry of `{}`",
            entry.kind(),
            project.name()
        );
        return Ok(());
    }

    match entry {
        RawClasspathEntry::Source { path, output } => {
            let folder = output.as_deref().unwrap_or_else(|| project.default_output());
            tracing::trace!("source folder {} -> {}", path.display(), folder.display());
            let emitted = ctx.to_emitted_path(&project.resolve_path(folder));
            ctx.add_classpath_entry(ResolvedClasspathEntry::new(emitted));
        }

        RawClasspathEntry::Library {
            path,
            source_attachment,
            ..
        } => {
            let file = project.resolve_path(path);
            if !file.exists() {
                if ctx.is_strict() {
                    return Err(ClasspathError::MissingLibrary {
                        project: project.name().to_string(),
                        path: file,
                    });
                }
                tracing::debug!(
                    "library {} of `{}` does not exist (yet)",
                    file.display(),
                    project.name()
                );
            }

            let attachment = source_attachment.as_ref().and_then(|a| {
                let resolved = project.resolve_path(a);
                if resolved.exists() {
                    Some(ctx.to_emitted_path(&resolved))
                } else {
                    tracing::debug!(
                        "ignoring missing source attachment {} of `{}`",
                        resolved.display(),
                        project.name()
                    );
                    None
                }
            });

            let emitted = ctx.to_emitted_path(&file);
            ctx.add_classpath_entry(ResolvedClasspathEntry::new(emitted).with_source_attachment(attachment));
        }

        RawClasspathEntry::Project { name, .. } => {
            if ctx.is_expanded(name) {
                tracing::trace!("project `{}` already expanded", name);
                return Ok(());
            }

            let referenced = ctx.workspace().find_project(name)?;
            expand_project(ctx, referenced, false)?;
        }

        RawClasspathEntry::Container { path, .. } => {
            resolve_container(ctx, project, path)?;
        }
    }

    Ok(())
}

fn resolve_container<'a>(
    ctx: &mut ResolutionContext<'a>,
    project: &'a Project,
    path: &ContainerPath,
) -> Result<(), ClasspathError> {
    let resolvers = ctx.resolvers();
    let resolver = resolvers
        .resolver_for(path)
        .map_err(|e| e.in_project(project.name()))?;

    tracing::trace!("container `{}` handled by {}", path, resolver.name());
    resolver
        .resolve(path, ctx)
        .map_err(|e| e.in_project(project.name()))
}
