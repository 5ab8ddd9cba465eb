//! Per-call resolution state.

use std::collections::HashSet;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::container::ResolverRegistry;
use crate::core::{Project, Workspace};
use crate::resolver::errors::ClasspathError;
use crate::resolver::resolved::{ResolvedClasspath, ResolvedClasspathEntry};
use crate::resolver::ResolveOptions;
use crate::runtime::RuntimeRegistry;
use crate::util::fs::{normalize_lexically, relative_path};

/// Mutable accumulator for a single resolve call.
///
/// Created by the orchestrator, passed down the recursion and into container
/// resolvers, and frozen into a [`ResolvedClasspath`] at the end. Never
/// shared between calls.
pub struct ResolutionContext<'a> {
    workspace: &'a Workspace,
    runtimes: &'a RuntimeRegistry,
    resolvers: &'a ResolverRegistry,
    options: &'a ResolveOptions,

    classpath: Vec<ResolvedClasspathEntry>,
    classpath_paths: HashSet<PathBuf>,
    boot_classpath: Vec<ResolvedClasspathEntry>,
    boot_paths: HashSet<PathBuf>,

    stack: Vec<String>,
    expanded: HashSet<String>,
    referenced: Vec<String>,

    current: Option<&'a Project>,
    root: bool,
}

impl<'a> ResolutionContext<'a> {
    pub(crate) fn new(
        workspace: &'a Workspace,
        runtimes: &'a RuntimeRegistry,
        resolvers: &'a ResolverRegistry,
        options: &'a ResolveOptions,
    ) -> Self {
        ResolutionContext {
            workspace,
            runtimes,
            resolvers,
            options,
            classpath: Vec::new(),
            classpath_paths: HashSet::new(),
            boot_classpath: Vec::new(),
            boot_paths: HashSet::new(),
            stack: Vec::new(),
            expanded: HashSet::new(),
            referenced: Vec::new(),
            current: None,
            root: false,
        }
    }

    pub fn workspace(&self) -> &'a Workspace {
        self.workspace
    }

    pub fn runtimes(&self) -> &'a RuntimeRegistry {
        self.runtimes
    }

    pub fn resolvers(&self) -> &'a ResolverRegistry {
        self.resolvers
    }

    /// Whether a runtime (rather than compile) classpath is being computed.
    pub fn is_runtime(&self) -> bool {
        self.options.runtime
    }

    pub fn is_workspace_relative(&self) -> bool {
        self.options.workspace_relative
    }

    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// A caller-supplied container argument.
    pub fn argument(&self, key: &str) -> Option<&'a str> {
        self.options.arguments.get(key)
    }

    /// The project whose entries are being expanded.
    pub fn current_project(&self) -> Option<&'a Project> {
        self.current
    }

    pub fn has_current_project(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the current project is the one the call was made for.
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Render a path for output: workspace-relative when requested and the
    /// path lies inside the workspace, unchanged otherwise.
    pub fn to_emitted_path(&self, path: &Path) -> PathBuf {
        let root = self.workspace.root();
        let path = normalize_lexically(path);
        if self.options.workspace_relative && path.is_absolute() && path.starts_with(root) {
            relative_path(root, &path)
        } else {
            path
        }
    }

    /// Append to the main classpath. Duplicates and boot entries are ignored.
    pub fn add_classpath_entry(&mut self, entry: ResolvedClasspathEntry) {
        if self.boot_paths.contains(&entry.path) {
            tracing::trace!("{} is on the boot classpath, skipped", entry.path.display());
            return;
        }
        if self.classpath_paths.insert(entry.path.clone()) {
            tracing::trace!("classpath += {}", entry.path.display());
            self.classpath.push(entry);
        }
    }

    /// Append to the boot classpath, removing the path from the main classpath.
    pub fn add_boot_classpath_entry(&mut self, entry: ResolvedClasspathEntry) {
        if self.classpath_paths.remove(&entry.path) {
            self.classpath.retain(|e| e.path != entry.path);
        }
        if self.boot_paths.insert(entry.path.clone()) {
            tracing::trace!("boot classpath += {}", entry.path.display());
            self.boot_classpath.push(entry);
        }
    }

    /// Record a referenced project in the result without expanding it.
    pub fn add_referenced_project(&mut self, name: &str) {
        if !self.referenced.iter().any(|n| n == name) {
            self.referenced.push(name.to_string());
        }
    }

    pub fn is_on_stack(&self, name: &str) -> bool {
        self.stack.iter().any(|n| n == name)
    }

    /// Whether the project was already expanded during this call.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    /// Projects currently being expanded, outermost first.
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// Enter `project`, making it the current project.
    ///
    /// Fails with a cycle error if the project is already on the stack. The
    /// returned guard pops the project and restores the previous current
    /// project when dropped, on success and failure paths alike.
    pub fn push_stack(
        &mut self,
        project: &'a Project,
        root: bool,
    ) -> Result<StackGuard<'_, 'a>, ClasspathError> {
        let name = project.name();
        if self.is_on_stack(name) {
            return Err(ClasspathError::Cycle {
                project: self
                    .current
                    .map(|p| p.name().to_string())
                    .unwrap_or_else(|| name.to_string()),
                reference: name.to_string(),
                chain: self.stack.clone(),
            });
        }

        self.stack.push(name.to_string());
        self.expanded.insert(name.to_string());
        let previous = self.current.replace(project);
        let previous_root = std::mem::replace(&mut self.root, root);

        Ok(StackGuard {
            ctx: self,
            previous,
            previous_root,
        })
    }

    /// Expand another project into this context, as a non-root project.
    ///
    /// Container resolvers use this when a container stands for workspace
    /// projects. Already expanded projects are skipped; cycles are errors.
    pub fn resolve_project(&mut self, project: &'a Project) -> Result<(), ClasspathError> {
        if !self.is_on_stack(project.name()) && self.is_expanded(project.name()) {
            return Ok(());
        }
        super::expand_project(self, project, false)
    }

    pub(crate) fn into_resolved(self) -> ResolvedClasspath {
        ResolvedClasspath::new(self.classpath, self.boot_classpath, self.referenced)
    }
}

/// Scoped membership of a project on the resolution stack.
pub struct StackGuard<'c, 'a> {
    ctx: &'c mut ResolutionContext<'a>,
    previous: Option<&'a Project>,
    previous_root: bool,
}

impl<'a> Deref for StackGuard<'_, 'a> {
    type Target = ResolutionContext<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl DerefMut for StackGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl Drop for StackGuard<'_, '_> {
    fn drop(&mut self) {
        let popped = self.ctx.stack.pop();
        tracing::trace!("leaving project {:?}", popped);
        self.ctx.current = self.previous;
        self.ctx.root = self.previous_root;
    }
}
