//! Building a configured [`Session`] for a workspace.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::container::{ExtensionContainerResolver, UserLibrary, UserLibraryContainerResolver};
use crate::core::container_path::{REQUIRED_PLUGINS_CONTAINER, USER_LIBRARY_CONTAINER};
use crate::core::{ContainerArguments, Workspace};
use crate::resolver::{ResolveOptions, Session};
use crate::runtime::RuntimeSpec;
use crate::util::config::{global_config_path, load_config, workspace_config_path};
use crate::util::fs::{absolutize, expand_patterns};
use crate::util::Config;

/// A discovered workspace with its merged configuration and session.
#[derive(Debug)]
pub struct OpenWorkspace {
    pub workspace: Workspace,
    pub config: Config,
    pub session: Session,
}

/// Discover the workspace at `root`, load its configuration and configure
/// a session from it.
///
/// `use_global` controls whether `~/.jdtpath/config.toml` is read.
pub fn open_workspace(root: &Path, use_global: bool) -> Result<OpenWorkspace> {
    let workspace = Workspace::discover(root)?;
    tracing::debug!(
        "found {} project(s) in {}",
        workspace.len(),
        workspace.root().display()
    );

    let global = if use_global {
        global_config_path()
    } else {
        None
    };
    let config = load_config(global.as_deref(), &workspace_config_path(workspace.root()))?;
    let session = configure_session(&config, workspace.root())?;

    Ok(OpenWorkspace {
        workspace,
        config,
        session,
    })
}

/// Configure a session from `config`.
///
/// Relative paths resolve against `root`. Runtimes are registered in
/// declaration order, then discovery directories are scanned. Among
/// runtimes marked default the last one wins.
pub fn configure_session(config: &Config, root: &Path) -> Result<Session> {
    let mut session = Session::new();

    for runtime in &config.runtimes {
        let location = absolutize(root, &runtime.location);
        let mut spec = RuntimeSpec::new(&runtime.id, &location)
            .with_ext_dirs(runtime.ext_dirs.clone())
            .with_endorsed_dirs(runtime.endorsed_dirs.clone());
        if let Some(files) = &runtime.files {
            let files = expand_patterns(&location, files)
                .with_context(|| format!("invalid files for runtime `{}`", runtime.id))?;
            spec = spec.with_files(files);
        }
        session.runtimes_mut().register(spec)?;
    }

    for dir in &config.discovery.runtime_dirs {
        let dir = absolutize(root, dir);
        let found = session.runtimes_mut().discover(&dir);
        tracing::debug!("discovered {} runtime(s) in {}", found.len(), dir.display());
    }

    for id in config.default_runtimes() {
        session.runtimes_mut().set_default(id)?;
    }

    let mut libraries = UserLibraryContainerResolver::new();
    for (name, library) in &config.user_libraries {
        let files = expand_patterns(root, &library.files)
            .with_context(|| format!("invalid files for user library `{}`", name))?;
        libraries = libraries.with_library(name, UserLibrary::new(files).system(library.system));
    }
    session.register_resolver(USER_LIBRARY_CONTAINER, libraries, 0)?;

    let platforms: BTreeMap<String, Vec<PathBuf>> = config
        .target_platforms
        .iter()
        .map(|(name, platform)| {
            let locations = platform
                .locations
                .iter()
                .map(|location| absolutize(root, location))
                .collect();
            (name.clone(), locations)
        })
        .collect();
    session.register_resolver(
        REQUIRED_PLUGINS_CONTAINER,
        ExtensionContainerResolver::target_platforms(platforms),
        0,
    )?;

    Ok(session)
}

/// Default resolve options from `config`.
pub fn resolve_options(config: &Config) -> ResolveOptions {
    let arguments: ContainerArguments = config.arguments.iter().collect();

    ResolveOptions::new()
        .runtime(config.resolve.runtime)
        .workspace_relative(config.resolve.workspace_relative)
        .strict(config.resolve.strict)
        .arguments(arguments)
}
