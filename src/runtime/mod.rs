//! Java runtime registry.
//!
//! Runtimes are registered once per id at session setup. At most one runtime
//! is the default; it backs the bare JRE container.

mod discovery;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::resolver::errors::{ClasspathError, NotFoundKind};

pub use discovery::{discover_runtime_homes, is_java_home, CORE_LIBRARIES};

/// A registered Java runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaRuntime {
    id: String,
    location: PathBuf,
    ext_dirs: Vec<PathBuf>,
    endorsed_dirs: Vec<PathBuf>,
    explicit_files: Option<Vec<PathBuf>>,
}

impl JavaRuntime {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The runtime home directory.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn ext_dirs(&self) -> &[PathBuf] {
        &self.ext_dirs
    }

    pub fn endorsed_dirs(&self) -> &[PathBuf] {
        &self.endorsed_dirs
    }

    /// Files given at registration, bypassing layout discovery.
    pub fn explicit_files(&self) -> Option<&[PathBuf]> {
        self.explicit_files.as_deref()
    }

    /// Boot classpath libraries of this runtime.
    ///
    /// Explicit files are returned verbatim. Otherwise the directory layout
    /// is scanned: core libraries, then ext dirs, then endorsed dirs.
    pub fn libraries(&self) -> Vec<PathBuf> {
        match &self.explicit_files {
            Some(files) => files.clone(),
            None => discovery::layout_libraries(self),
        }
    }
}

/// Parameters for [`RuntimeRegistry::register`].
#[derive(Debug, Clone, Default)]
pub struct RuntimeSpec {
    pub id: String,
    pub location: PathBuf,
    pub ext_dirs: Vec<PathBuf>,
    pub endorsed_dirs: Vec<PathBuf>,
    pub explicit_files: Option<Vec<PathBuf>>,
}

impl RuntimeSpec {
    pub fn new(id: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        RuntimeSpec {
            id: id.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn with_ext_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.ext_dirs = dirs;
        self
    }

    pub fn with_endorsed_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.endorsed_dirs = dirs;
        self
    }

    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.explicit_files = Some(files);
        self
    }
}

/// Registry of Java runtimes.
///
/// Configure fully before the first resolve; resolution only reads it.
#[derive(Debug, Default)]
pub struct RuntimeRegistry {
    runtimes: HashMap<String, JavaRuntime>,
    order: Vec<String>,
    default: Option<String>,
}

impl RuntimeRegistry {
    pub fn new() -> Self {
        RuntimeRegistry::default()
    }

    /// Register a runtime.
    ///
    /// Fails if the id is blank, already registered, or the location is not
    /// an existing directory.
    pub fn register(&mut self, spec: RuntimeSpec) -> Result<&JavaRuntime, ClasspathError> {
        let id = spec.id.trim().to_string();
        if id.is_empty() {
            return Err(ClasspathError::configuration("runtime id must not be empty"));
        }
        if self.runtimes.contains_key(&id) {
            return Err(ClasspathError::configuration(format!(
                "runtime `{}` is already registered",
                id
            )));
        }
        if !spec.location.is_dir() {
            return Err(ClasspathError::configuration(format!(
                "location of runtime `{}` is not a directory: {}",
                id,
                spec.location.display()
            )));
        }

        tracing::debug!("registered runtime `{}` at {}", id, spec.location.display());

        let runtime = JavaRuntime {
            id: id.clone(),
            location: spec.location,
            ext_dirs: spec.ext_dirs,
            endorsed_dirs: spec.endorsed_dirs,
            explicit_files: spec.explicit_files,
        };
        self.order.push(id.clone());
        Ok(self.runtimes.entry(id).or_insert(runtime))
    }

    /// Make `id` the default runtime. The last call wins.
    pub fn set_default(&mut self, id: &str) -> Result<(), ClasspathError> {
        if !self.runtimes.contains_key(id) {
            return Err(ClasspathError::not_found(NotFoundKind::Runtime, id));
        }
        match self.default.replace(id.to_string()) {
            Some(previous) if previous != id => {
                tracing::info!("default runtime changed from `{}` to `{}`", previous, id);
            }
            _ => tracing::debug!("default runtime is `{}`", id),
        }
        Ok(())
    }

    /// Look up a runtime by id.
    pub fn resolve(&self, id: &str) -> Result<&JavaRuntime, ClasspathError> {
        self.runtimes
            .get(id)
            .ok_or_else(|| ClasspathError::not_found(NotFoundKind::Runtime, id))
    }

    /// The current default runtime.
    pub fn default_runtime(&self) -> Result<&JavaRuntime, ClasspathError> {
        match &self.default {
            Some(id) => self.resolve(id),
            None => Err(ClasspathError::not_found(
                NotFoundKind::DefaultRuntime,
                "no runtime is marked as default",
            )),
        }
    }

    pub fn default_id(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Boot classpath libraries of `runtime`.
    pub fn libraries(&self, runtime: &JavaRuntime) -> Vec<PathBuf> {
        runtime.libraries()
    }

    /// Register every Java home found directly below `dir`, named after its
    /// directory. Candidates that fail to register are logged and skipped.
    ///
    /// Returns the ids that were registered.
    pub fn discover(&mut self, dir: &Path) -> Vec<String> {
        let mut registered = Vec::new();
        for home in discover_runtime_homes(dir) {
            let Some(id) = home.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            tracing::info!("checking {} for an installed runtime", home.display());
            match self.register(RuntimeSpec::new(&id, &home)) {
                Ok(_) => registered.push(id),
                Err(e) => tracing::warn!("can't use runtime at {}: {}", home.display(), e),
            }
        }
        registered
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Registered runtimes, in registration order.
    pub fn runtimes(&self) -> impl Iterator<Item = &JavaRuntime> {
        self.order.iter().filter_map(|id| self.runtimes.get(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.runtimes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.runtimes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runtimes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_register_and_resolve() {
        let tmp = TempDir::new().unwrap();
        let mut registry = RuntimeRegistry::new();
        registry
            .register(RuntimeSpec::new("jdk8", tmp.path()))
            .unwrap();

        assert!(registry.contains("jdk8"));
        assert_eq!(registry.resolve("jdk8").unwrap().location(), tmp.path());
        assert!(matches!(
            registry.resolve("jdk11"),
            Err(ClasspathError::NotFound {
                kind: NotFoundKind::Runtime,
                ..
            })
        ));
    }

    #[test]
    fn test_register_rejects_bad_input() {
        let tmp = TempDir::new().unwrap();
        let mut registry = RuntimeRegistry::new();

        let empty = registry.register(RuntimeSpec::new("  ", tmp.path()));
        assert!(matches!(empty, Err(ClasspathError::Configuration { .. })));

        let missing = registry.register(RuntimeSpec::new("jdk", tmp.path().join("nope")));
        assert!(matches!(missing, Err(ClasspathError::Configuration { .. })));

        registry.register(RuntimeSpec::new("jdk", tmp.path())).unwrap();
        let duplicate = registry.register(RuntimeSpec::new("jdk", tmp.path()));
        assert!(matches!(duplicate, Err(ClasspathError::Configuration { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_last_write_wins() {
        let tmp = TempDir::new().unwrap();
        let mut registry = RuntimeRegistry::new();
        registry
            .register(RuntimeSpec::new("A", tmp.path()).with_files(vec!["a.jar".into()]))
            .unwrap();
        registry
            .register(RuntimeSpec::new("B", tmp.path()).with_files(vec!["b.jar".into()]))
            .unwrap();

        assert!(registry.default_runtime().is_err());

        registry.set_default("B").unwrap();
        registry.set_default("A").unwrap();
        let default = registry.default_runtime().unwrap();
        assert_eq!(default.id(), "A");
        assert_eq!(registry.libraries(default), vec![PathBuf::from("a.jar")]);

        assert!(registry.set_default("C").is_err());
        assert_eq!(registry.default_id(), Some("A"));
    }

    #[test]
    fn test_explicit_files_keep_order() {
        let tmp = TempDir::new().unwrap();
        let mut registry = RuntimeRegistry::new();
        let files: Vec<PathBuf> = vec!["z.jar".into(), "a.jar".into(), "m.jar".into()];
        let runtime = registry
            .register(RuntimeSpec::new("jdk", tmp.path()).with_files(files.clone()))
            .unwrap();
        assert_eq!(runtime.libraries(), files);
    }

    #[test]
    fn test_ids_in_registration_order() {
        let tmp = TempDir::new().unwrap();
        let mut registry = RuntimeRegistry::new();
        for id in ["zulu", "adopt", "oracle"] {
            registry.register(RuntimeSpec::new(id, tmp.path())).unwrap();
        }
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["zulu", "adopt", "oracle"]);
    }

    #[test]
    fn test_discover_registers_java_homes() {
        let tmp = TempDir::new().unwrap();
        let jdk = tmp.path().join("jdk8");
        std::fs::create_dir_all(jdk.join("jre/lib")).unwrap();
        std::fs::write(jdk.join("jre/lib/rt.jar"), "").unwrap();
        std::fs::create_dir_all(tmp.path().join("not-a-jdk")).unwrap();

        let mut registry = RuntimeRegistry::new();
        let ids = registry.discover(tmp.path());
        assert_eq!(ids, vec!["jdk8".to_string()]);
        assert!(!registry.contains("not-a-jdk"));
    }
}
