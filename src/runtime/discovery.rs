//! Runtime directory layout rules.
//!
//! Library order is fixed: core libraries first, then each ext directory,
//! then each endorsed directory. Within a scanned directory files are sorted
//! by name, so the result never depends on directory iteration order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::JavaRuntime;

/// Core library files, in boot classpath order.
pub const CORE_LIBRARIES: &[&str] = &[
    "rt.jar",
    "jce.jar",
    "jsse.jar",
    "charsets.jar",
    "resources.jar",
];

/// Library directories that may hold the core libraries, most specific first.
const LIBRARY_DIRS: &[&str] = &["lib", "jre/lib"];

const DEFAULT_EXT_DIR: &str = "ext";
const DEFAULT_ENDORSED_DIR: &str = "endorsed";

/// Compute the libraries of a runtime without explicit files.
pub(super) fn layout_libraries(runtime: &JavaRuntime) -> Vec<PathBuf> {
    let location = runtime.location();
    let (lib_dir, mut libraries) = core_libraries(location);

    let ext_dirs = dirs_or_default(location, runtime.ext_dirs(), &lib_dir, DEFAULT_EXT_DIR);
    let endorsed_dirs =
        dirs_or_default(location, runtime.endorsed_dirs(), &lib_dir, DEFAULT_ENDORSED_DIR);

    for dir in ext_dirs.iter().chain(endorsed_dirs.iter()) {
        for file in archives_in(dir, &["jar", "zip"]) {
            if !libraries.contains(&file) {
                libraries.push(file);
            }
        }
    }

    libraries
}

/// Find the core libraries and the directory they live in.
fn core_libraries(location: &Path) -> (PathBuf, Vec<PathBuf>) {
    for dir in LIBRARY_DIRS {
        let lib_dir = location.join(dir);
        let found: Vec<PathBuf> = CORE_LIBRARIES
            .iter()
            .map(|name| lib_dir.join(name))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return (lib_dir, found);
        }
    }

    // Modular runtimes ship jmods instead of rt.jar.
    let jmods = archives_in(&location.join("jmods"), &["jmod"]);
    let lib_dir = location.join("lib");
    if !jmods.is_empty() {
        return (lib_dir, jmods);
    }

    let jars = archives_in(&lib_dir, &["jar"]);
    (lib_dir, jars)
}

/// Configured directories resolved against `location`, or `<lib_dir>/<default>`.
fn dirs_or_default(
    location: &Path,
    configured: &[PathBuf],
    lib_dir: &Path,
    default: &str,
) -> Vec<PathBuf> {
    if configured.is_empty() {
        return vec![lib_dir.join(default)];
    }
    configured
        .iter()
        .map(|dir| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                location.join(dir)
            }
        })
        .collect()
}

/// Files directly inside `dir` with one of `extensions`, sorted by name.
fn archives_in(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("failed to read {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        })
        .collect()
}

/// Whether `dir` looks like a Java home.
pub fn is_java_home(dir: &Path) -> bool {
    dir.join("lib/rt.jar").is_file()
        || dir.join("jre/lib/rt.jar").is_file()
        || dir.join("lib/modules").is_file()
        || dir.join("jmods").is_dir()
}

/// Java homes directly below `dir`, sorted by name.
pub fn discover_runtime_homes(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::warn!("runtime discovery directory does not exist: {}", dir.display());
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .filter(|path| is_java_home(path))
        .collect()
}
