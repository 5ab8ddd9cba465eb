//! Filesystem utilities.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Find files matching glob patterns relative to a base directory.
///
/// The result is sorted and free of duplicates.
pub fn glob_files(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();
    for pattern in patterns {
        results.extend(glob_pattern(base, pattern)?);
    }

    results.sort();
    results.dedup();
    Ok(results)
}

/// Expand a list of file patterns, keeping the order of the list.
///
/// Literal paths are kept even if the file does not exist; glob patterns
/// contribute their matches sorted by path. Relative entries resolve
/// against `base`.
pub fn expand_patterns(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut results: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let matches = if is_glob(pattern) {
            let mut found = glob_pattern(base, pattern)?;
            found.sort();
            found
        } else {
            vec![absolutize(base, Path::new(pattern))]
        };

        for path in matches {
            if !results.contains(&path) {
                results.push(path);
            }
        }
    }

    Ok(results)
}

fn glob_pattern(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = absolutize(base, Path::new(pattern));
    let pattern_str = full_pattern.to_string_lossy();

    let mut results = Vec::new();
    for entry in glob(&pattern_str).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    results.push(path);
                }
            }
            Err(e) => {
                tracing::warn!("glob error: {}", e);
            }
        }
    }
    Ok(results)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Join `path` onto `base` unless it is already absolute.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root is dropped; leading `..` of a relative path is kept.
/// Symlinks are not resolved.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_glob_files() {
        let tmp = TempDir::new().unwrap();
        let lib = tmp.path().join("lib");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("b.jar"), "").unwrap();
        fs::write(lib.join("a.jar"), "").unwrap();
        fs::write(lib.join("readme.txt"), "readme").unwrap();

        let files = glob_files(tmp.path(), &["lib/*.jar".to_string()]).unwrap();
        assert_eq!(files, vec![lib.join("a.jar"), lib.join("b.jar")]);
    }

    #[test]
    fn test_expand_patterns_keeps_list_order() {
        let tmp = TempDir::new().unwrap();
        let lib = tmp.path().join("lib");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("y.jar"), "").unwrap();
        fs::write(lib.join("x.jar"), "").unwrap();

        let files = expand_patterns(
            tmp.path(),
            &[
                "rt.jar".to_string(),
                "lib/*.jar".to_string(),
                "lib/x.jar".to_string(),
            ],
        )
        .unwrap();

        assert_eq!(
            files,
            vec![tmp.path().join("rt.jar"), lib.join("x.jar"), lib.join("y.jar")]
        );
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/ws/app/../shared/./x.jar")),
            PathBuf::from("/ws/shared/x.jar")
        );
        assert_eq!(normalize_lexically(Path::new("/../x.jar")), PathBuf::from("/x.jar"));
        assert_eq!(
            normalize_lexically(Path::new("../../lib/a.jar")),
            PathBuf::from("../../lib/a.jar")
        );
        assert_eq!(normalize_lexically(Path::new("lib/..")), PathBuf::from("."));
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/ws"), Path::new("/ws/app/bin")),
            PathBuf::from("app/bin")
        );
    }
}
