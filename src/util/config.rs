//! Configuration file support.
//!
//! Two locations are read:
//! - Global: `~/.jdtpath/config.toml` - user-wide runtimes and libraries
//! - Workspace: `<workspace>/.jdtpath/config.toml` - workspace overrides
//!
//! Workspace config takes precedence over global config. Relative paths
//! resolve against the workspace root.
//!
//! ```toml
//! [[runtime]]
//! id = "jdk8"
//! location = "/usr/lib/jvm/java-8"
//! default = true
//!
//! [discovery]
//! runtime_dirs = ["/usr/lib/jvm"]
//!
//! [user_libraries.junit]
//! files = ["libs/junit-4.13.jar", "libs/hamcrest-*.jar"]
//!
//! [target_platforms.galileo]
//! locations = ["/opt/eclipse-3.5"]
//!
//! [resolve]
//! workspace_relative = true
//!
//! [arguments]
//! "target.platform" = "galileo"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file name inside a config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration directory name.
pub const CONFIG_DIR: &str = ".jdtpath";

/// jdtpath configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicitly declared runtimes
    #[serde(rename = "runtime")]
    pub runtimes: Vec<RuntimeConfig>,

    /// Runtime autodiscovery
    pub discovery: DiscoveryConfig,

    /// User library definitions by name
    pub user_libraries: BTreeMap<String, UserLibraryConfig>,

    /// Target platform definitions by name
    pub target_platforms: BTreeMap<String, TargetPlatformConfig>,

    /// Default resolve options
    pub resolve: ResolveConfig,

    /// Default container arguments
    pub arguments: BTreeMap<String, String>,
}

/// A `[[runtime]]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub id: String,

    /// Runtime home directory
    pub location: PathBuf,

    #[serde(default)]
    pub ext_dirs: Vec<PathBuf>,

    #[serde(default)]
    pub endorsed_dirs: Vec<PathBuf>,

    /// Explicit library files (glob patterns allowed), relative to `location`.
    /// When present, directory layout discovery is skipped.
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Mark as the default runtime
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directories whose subdirectories are checked for Java homes
    pub runtime_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLibraryConfig {
    /// Library files (glob patterns allowed)
    pub files: Vec<String>,

    /// Put the library on the boot classpath
    pub system: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetPlatformConfig {
    pub locations: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Reject library entries whose file does not exist
    pub strict: bool,

    /// Emit workspace-relative paths
    pub workspace_relative: bool,

    /// Compute runtime classpaths by default
    pub runtime: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration, or defaults when the file does not exist.
    ///
    /// Unlike a missing file, a malformed file is an error: silently
    /// dropping runtimes would change resolved classpaths.
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        for runtime in other.runtimes {
            match self.runtimes.iter_mut().find(|r| r.id == runtime.id) {
                Some(existing) => *existing = runtime,
                None => self.runtimes.push(runtime),
            }
        }

        for dir in other.discovery.runtime_dirs {
            if !self.discovery.runtime_dirs.contains(&dir) {
                self.discovery.runtime_dirs.push(dir);
            }
        }

        self.user_libraries.extend(other.user_libraries);
        self.target_platforms.extend(other.target_platforms);
        self.arguments.extend(other.arguments);

        if other.resolve.strict {
            self.resolve.strict = true;
        }
        if other.resolve.workspace_relative {
            self.resolve.workspace_relative = true;
        }
        if other.resolve.runtime {
            self.resolve.runtime = true;
        }
    }

    /// Ids of runtimes marked as default, in declaration order.
    pub fn default_runtimes(&self) -> impl Iterator<Item = &str> {
        self.runtimes
            .iter()
            .filter(|r| r.default)
            .map(|r| r.id.as_str())
    }
}

/// Load merged configuration from global and workspace locations.
///
/// Order of precedence (highest to lowest):
/// 1. Workspace config (.jdtpath/config.toml)
/// 2. Global config (~/.jdtpath/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, workspace_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_if_exists(global_path)?);
    }
    config.merge(Config::load_if_exists(workspace_path)?);

    Ok(config)
}

/// Get the global config directory (~/.jdtpath).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR))
}

/// Get the global config path (~/.jdtpath/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the workspace config path (.jdtpath/config.toml).
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
[[runtime]]
id = "jdk8"
location = "/usr/lib/jvm/java-8"
files = ["jre/lib/rt.jar"]
default = true

[[runtime]]
id = "jdk11"
location = "/usr/lib/jvm/java-11"

[user_libraries.junit]
files = ["libs/junit.jar"]

[target_platforms.galileo]
locations = ["/opt/eclipse"]

[resolve]
strict = true

[arguments]
"target.platform" = "galileo"
"#,
        )
        .unwrap();

        assert_eq!(config.runtimes.len(), 2);
        assert_eq!(config.runtimes[0].files.as_deref(), Some(&["jre/lib/rt.jar".to_string()][..]));
        assert!(config.runtimes[1].files.is_none());
        assert_eq!(config.default_runtimes().collect::<Vec<_>>(), vec!["jdk8"]);
        assert!(config.resolve.strict);
        assert!(!config.resolve.workspace_relative);
        assert_eq!(config.arguments.get("target.platform").unwrap(), "galileo");
        assert!(!config.user_libraries["junit"].system);
    }

    #[test]
    fn test_workspace_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let workspace = tmp.path().join("workspace.toml");

        std::fs::write(
            &global,
            r#"
[[runtime]]
id = "jdk8"
location = "/global/jdk8"

[arguments]
"target.platform" = "global"
"#,
        )
        .unwrap();
        std::fs::write(
            &workspace,
            r#"
[[runtime]]
id = "jdk8"
location = "/local/jdk8"
default = true

[resolve]
workspace_relative = true
"#,
        )
        .unwrap();

        let config = load_config(Some(&global), &workspace).unwrap();
        assert_eq!(config.runtimes.len(), 1);
        assert_eq!(config.runtimes[0].location, PathBuf::from("/local/jdk8"));
        assert!(config.runtimes[0].default);
        assert!(config.resolve.workspace_relative);
        assert_eq!(config.arguments["target.platform"], "global");
    }

    #[test]
    fn test_missing_files_use_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, &tmp.path().join("nope.toml")).unwrap();
        assert!(config.runtimes.is_empty());
        assert!(!config.resolve.strict);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[[runtime]]\nlocation = 3\n").unwrap();
        assert!(Config::load_if_exists(&path).is_err());
    }
}
