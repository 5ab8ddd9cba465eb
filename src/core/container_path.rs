//! Container path identifiers.
//!
//! A container path has the shape `prefix[/remainder]`. The prefix selects
//! the resolver; the remainder is interpreted by that resolver (a runtime id,
//! a user library name, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix of the Java runtime container.
pub const JRE_CONTAINER: &str = "org.eclipse.jdt.launching.JRE_CONTAINER";

/// Prefix of user library containers.
pub const USER_LIBRARY_CONTAINER: &str = "org.eclipse.jdt.USER_LIBRARY";

/// Prefix of the plug-in dependencies container computed from a target platform.
pub const REQUIRED_PLUGINS_CONTAINER: &str = "org.eclipse.pde.core.requiredPlugins";

/// A structured container identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerPath {
    raw: String,
}

impl ContainerPath {
    /// Create a container path, trimming surrounding whitespace and slashes.
    pub fn new(raw: impl AsRef<str>) -> Self {
        ContainerPath {
            raw: raw.as_ref().trim().trim_matches('/').to_string(),
        }
    }

    /// The full path string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The first segment.
    pub fn prefix(&self) -> &str {
        self.raw.split('/').next().unwrap_or("")
    }

    /// Everything after the first segment, if anything.
    pub fn remainder(&self) -> Option<&str> {
        self.raw
            .split_once('/')
            .map(|(_, rest)| rest)
            .filter(|rest| !rest.is_empty())
    }

    /// All non-empty segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('/').filter(|s| !s.is_empty())
    }

    /// The last segment of the remainder, if there is a remainder.
    pub fn last_segment(&self) -> Option<&str> {
        self.remainder().and_then(|rest| rest.rsplit('/').next())
    }

    /// Check whether `prefix` matches this path on a segment boundary.
    ///
    /// `a/b` matches `a/b` and `a/b/c`, but not `a/bc`.
    pub fn starts_with_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_matches('/');
        if prefix.is_empty() {
            return false;
        }
        match self.raw.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ContainerPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ContainerPath::new(s))
    }
}

impl From<&str> for ContainerPath {
    fn from(s: &str) -> Self {
        ContainerPath::new(s)
    }
}

impl Serialize for ContainerPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ContainerPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ContainerPath::new(s))
    }
}
