//! Caller-supplied container arguments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named arguments that parameterize container resolution.
///
/// Arguments come from the caller, never from project metadata. Each key
/// holds at most one value; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerArguments {
    values: BTreeMap<String, String>,
}

impl ContainerArguments {
    pub fn new() -> Self {
        ContainerArguments::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Look up an argument. Absent keys mean "no argument".
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fill in keys from `defaults` that are not already set.
    pub fn merge_defaults(&mut self, defaults: &ContainerArguments) {
        for (key, value) in defaults.iter() {
            self.values
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }
    }

    /// Parse a `key=value` pair as given on the command line.
    pub fn parse_pair(s: &str) -> Result<(String, String), String> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("invalid argument `{}`: expected KEY=VALUE", s))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("invalid argument `{}`: empty key", s));
        }
        Ok((key.to_string(), value.trim().to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContainerArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = ContainerArguments::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}
