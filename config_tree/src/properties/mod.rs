//! Flat `path = value` property overrides.
//!
//! Properties are the highest-precedence layer. They can be built in code,
//! parsed from `path=value` assignments (as passed on a command line), or
//! collected from prefixed environment variables.

use std::collections::BTreeMap;
use std::collections::btree_map;

use figment::providers::Env;

use crate::{ConfigError, ConfigResult};

/// Mapping from path expression to scalar value.
///
/// Entries apply in sorted path order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyOverrides {
    entries: BTreeMap<String, String>,
}

impl PropertyOverrides {
    /// Create an empty set of overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set `path` to `value`, returning any previous value.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(path.into(), value.into())
    }

    /// Chaining form of [`PropertyOverrides::insert`].
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(path, value);
        self
    }

    /// Value stored for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, value)` pairs in path order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Parse `path=value` assignments.
    ///
    /// The value is everything after the first `=` and may be empty.
    ///
    /// ```rust
    /// use config_tree::PropertyOverrides;
    ///
    /// # fn main() -> config_tree::ConfigResult<()> {
    /// let props = PropertyOverrides::from_assignments(["server.port=5050", "name=a=b"])?;
    /// assert_eq!(props.get("server.port"), Some("5050"));
    /// assert_eq!(props.get("name"), Some("a=b"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProperty`] for an assignment without
    /// `=` or with an empty path.
    pub fn from_assignments<I, S>(assignments: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        assignments
            .into_iter()
            .map(|assignment| parse_assignment(assignment.as_ref()))
            .collect()
    }

    /// Collect overrides from environment variables starting with `prefix`.
    ///
    /// Names are lower-cased after the prefix is removed and `__` separates
    /// path levels, so `APP_SERVER__PORT=5050` with prefix `APP_` becomes
    /// `server.port = 5050`.
    #[must_use]
    pub fn from_env(prefix: &str) -> Self {
        let entries: BTreeMap<String, String> = Env::prefixed(prefix)
            .split("__")
            .iter()
            .map(|(key, value)| (key.as_str().to_owned(), value))
            .collect();
        tracing::debug!(prefix, count = entries.len(), "collected environment overrides");
        Self { entries }
    }

    /// Add every entry of `other`, replacing existing paths.
    pub fn extend_from(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Entries as the optional-valued map carried by
    /// [`Override::Properties`](crate::Override::Properties).
    #[must_use]
    pub fn into_override_map(self) -> BTreeMap<String, Option<String>> {
        self.entries
            .into_iter()
            .map(|(path, value)| (path, Some(value)))
            .collect()
    }
}

fn parse_assignment(assignment: &str) -> ConfigResult<(String, String)> {
    let Some((raw_path, value)) = assignment.split_once('=') else {
        return Err(ConfigError::invalid_property(assignment, "expected 'path=value'"));
    };
    let path = raw_path.trim();
    if path.is_empty() {
        return Err(ConfigError::invalid_property(assignment, "empty path"));
    }
    Ok((path.to_owned(), value.to_owned()))
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, value)| (path.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertyOverrides {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests;
