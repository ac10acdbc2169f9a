//! String-keyed mapping nodes.

use std::collections::BTreeMap;
use std::collections::btree_map;

use super::Node;

/// Mapping from string keys to child nodes.
///
/// Keys iterate in sorted order, so iteration is stable for a given
/// instance. Insertion order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: BTreeMap<String, Node>,
}

impl Mapping {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key` by exact comparison.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Mutable form of [`Mapping::get`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Returns `true` when `key` is present (exact comparison).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace the value stored at `key`, returning the previous
    /// value.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        self.entries.insert(key.into(), value)
    }

    /// Value stored at `key`, inserting `default()` first when absent.
    pub fn get_or_insert_with(
        &mut self,
        key: impl Into<String>,
        default: impl FnOnce() -> Node,
    ) -> &mut Node {
        self.entries.entry(key.into()).or_insert_with(default)
    }

    /// Remove and return the value stored at `key`.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.entries.remove(key)
    }

    /// Find the stored key equal to `key` ignoring case.
    ///
    /// An exact match wins. Otherwise keys are compared character by
    /// character after Unicode lower-casing, and the first match in key
    /// order is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_tree::{Mapping, Node};
    ///
    /// let mut mapping = Mapping::new();
    /// mapping.insert("Server", Node::empty_mapping());
    /// mapping.insert("Café", Node::empty_mapping());
    /// assert_eq!(mapping.find_key_ignore_case("SERVER"), Some("Server"));
    /// assert_eq!(mapping.find_key_ignore_case("CAFÉ"), Some("Café"));
    /// assert_eq!(mapping.find_key_ignore_case("client"), None);
    /// ```
    #[must_use]
    pub fn find_key_ignore_case(&self, key: &str) -> Option<&str> {
        self.entries
            .get_key_value(key)
            .map(|(stored, _)| stored)
            .or_else(|| {
                self.entries
                    .keys()
                    .find(|candidate| eq_ignore_case(candidate, key))
            })
            .map(String::as_str)
    }

    /// Look up `key` ignoring case. See [`Mapping::find_key_ignore_case`].
    #[must_use]
    pub fn get_ignore_case(&self, key: &str) -> Option<&Node> {
        self.find_key_ignore_case(key)
            .and_then(|stored| self.entries.get(stored))
    }

    /// Iterate over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over key/value pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

impl IntoIterator for Mapping {
    type Item = (String, Node);
    type IntoIter = btree_map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
