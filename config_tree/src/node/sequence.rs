//! Ordered sequence nodes.

use std::sync::Arc;

use crate::{ConfigError, ConfigResult};

use super::Node;

/// Ordered, index-addressable list of child nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    items: Vec<Node>,
}

impl Sequence {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the sequence has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    /// Mutable form of [`Sequence::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.items.get_mut(index)
    }

    /// Replace the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfBounds`] unless `index < len()`.
    pub fn set(&mut self, index: usize, value: Node) -> ConfigResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Append `value`.
    pub fn push(&mut self, value: Node) {
        self.items.push(value);
    }

    /// Remove and return the element at `index`, shifting later elements
    /// down. Returns `None` when `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }
}

fn out_of_bounds(index: usize, len: usize) -> Arc<ConfigError> {
    ConfigError::out_of_bounds("", i64::try_from(index).unwrap_or(i64::MAX), Some(len))
}

impl IntoIterator for Sequence {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Node> for Sequence {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Node>> for Sequence {
    fn from(items: Vec<Node>) -> Self {
        Self { items }
    }
}
