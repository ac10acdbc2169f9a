//! Override values applied to a merged configuration tree.
//!
//! An [`Override`] maps a root tree to a new root tree. Overrides are
//! collected in an [`OverrideChain`] and applied left to right, so later
//! overrides take precedence. [`OverrideComposer`] builds the chain from
//! command-line facts, decorator registrations and flat properties.

mod composer;

pub use composer::OverrideComposer;

use std::collections::BTreeMap;

use crate::path::{self, KeyPolicy};
use crate::{ConfigResult, Node, SourceLocation, SourceParser, merge_nodes};

/// One transformation of the root tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Override {
    /// Returns the tree unchanged.
    Identity,
    /// Writes each value at its path, creating missing parents. An absent
    /// value removes the entry.
    Properties(BTreeMap<String, Option<String>>),
    /// Parses a resource and merges it over the tree.
    Resource(SourceLocation),
}

impl Override {
    /// Override writing a single path.
    #[must_use]
    pub fn property(path: impl Into<String>, value: Option<String>) -> Self {
        Self::Properties(BTreeMap::from([(path.into(), value)]))
    }

    /// Apply the override to `root`, reading resources with `parser`.
    ///
    /// # Errors
    ///
    /// Propagates path, shape and index failures from property writes, and
    /// parse or merge failures from resources.
    pub fn apply(&self, root: Node, parser: &dyn SourceParser) -> ConfigResult<Node> {
        match self {
            Self::Identity => Ok(root),
            Self::Properties(values) => {
                let mut tree = root;
                for (target, value) in values {
                    tracing::trace!(path = %target, value = ?value, "writing property override");
                    path::assign(&mut tree, target, value.as_deref(), KeyPolicy::Exact)?;
                }
                Ok(tree)
            }
            Self::Resource(location) => match parser.parse(location)? {
                Some(tree) => merge_nodes(root, tree),
                None => Ok(root),
            },
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Properties(_) => "properties",
            Self::Resource(_) => "resource",
        }
    }
}

/// Ordered list of overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideChain {
    overrides: Vec<Override>,
}

impl Default for OverrideChain {
    fn default() -> Self {
        Self::new()
    }
}

impl OverrideChain {
    /// Chain holding only [`Override::Identity`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            overrides: vec![Override::Identity],
        }
    }

    /// Append `next`; it applies after everything already in the chain.
    pub fn push(&mut self, next: Override) {
        self.overrides.push(next);
    }

    /// Chaining form of [`OverrideChain::push`].
    #[must_use]
    pub fn then(mut self, next: Override) -> Self {
        self.push(next);
        self
    }

    /// Overrides in application order.
    #[must_use]
    pub fn as_slice(&self) -> &[Override] {
        &self.overrides
    }

    /// Fold `root` through every override in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failing override's error.
    pub fn apply(&self, root: Node, parser: &dyn SourceParser) -> ConfigResult<Node> {
        self.overrides.iter().try_fold(root, |tree, next| {
            tracing::debug!(kind = next.label(), "applying override");
            next.apply(tree, parser)
        })
    }
}

impl FromIterator<Override> for OverrideChain {
    /// Chain starting with [`Override::Identity`] followed by `iter`.
    fn from_iter<I: IntoIterator<Item = Override>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.overrides.extend(iter);
        chain
    }
}

#[cfg(test)]
mod tests;
