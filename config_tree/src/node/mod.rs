//! Tagged configuration tree values.
//!
//! A [`Node`] is one of three shapes: a [`Node::Scalar`] string, an ordered
//! [`Sequence`] or a string-keyed [`Mapping`]. The shape of a node never
//! changes once built; asking a scalar for its mapping is reported as
//! [`ConfigError::TypeMismatch`](crate::ConfigError::TypeMismatch) rather than
//! coerced.
//!
//! Every mutator works in place. Nothing in this crate clones a tree behind
//! the caller's back, so callers that need to keep an original must clone it
//! before handing it to the merger or an override.

mod convert;
mod mapping;
mod sequence;

pub use mapping::Mapping;
pub use sequence::Sequence;

use std::fmt;

use crate::{ConfigError, ConfigResult};

/// A configuration tree value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Leaf string value.
    Scalar(String),
    /// Ordered list of child nodes.
    Sequence(Sequence),
    /// String-keyed child nodes.
    Mapping(Mapping),
}

/// Shape of a [`Node`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// See [`Node::Scalar`].
    Scalar,
    /// See [`Node::Sequence`].
    Sequence,
    /// See [`Node::Mapping`].
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl Node {
    /// Build a scalar node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_tree::Node;
    ///
    /// let port = Node::scalar("8080");
    /// assert_eq!(port.as_scalar().ok(), Some("8080"));
    /// ```
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Build an empty mapping node.
    #[must_use]
    pub const fn empty_mapping() -> Self {
        Self::Mapping(Mapping::new())
    }

    /// Build an empty sequence node.
    #[must_use]
    pub const fn empty_sequence() -> Self {
        Self::Sequence(Sequence::new())
    }

    /// Returns the shape of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar(_) => NodeKind::Scalar,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// Returns `true` for [`Node::Scalar`].
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns `true` for [`Node::Sequence`].
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` for [`Node::Mapping`].
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Borrow the scalar text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the node is not a scalar.
    pub fn as_scalar(&self) -> ConfigResult<&str> {
        match self {
            Self::Scalar(value) => Ok(value),
            other => Err(other.mismatch(NodeKind::Scalar)),
        }
    }

    /// Borrow the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the node is not a sequence.
    pub fn as_sequence(&self) -> ConfigResult<&Sequence> {
        match self {
            Self::Sequence(seq) => Ok(seq),
            other => Err(other.mismatch(NodeKind::Sequence)),
        }
    }

    /// Mutably borrow the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the node is not a sequence.
    pub fn as_sequence_mut(&mut self) -> ConfigResult<&mut Sequence> {
        match self {
            Self::Sequence(seq) => Ok(seq),
            other => Err(other.mismatch(NodeKind::Sequence)),
        }
    }

    /// Borrow the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the node is not a mapping.
    pub fn as_mapping(&self) -> ConfigResult<&Mapping> {
        match self {
            Self::Mapping(map) => Ok(map),
            other => Err(other.mismatch(NodeKind::Mapping)),
        }
    }

    /// Mutably borrow the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the node is not a mapping.
    pub fn as_mapping_mut(&mut self) -> ConfigResult<&mut Mapping> {
        match self {
            Self::Mapping(map) => Ok(map),
            other => Err(other.mismatch(NodeKind::Mapping)),
        }
    }

    fn mismatch(&self, expected: NodeKind) -> std::sync::Arc<ConfigError> {
        ConfigError::type_mismatch("", expected, self.kind())
    }
}

impl Default for Node {
    /// An empty mapping: the tree of a configuration with nothing in it.
    fn default() -> Self {
        Self::empty_mapping()
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Sequence> for Node {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}
