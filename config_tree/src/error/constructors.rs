//! Constructors returning shared [`ConfigError`] values.
//!
//! Every fallible operation in the crate returns
//! [`ConfigResult`](crate::ConfigResult), so the constructors hand back an
//! [`Arc`] directly.

use std::sync::Arc;

use crate::NodeKind;

use super::{BoxedCause, ConfigError};

impl ConfigError {
    /// Build a [`ConfigError::MalformedPath`].
    #[must_use]
    pub fn malformed_path(path: &str, reason: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::MalformedPath {
            path: path.to_owned(),
            reason: reason.into(),
        })
    }

    /// Build a [`ConfigError::TypeMismatch`].
    #[must_use]
    pub fn type_mismatch(path: &str, expected: NodeKind, found: NodeKind) -> Arc<Self> {
        Arc::new(Self::TypeMismatch {
            path: path.to_owned(),
            expected,
            found,
        })
    }

    /// Build a [`ConfigError::OutOfBounds`].
    #[must_use]
    pub fn out_of_bounds(path: &str, index: i64, len: Option<usize>) -> Arc<Self> {
        Arc::new(Self::OutOfBounds {
            path: path.to_owned(),
            index,
            len,
        })
    }

    /// Build a [`ConfigError::NoParent`].
    #[must_use]
    pub fn no_parent(path: &str) -> Arc<Self> {
        Arc::new(Self::NoParent {
            path: path.to_owned(),
        })
    }

    /// Build a [`ConfigError::IncompatibleMerge`].
    #[must_use]
    pub fn incompatible_merge(path: &str, target: NodeKind, incoming: NodeKind) -> Arc<Self> {
        Arc::new(Self::IncompatibleMerge {
            path: path.to_owned(),
            target,
            incoming,
        })
    }

    /// Build a [`ConfigError::SourceUnavailable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use config_tree::ConfigError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let err = ConfigError::source_unavailable("app.toml", io);
    /// assert!(matches!(&*err, ConfigError::SourceUnavailable { .. }));
    /// ```
    #[must_use]
    pub fn source_unavailable(source_name: &str, cause: impl Into<BoxedCause>) -> Arc<Self> {
        Arc::new(Self::SourceUnavailable {
            source_name: source_name.to_owned(),
            cause: cause.into(),
        })
    }

    /// Build a [`ConfigError::SourceUnparseable`].
    #[must_use]
    pub fn source_unparseable(source_name: &str, cause: impl Into<BoxedCause>) -> Arc<Self> {
        Arc::new(Self::SourceUnparseable {
            source_name: source_name.to_owned(),
            cause: cause.into(),
        })
    }

    /// Build a [`ConfigError::Unsupported`].
    #[must_use]
    pub fn unsupported(path: &str, operation: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::Unsupported {
            path: path.to_owned(),
            operation: operation.into(),
        })
    }

    /// Build a [`ConfigError::Mapping`] from a [`figment::Error`].
    #[must_use]
    pub fn mapping(path: &str, source: figment::Error) -> Arc<Self> {
        Arc::new(Self::Mapping {
            path: path.to_owned(),
            source: Box::new(source),
        })
    }

    /// Build a [`ConfigError::InvalidProperty`].
    #[must_use]
    pub fn invalid_property(assignment: &str, reason: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::InvalidProperty {
            assignment: assignment.to_owned(),
            reason: reason.into(),
        })
    }

    /// Returns the same error with its path replaced by `path`.
    ///
    /// Errors raised by node accessors do not know where in the tree they
    /// happened; navigators use this to attach the prefix they were walking.
    /// Variants without a path are returned unchanged.
    #[must_use]
    pub fn at_path(self: Arc<Self>, path: &str) -> Arc<Self> {
        match Arc::try_unwrap(self) {
            Ok(mut owned) => {
                if let Some(slot) = owned.path_mut() {
                    path.clone_into(slot);
                }
                Arc::new(owned)
            }
            Err(shared) => shared,
        }
    }

    const fn path_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::MalformedPath { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::OutOfBounds { path, .. }
            | Self::NoParent { path }
            | Self::IncompatibleMerge { path, .. }
            | Self::Unsupported { path, .. }
            | Self::Mapping { path, .. } => Some(path),
            Self::SourceUnavailable { .. }
            | Self::SourceUnparseable { .. }
            | Self::InvalidProperty { .. } => None,
        }
    }
}
