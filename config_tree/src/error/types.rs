//! Primary error enum for tree navigation, merging and loading.

use thiserror::Error;

use crate::NodeKind;

/// Boxed error produced by an I/O layer or a format parser.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while assembling or reading a configuration tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A path expression could not be parsed.
    #[error("malformed path '{path}': {reason}")]
    MalformedPath {
        /// Full path expression as supplied.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A path step expected one node shape and found another.
    #[error("expected a {expected} at '{path}', found a {found}")]
    TypeMismatch {
        /// Path prefix at which the mismatch was found.
        path: String,
        /// Shape the operation required.
        expected: NodeKind,
        /// Shape actually present.
        found: NodeKind,
    },

    /// A sequence index lies outside the writable or readable range.
    #[error("index {index} is out of bounds at '{path}'")]
    OutOfBounds {
        /// Path prefix naming the index step.
        path: String,
        /// Requested index.
        index: i64,
        /// Length of the sequence at the time of the request; `None` when
        /// the index was rejected while parsing.
        len: Option<usize>,
    },

    /// An override addressed the root, which has no parent to write into.
    #[error("no parent node for '{path}'")]
    NoParent {
        /// Path that resolved to the root.
        path: String,
    },

    /// Two nodes of different shapes met during a merge.
    #[error("cannot merge a {incoming} into a {target} at '{path}'")]
    IncompatibleMerge {
        /// Key path at which the merge failed; empty for the root.
        path: String,
        /// Shape already present in the target tree.
        target: NodeKind,
        /// Shape arriving from the higher-precedence tree.
        incoming: NodeKind,
    },

    /// A configuration source could not be read.
    #[error("configuration source '{source_name}' is unavailable: {cause}")]
    SourceUnavailable {
        /// Display name of the source.
        source_name: String,
        /// Underlying I/O failure.
        #[source]
        cause: BoxedCause,
    },

    /// A configuration source was read but its content was not a valid
    /// document.
    #[error("configuration source '{source_name}' could not be parsed: {cause}")]
    SourceUnparseable {
        /// Display name of the source.
        source_name: String,
        /// Underlying parser failure.
        #[source]
        cause: BoxedCause,
    },

    /// The requested operation is not available for the path policy in use.
    #[error("unsupported operation at '{path}': {operation}")]
    Unsupported {
        /// Path being processed.
        path: String,
        /// Description of the rejected operation.
        operation: String,
    },

    /// A subtree could not be mapped onto the requested type.
    #[error("failed to map configuration at '{path}': {source}")]
    Mapping {
        /// Path of the subtree being mapped.
        path: String,
        /// Underlying extraction failure.
        #[source]
        source: Box<figment::Error>,
    },

    /// A `path=value` property assignment could not be understood.
    #[error("invalid property assignment '{assignment}': {reason}")]
    InvalidProperty {
        /// Assignment text as supplied.
        assignment: String,
        /// What was wrong with it.
        reason: String,
    },
}
