//! Path expressions over configuration trees.
//!
//! A path such as `servers[0].port` is parsed into a [`SegmentChain`]: the
//! root segment followed by one segment per property or index fragment.
//! The chain can then be resolved against a tree (a pure read) or used to
//! materialise the terminal segment's missing ancestors before a write.
//!
//! Two key policies are available. [`KeyPolicy::Exact`] compares mapping
//! keys byte for byte and supports index fragments.
//! [`KeyPolicy::CaseInsensitive`] compares keys ignoring case, synthesises an
//! upper-cased key when nothing matches, and rejects index fragments.
//!
//! ```rust
//! use config_tree::{KeyPolicy, Node, SegmentChain};
//!
//! # fn main() -> config_tree::ConfigResult<()> {
//! let mut root = Node::default();
//! SegmentChain::parse("server.ports[0]", KeyPolicy::Exact)?
//!     .fill_missing_parents(&mut root)?
//!     .write_child_value(Some("8080"))?;
//!
//! let chain = SegmentChain::parse("SERVER.ports", KeyPolicy::CaseInsensitive)?;
//! let ports = chain.resolve(&root)?.terminal();
//! assert_eq!(ports.map(|node| node.is_sequence()), Some(true));
//! # Ok(())
//! # }
//! ```

mod chain;
mod segment;
mod write;

pub use chain::{Resolution, SegmentChain};
pub use segment::{Fragment, IndexStep, Segment};
pub use write::ParentSlot;

use crate::{ConfigResult, Node};

/// How property fragments are matched against mapping keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyPolicy {
    /// Keys must match exactly.
    #[default]
    Exact,
    /// Keys match ignoring case; index fragments are unsupported.
    CaseInsensitive,
}

/// Resolve `path` against `root` and return the terminal node, if present.
///
/// # Errors
///
/// Propagates parse failures and [`ConfigError::TypeMismatch`] raised when a
/// present node has the wrong shape for the next fragment.
///
/// [`ConfigError::TypeMismatch`]: crate::ConfigError::TypeMismatch
pub fn lookup<'n>(
    root: &'n Node,
    path: &str,
    policy: KeyPolicy,
) -> ConfigResult<Option<&'n Node>> {
    Ok(SegmentChain::parse(path, policy)?.resolve(root)?.terminal())
}

/// Write `value` at `path`, creating missing ancestors. An absent value
/// removes the entry.
///
/// # Errors
///
/// Returns [`ConfigError::NoParent`] for the empty path, plus any parse,
/// shape or index failure met along the way.
///
/// [`ConfigError::NoParent`]: crate::ConfigError::NoParent
pub fn assign(
    root: &mut Node,
    path: &str,
    value: Option<&str>,
    policy: KeyPolicy,
) -> ConfigResult<()> {
    SegmentChain::parse(path, policy)?
        .fill_missing_parents(root)?
        .write_child_value(value)
}
