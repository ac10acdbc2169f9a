//! Deterministic two-tree merge.
//!
//! The left (target) tree is updated in place by the right (source) tree:
//! scalars and sequences from the source replace what the target holds,
//! mappings merge key by key, and keys only the target knows are kept.
//! Both trees are taken by value, so a source handed to the merger cannot be
//! observed afterwards.

use crate::{ConfigError, ConfigResult, Node};

/// Merge `source` over `target`, where either side may be absent.
///
/// An absent side returns the other unchanged.
///
/// # Examples
///
/// ```rust
/// use config_tree::{Node, merge};
/// use serde_json::json;
///
/// # fn main() -> config_tree::ConfigResult<()> {
/// let target = Node::from(json!({"port": 8080, "host": "localhost"}));
/// let source = Node::from(json!({"port": 9090}));
/// let merged = merge(Some(target), Some(source))?;
/// assert_eq!(merged, Some(Node::from(json!({"port": 9090, "host": "localhost"}))));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::IncompatibleMerge`] when the two trees hold nodes
/// of different shapes at the same key path.
pub fn merge(target: Option<Node>, source: Option<Node>) -> ConfigResult<Option<Node>> {
    match (target, source) {
        (None, other) | (other, None) => Ok(other),
        (Some(existing), Some(incoming)) => merge_nodes(existing, incoming).map(Some),
    }
}

/// Merge two present trees. See [`merge`].
///
/// # Errors
///
/// Returns [`ConfigError::IncompatibleMerge`] when the two trees hold nodes
/// of different shapes at the same key path.
pub fn merge_nodes(target: Node, source: Node) -> ConfigResult<Node> {
    merge_at(target, source, "")
}

fn merge_at(target: Node, source: Node, path: &str) -> ConfigResult<Node> {
    match (target, source) {
        (Node::Scalar(_), incoming @ Node::Scalar(_))
        | (Node::Sequence(_), incoming @ Node::Sequence(_)) => Ok(incoming),
        (Node::Mapping(mut into), Node::Mapping(from)) => {
            for (key, incoming) in from {
                let merged = match into.remove(&key) {
                    Some(existing) => merge_at(existing, incoming, &child_path(path, &key))?,
                    None => incoming,
                };
                into.insert(key, merged);
            }
            Ok(Node::Mapping(into))
        }
        (existing, incoming) => Err(ConfigError::incompatible_merge(
            path,
            existing.kind(),
            incoming.kind(),
        )),
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}
