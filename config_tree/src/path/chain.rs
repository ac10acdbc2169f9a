//! Parsed segment chains and read-only resolution.

use std::iter;

use crate::{ConfigError, ConfigResult, Mapping, Node, NodeKind};

use super::KeyPolicy;
use super::segment::{self, Fragment, IndexStep, Segment};

/// Parsed path: the root segment followed by one segment per fragment.
///
/// Parent links are indices into the chain. The chain holds no node
/// references, so it can be resolved against any number of trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentChain {
    path: String,
    policy: KeyPolicy,
    root: Segment,
    steps: Vec<Segment>,
}

/// Nodes found for each segment of a chain, root first.
#[derive(Clone, Debug)]
pub struct Resolution<'n> {
    nodes: Vec<Option<&'n Node>>,
}

impl<'n> Resolution<'n> {
    /// Node found for the segment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'n Node> {
        self.nodes.get(index).copied().flatten()
    }

    /// Node found for the terminal segment.
    #[must_use]
    pub fn terminal(&self) -> Option<&'n Node> {
        self.nodes.last().copied().flatten()
    }
}

impl SegmentChain {
    /// Parse `path` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedPath`] for grammar violations,
    /// [`ConfigError::OutOfBounds`] for negative indices and
    /// [`ConfigError::Unsupported`] for index fragments under
    /// [`KeyPolicy::CaseInsensitive`].
    pub fn parse(path: &str, policy: KeyPolicy) -> ConfigResult<Self> {
        Ok(Self {
            path: path.to_owned(),
            policy,
            root: Segment::root(path),
            steps: segment::parse(path, policy)?,
        })
    }

    /// Full path expression.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Lookup policy the chain was parsed with.
    #[must_use]
    pub const fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// All segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        iter::once(&self.root).chain(&self.steps)
    }

    /// Segments after the root.
    pub(super) fn steps(&self) -> &[Segment] {
        &self.steps
    }

    /// Last segment; the root when the path is empty.
    #[must_use]
    pub fn terminal(&self) -> &Segment {
        self.steps.last().unwrap_or(&self.root)
    }

    /// Walk `root` without modifying it.
    ///
    /// A missing key or index yields an absent node, and absence propagates
    /// to every later segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when a present node cannot be
    /// descended by the next fragment.
    pub fn resolve<'n>(&self, root: &'n Node) -> ConfigResult<Resolution<'n>> {
        let mut nodes = Vec::with_capacity(self.steps.len() + 1);
        let mut current = Some(root);
        let mut parent_path = self.root.path();
        nodes.push(current);
        for step in &self.steps {
            current = match (current, step.fragment()) {
                (Some(node), Some(fragment)) => self.read_child(node, fragment, parent_path)?,
                _ => None,
            };
            nodes.push(current);
            parent_path = step.path();
        }
        Ok(Resolution { nodes })
    }

    fn read_child<'n>(
        &self,
        node: &'n Node,
        fragment: &Fragment,
        at: &str,
    ) -> ConfigResult<Option<&'n Node>> {
        match fragment {
            Fragment::Property(name) => {
                let map = node.as_mapping().map_err(|e| e.at_path(at))?;
                Ok(self.read_key(map, name))
            }
            Fragment::Index(IndexStep::At(index)) => {
                let seq = node.as_sequence().map_err(|e| e.at_path(at))?;
                Ok(seq.get(*index))
            }
            Fragment::Index(IndexStep::PastEnd) => {
                if node.is_sequence() {
                    Ok(None)
                } else {
                    Err(ConfigError::type_mismatch(
                        at,
                        NodeKind::Sequence,
                        node.kind(),
                    ))
                }
            }
        }
    }

    fn read_key<'n>(&self, map: &'n Mapping, name: &str) -> Option<&'n Node> {
        match self.policy {
            KeyPolicy::Exact => map.get(name),
            KeyPolicy::CaseInsensitive => map.get_ignore_case(name),
        }
    }

    /// Key a write through `name` lands on. Case-insensitive writes reuse
    /// a matching key and otherwise synthesise the upper-cased name.
    pub(super) fn write_key(&self, map: &Mapping, name: &str) -> String {
        match self.policy {
            KeyPolicy::Exact => name.to_owned(),
            KeyPolicy::CaseInsensitive => map
                .find_key_ignore_case(name)
                .map_or_else(|| name.to_uppercase(), str::to_owned),
        }
    }
}
