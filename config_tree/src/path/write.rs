//! Materialising ancestors and writing through a segment chain.

use std::cmp::Ordering;

use crate::{ConfigError, ConfigResult, Node};

use super::SegmentChain;
use super::segment::{Fragment, Segment};

/// Mutable handle on the parent of a chain's terminal segment.
///
/// Obtained from [`SegmentChain::fill_missing_parents`]; consumed by a
/// single write.
#[derive(Debug)]
pub struct ParentSlot<'n, 'c> {
    chain: &'c SegmentChain,
    container: &'n mut Node,
    fragment: &'c Fragment,
    parent_path: &'c str,
}

impl SegmentChain {
    /// Create every missing ancestor of the terminal segment and return its
    /// parent.
    ///
    /// A missing ancestor becomes a mapping when the fragment below it is a
    /// property and a sequence when it is an index. Existing nodes are
    /// reused as they are.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoParent`] when the path is empty.
    /// - [`ConfigError::TypeMismatch`] when an existing ancestor has the wrong
    ///   shape for the fragment below it.
    /// - [`ConfigError::OutOfBounds`] when an index ancestor lies beyond the
    ///   end of its sequence.
    pub fn fill_missing_parents<'n>(
        &self,
        root: &'n mut Node,
    ) -> ConfigResult<ParentSlot<'n, '_>> {
        let Some((terminal, ancestors)) = self.steps().split_last() else {
            return Err(ConfigError::no_parent(self.path()));
        };
        let Some(fragment) = terminal.fragment() else {
            return Err(ConfigError::no_parent(self.path()));
        };
        let mut current = root;
        let mut parent_path = "";
        for (step, below) in ancestors.iter().zip(self.steps().iter().skip(1)) {
            current = self.descend_or_create(current, step, parent_path, below)?;
            parent_path = step.path();
        }
        Ok(ParentSlot {
            chain: self,
            container: current,
            fragment,
            parent_path,
        })
    }

    fn descend_or_create<'n>(
        &self,
        node: &'n mut Node,
        step: &Segment,
        at: &str,
        below: &Segment,
    ) -> ConfigResult<&'n mut Node> {
        let missing = || match below.fragment() {
            Some(Fragment::Index(_)) => Node::empty_sequence(),
            _ => Node::empty_mapping(),
        };
        match step.fragment() {
            Some(Fragment::Property(name)) => {
                let map = node.as_mapping_mut().map_err(|e| e.at_path(at))?;
                let key = self.write_key(map, name);
                Ok(map.get_or_insert_with(key, missing))
            }
            Some(Fragment::Index(index)) => {
                let seq = node.as_sequence_mut().map_err(|e| e.at_path(at))?;
                let len = seq.len();
                let position = index.position(len);
                if position == len {
                    seq.push(missing());
                }
                seq.get_mut(position).ok_or_else(|| {
                    ConfigError::out_of_bounds(step.path(), as_index(position), Some(len))
                })
            }
            None => Ok(node),
        }
    }
}

impl ParentSlot<'_, '_> {
    /// Parent node the write will land in.
    #[must_use]
    pub fn container(&self) -> &Node {
        self.container
    }

    /// Fragment addressing the child within [`ParentSlot::container`].
    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        self.fragment
    }

    /// Store `value` at the terminal position, or remove the entry when
    /// `value` is `None`.
    ///
    /// For an index fragment, positions below the sequence length are
    /// overwritten (or removed), the position equal to the length appends,
    /// and anything further is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the parent has the wrong
    /// shape and [`ConfigError::OutOfBounds`] for an index beyond the end.
    pub fn write_child(self, value: Option<Node>) -> ConfigResult<()> {
        let path = self.chain.path();
        match self.fragment {
            Fragment::Property(name) => {
                let map = self
                    .container
                    .as_mapping_mut()
                    .map_err(|e| e.at_path(self.parent_path))?;
                let key = self.chain.write_key(map, name);
                match value {
                    Some(node) => {
                        map.insert(key, node);
                    }
                    None => {
                        map.remove(&key);
                    }
                }
                Ok(())
            }
            Fragment::Index(index) => {
                let seq = self
                    .container
                    .as_sequence_mut()
                    .map_err(|e| e.at_path(self.parent_path))?;
                let len = seq.len();
                let position = index.position(len);
                match (value, position.cmp(&len)) {
                    (Some(node), Ordering::Less) => {
                        seq.set(position, node).map_err(|e| e.at_path(path))
                    }
                    (Some(node), Ordering::Equal) => {
                        seq.push(node);
                        Ok(())
                    }
                    (None, Ordering::Less) => {
                        seq.remove(position);
                        Ok(())
                    }
                    (None, Ordering::Equal) => Ok(()),
                    (_, Ordering::Greater) => {
                        Err(ConfigError::out_of_bounds(path, as_index(position), Some(len)))
                    }
                }
            }
        }
    }

    /// Store `value` as a scalar, or remove the entry when `value` is
    /// `None`. See [`ParentSlot::write_child`].
    ///
    /// # Errors
    ///
    /// As for [`ParentSlot::write_child`].
    pub fn write_child_value(self, value: Option<&str>) -> ConfigResult<()> {
        self.write_child(value.map(Node::scalar))
    }
}

fn as_index(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}
