//! Binding sub-trees to typed values.

use figment::{Figment, providers::Serialized};
use serde::de::DeserializeOwned;

use crate::{ConfigResult, ConfigResultExt, Node};

/// Key under which the sub-tree is staged for extraction.
const STAGING_KEY: &str = "value";

/// Converts a selected sub-tree into a typed value.
pub trait TreeMapper {
    /// Bind `node`, found at `path`, to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`](crate::ConfigError::Mapping) when the
    /// tree does not fit `T`.
    fn map<T: DeserializeOwned>(&self, node: &Node, path: &str) -> ConfigResult<T>;
}

/// Default mapper backed by figment's lossy extraction.
///
/// Scalars are strings in the tree, so numbers and booleans are read back
/// from their text: `"8080"` binds to `u16` and `"true"` to `bool`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FigmentMapper;

impl TreeMapper for FigmentMapper {
    fn map<T: DeserializeOwned>(&self, node: &Node, path: &str) -> ConfigResult<T> {
        Figment::from(Serialized::default(STAGING_KEY, node))
            .extract_inner_lossy(STAGING_KEY)
            .into_config()
            .map_err(|err| err.at_path(path))
    }
}
