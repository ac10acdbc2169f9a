//! Typed extraction over a resolved configuration tree.
//!
//! Paths are resolved case-insensitively, so `server.port`, `SERVER.Port`
//! and `Server.PORT` select the same node. A path that selects nothing
//! yields an empty mapping, leaving defaults to the target type.

mod mapper;

pub use mapper::{FigmentMapper, TreeMapper};

use serde::de::DeserializeOwned;

use crate::{ConfigResult, KeyPolicy, Node, SegmentChain};

/// Read-only access to a resolved root.
///
/// ```rust
/// use config_tree::{ConfigFactory, Format, ConfigurationBuilder, SourceLocation};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Server {
///     port: u16,
///     #[serde(default)]
///     tls: bool,
/// }
///
/// # fn main() -> config_tree::ConfigResult<()> {
/// let root = ConfigurationBuilder::new()
///     .source(SourceLocation::memory("app", Format::Toml, "[Server]\nport = 8080"))
///     .build()?;
/// let server: Server = ConfigFactory::new(root).config("server")?;
/// assert_eq!(server.port, 8080);
/// assert!(!server.tls);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFactory<M = FigmentMapper> {
    root: Node,
    mapper: M,
}

impl ConfigFactory {
    /// Factory over `root` using the [`FigmentMapper`].
    #[must_use]
    pub const fn new(root: Node) -> Self {
        Self {
            root,
            mapper: FigmentMapper,
        }
    }
}

impl<M: TreeMapper> ConfigFactory<M> {
    /// Factory over `root` using a custom mapper.
    #[must_use]
    pub const fn with_mapper(root: Node, mapper: M) -> Self {
        Self { root, mapper }
    }

    /// The resolved root.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// The sub-tree at `path`, if one exists.
    ///
    /// # Errors
    ///
    /// Propagates path parse failures and shape mismatches met while
    /// walking, including [`ConfigError::Unsupported`] for index fragments.
    ///
    /// [`ConfigError::Unsupported`]: crate::ConfigError::Unsupported
    pub fn node(&self, path: &str) -> ConfigResult<Option<&Node>> {
        let chain = SegmentChain::parse(path, KeyPolicy::CaseInsensitive)?;
        Ok(chain.resolve(&self.root)?.terminal())
    }

    /// Bind the sub-tree at `path` to `T`.
    ///
    /// # Errors
    ///
    /// Fails as [`node`](Self::node) does, or with
    /// [`ConfigError::Mapping`](crate::ConfigError::Mapping) when the
    /// sub-tree does not fit `T`.
    pub fn config<T: DeserializeOwned>(&self, path: &str) -> ConfigResult<T> {
        let fallback = Node::empty_mapping();
        let node = self.node(path)?.unwrap_or_else(|| {
            tracing::debug!(path, "no configuration node; binding an empty mapping");
            &fallback
        });
        self.mapper.map(node, path)
    }
}

#[cfg(test)]
mod tests;
