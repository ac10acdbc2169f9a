//! Hierarchical configuration trees with layered overrides.
//!
//! Configuration sources (JSON, TOML or YAML documents) are parsed into
//! [`Node`] trees and folded with [`merge_nodes`], later sources winning.
//! An [`OverrideChain`] then applies decorator resources, command-line
//! values and flat property overrides, in that order of precedence. The
//! resolved root is read through [`ConfigFactory`], which selects sub-trees
//! case-insensitively and binds them to typed values.
//!
//! ```rust
//! use config_tree::{
//!     ConfigFactory, ConfigurationBuilder, Format, OptionMetadata, OverrideComposer,
//!     PropertyOverrides, SourceLocation,
//! };
//!
//! # fn main() -> config_tree::ConfigResult<()> {
//! let composer = OverrideComposer::new()
//!     .option(OptionMetadata::new("port").with_config_path("server.port"))
//!     .properties(PropertyOverrides::new().with("server.host", "example.org"));
//! let root = ConfigurationBuilder::new()
//!     .source(SourceLocation::memory(
//!         "defaults",
//!         Format::Json,
//!         r#"{"server": {"port": 80, "host": "localhost"}}"#,
//!     ))
//!     .overrides(composer.compose(&()))
//!     .build()?;
//! let host: String = ConfigFactory::new(root).config("SERVER.HOST")?;
//! assert_eq!(host, "example.org");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

mod builder;
mod cli;
mod error;
mod factory;
mod merge;
mod node;
mod overrides;
pub mod path;
mod properties;
mod result_ext;
mod source;

pub use builder::ConfigurationBuilder;
pub use cli::{ClapOptions, CliOptions, OptionDecorator, OptionMetadata};
pub use error::{BoxedCause, ConfigError};
pub use factory::{ConfigFactory, FigmentMapper, TreeMapper};
pub use merge::{merge, merge_nodes};
pub use node::{Mapping, Node, NodeKind, Sequence};
pub use overrides::{Override, OverrideChain, OverrideComposer};
pub use path::{
    Fragment, IndexStep, KeyPolicy, ParentSlot, Resolution, Segment, SegmentChain, assign, lookup,
};
pub use properties::PropertyOverrides;
pub use result_ext::ConfigResultExt;
pub use source::{ConfigSource, Format, FormatParser, SourceLocation, SourceParser};

/// Result alias carrying a shared [`ConfigError`].
pub type ConfigResult<T> = Result<T, Arc<ConfigError>>;
