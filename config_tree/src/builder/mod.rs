//! Assembles the resolved configuration tree.
//!
//! Sources are parsed in order and folded with the tree merger, so later
//! sources win. The override chain is applied to the merged root last.

use crate::{
    ConfigResult, ConfigSource, FormatParser, Node, OverrideChain, SourceLocation, SourceParser,
    merge_nodes,
};

/// Loads sources, merges them and applies overrides.
///
/// ```rust
/// use config_tree::{ConfigurationBuilder, Format, KeyPolicy, Node, Override, SourceLocation};
///
/// # fn main() -> config_tree::ConfigResult<()> {
/// let root = ConfigurationBuilder::new()
///     .source(SourceLocation::memory("defaults", Format::Json, r#"{"port": 8080}"#))
///     .source(SourceLocation::memory("site", Format::Toml, "port = 9090"))
///     .overrides([Override::property("name", Some("demo".to_owned()))].into_iter().collect())
///     .build()?;
/// let port = config_tree::lookup(&root, "port", KeyPolicy::Exact)?;
/// assert_eq!(port, Some(&Node::scalar("9090")));
/// # Ok(())
/// # }
/// ```
pub struct ConfigurationBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
    parser: Box<dyn SourceParser>,
    overrides: OverrideChain,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationBuilder {
    /// Builder with no sources, the [`FormatParser`] and an identity
    /// override chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            parser: Box::new(FormatParser),
            overrides: OverrideChain::new(),
        }
    }

    /// Append a source. Sources added later take precedence.
    #[must_use]
    pub fn source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Append a file source.
    #[must_use]
    pub fn file(self, path: impl Into<camino::Utf8PathBuf>) -> Self {
        self.source(SourceLocation::file(path))
    }

    /// Replace the parser used for sources and decorator resources.
    #[must_use]
    pub fn parser(mut self, parser: impl SourceParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Replace the override chain.
    #[must_use]
    pub fn overrides(mut self, overrides: OverrideChain) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load, merge and override.
    ///
    /// Sources without content are skipped. With nothing loaded the result
    /// is an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns the first source, merge or override failure.
    pub fn build(&self) -> ConfigResult<Node> {
        let mut merged: Option<Node> = None;
        for location in self.sources.iter().flat_map(|source| source.locations()) {
            let Some(tree) = self.parser.parse(&location)? else {
                tracing::debug!(source = %location, "configuration source has no content");
                continue;
            };
            tracing::debug!(source = %location, "loaded configuration source");
            merged = Some(match merged {
                Some(existing) => merge_nodes(existing, tree)?,
                None => tree,
            });
        }
        let root = merged.unwrap_or_default();
        tracing::debug!(kind = %root.kind(), "merged configuration sources");
        self.overrides.apply(root, self.parser.as_ref())
    }
}
