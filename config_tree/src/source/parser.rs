//! Format-specific parsing of configuration documents.

use crate::{ConfigError, ConfigResult, Node};

use super::{Format, SourceLocation};

/// Turns a [`SourceLocation`] into a tree.
pub trait SourceParser {
    /// Read and parse `location`.
    ///
    /// Returns `Ok(None)` when the document has no content.
    ///
    /// # Errors
    ///
    /// Implementations report [`ConfigError::SourceUnavailable`] when the
    /// location cannot be read and [`ConfigError::SourceUnparseable`] when
    /// its content is not a valid document.
    fn parse(&self, location: &SourceLocation) -> ConfigResult<Option<Node>>;
}

/// Default parser: reads files from disk and parses JSON, TOML or YAML
/// according to [`SourceLocation::format`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FormatParser;

impl SourceParser for FormatParser {
    fn parse(&self, location: &SourceLocation) -> ConfigResult<Option<Node>> {
        let name = location.to_string();
        let format = location.format();
        tracing::debug!(source = %name, %format, "parsing configuration source");
        match location {
            SourceLocation::File(path) => {
                let data = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::source_unavailable(&name, e))?;
                parse_document(format, &name, &data)
            }
            SourceLocation::Memory { contents, .. } => parse_document(format, &name, contents),
        }
    }
}

/// Parse `data` as `format`. Blank documents yield `None`.
fn parse_document(format: Format, name: &str, data: &str) -> ConfigResult<Option<Node>> {
    if data.trim().is_empty() {
        return Ok(None);
    }
    match format {
        Format::Json => {
            #[cfg(feature = "serde_json")]
            {
                serde_json::from_str::<Option<Node>>(data)
                    .map_err(|e| ConfigError::source_unparseable(name, e))
            }
            #[cfg(not(feature = "serde_json"))]
            {
                Err(feature_disabled(name, "serde_json"))
            }
        }
        Format::Toml => {
            #[cfg(feature = "toml")]
            {
                toml::from_str::<Node>(data)
                    .map(Some)
                    .map_err(|e| ConfigError::source_unparseable(name, e))
            }
            #[cfg(not(feature = "toml"))]
            {
                Err(feature_disabled(name, "toml"))
            }
        }
        Format::Yaml => {
            #[cfg(feature = "yaml")]
            {
                serde_saphyr::from_str_with_options::<Option<Node>>(
                    data,
                    serde_saphyr::Options {
                        strict_booleans: true,
                        ..serde_saphyr::Options::default()
                    },
                )
                .map_err(|e| ConfigError::source_unparseable(name, e))
            }
            #[cfg(not(feature = "yaml"))]
            {
                Err(feature_disabled(name, "yaml"))
            }
        }
    }
}

#[cfg(any(not(feature = "serde_json"), not(feature = "toml"), not(feature = "yaml")))]
fn feature_disabled(name: &str, feature: &str) -> std::sync::Arc<ConfigError> {
    ConfigError::source_unparseable(
        name,
        std::io::Error::other(format!(
            "{feature} feature disabled: enable the '{feature}' feature to support this file format"
        )),
    )
}
