//! Document formats and extension-based detection.

use std::fmt;

use camino::Utf8Path;

/// Structured document format understood by [`FormatParser`](super::FormatParser).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON, parsed with `serde_json`.
    Json,
    /// TOML, parsed with `toml`.
    Toml,
    /// YAML, parsed with `serde-saphyr` (requires the `yaml` feature).
    Yaml,
}

impl Format {
    /// Format for a file extension, compared ignoring ASCII case.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Format for `path`. Unknown or missing extensions are read as TOML.
    ///
    /// ```rust
    /// use camino::Utf8Path;
    /// use config_tree::Format;
    ///
    /// assert_eq!(Format::detect(Utf8Path::new("app.YML")), Format::Yaml);
    /// assert_eq!(Format::detect(Utf8Path::new(".apprc")), Format::Toml);
    /// ```
    #[must_use]
    pub fn detect(path: &Utf8Path) -> Self {
        path.extension()
            .and_then(Self::from_extension)
            .unwrap_or(Self::Toml)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
