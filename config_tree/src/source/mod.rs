//! Configuration source locations and the parsers that read them.
//!
//! A [`ConfigSource`] supplies an ordered list of [`SourceLocation`]s. Each
//! location is turned into a [`Node`](crate::Node) tree by a
//! [`SourceParser`]; the default [`FormatParser`] picks JSON, TOML or YAML
//! from the file extension.

mod format;
mod parser;

pub use format::Format;
pub use parser::{FormatParser, SourceParser};

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

/// Where a configuration document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// File on disk; the format follows from the extension.
    File(Utf8PathBuf),
    /// Document held in memory.
    Memory {
        /// Name used in diagnostics.
        name: String,
        /// Format of `contents`.
        format: Format,
        /// Document text.
        contents: String,
    },
}

impl SourceLocation {
    /// Location of a file on disk.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// In-memory document.
    ///
    /// ```rust
    /// use config_tree::{Format, SourceLocation};
    ///
    /// let defaults = SourceLocation::memory("defaults", Format::Json, r#"{"port": 8080}"#);
    /// assert_eq!(defaults.to_string(), "defaults");
    /// assert_eq!(defaults.format(), Format::Json);
    /// ```
    #[must_use]
    pub fn memory(name: impl Into<String>, format: Format, contents: impl Into<String>) -> Self {
        Self::Memory {
            name: name.into(),
            format,
            contents: contents.into(),
        }
    }

    /// Format the document is read as.
    #[must_use]
    pub fn format(&self) -> Format {
        match self {
            Self::File(path) => Format::detect(path),
            Self::Memory { format, .. } => *format,
        }
    }

    /// Path of a file location.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Memory { .. } => None,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{path}"),
            Self::Memory { name, .. } => f.write_str(name),
        }
    }
}

/// Supplier of configuration source locations, lowest precedence first.
pub trait ConfigSource {
    /// Locations in load order. Later documents override earlier ones.
    fn locations(&self) -> Box<dyn Iterator<Item = SourceLocation> + '_>;
}

impl ConfigSource for Vec<SourceLocation> {
    fn locations(&self) -> Box<dyn Iterator<Item = SourceLocation> + '_> {
        Box::new(self.iter().cloned())
    }
}

impl ConfigSource for SourceLocation {
    fn locations(&self) -> Box<dyn Iterator<Item = SourceLocation> + '_> {
        Box::new(std::iter::once(self.clone()))
    }
}
