//! Conversions from external error types into `ConfigError`.

use figment::Error as FigmentError;

use super::ConfigError;

impl From<FigmentError> for ConfigError {
    /// Wrap an extraction failure as [`ConfigError::Mapping`], keeping the
    /// dotted key path figment reports.
    fn from(e: FigmentError) -> Self {
        Self::Mapping {
            path: e.path.join("."),
            source: Box::new(e),
        }
    }
}
