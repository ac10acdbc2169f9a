//! Extensions for mapping errors to `ConfigResult` concisely.
//!
//! These helpers replace `.map_err(|e| Arc::new(ConfigError::from(e)))` when
//! converting external error types into the crate's
//! `ConfigResult<T>` alias (`Result<T, Arc<ConfigError>>`).
//!
//! # Examples
//!
//! ```
//! use config_tree::{ConfigResult, ConfigResultExt};
//! use figment::{Figment, providers::Serialized};
//!
//! fn port() -> ConfigResult<u16> {
//!     Figment::from(Serialized::default("port", 8080))
//!         .extract_inner("port")
//!         .into_config()
//! }
//! # assert_eq!(port().ok(), Some(8080));
//! ```

use std::sync::Arc;

use crate::{ConfigError, ConfigResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<ConfigError>` into a `ConfigResult<T>`.
pub trait ConfigResultExt<T> {
    /// Convert `Result<T, E>` into `ConfigResult<T>` using `Into<ConfigError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<ConfigError>`.
    fn into_config(self) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T> for Result<T, E>
where
    E: Into<ConfigError>,
{
    fn into_config(self) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
