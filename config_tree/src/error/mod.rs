//! Error types produced while navigating, merging and loading trees.

mod constructors;
mod conversions;
mod types;

pub use types::{BoxedCause, ConfigError};
