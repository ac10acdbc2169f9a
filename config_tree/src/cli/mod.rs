//! Command-line facts consumed by the override composer.
//!
//! The engine never declares flags itself. It reads which options were
//! present and what value each carried through [`CliOptions`], and matches
//! them against [`OptionMetadata`] and [`OptionDecorator`] registrations.

mod arg_matches;

pub use arg_matches::ClapOptions;

use crate::SourceLocation;

/// Options present on a parsed command line.
pub trait CliOptions {
    /// Names of options given on the command line, in the order they
    /// appeared.
    fn detected_options(&self) -> Vec<String>;

    /// Value given for `name`, if it took one.
    fn option_value(&self, name: &str) -> Option<String>;
}

/// What the engine knows about a command-line option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionMetadata {
    name: String,
    config_path: Option<String>,
    default_value: Option<String>,
}

impl OptionMetadata {
    /// Metadata for the option called `name`, bound to no configuration
    /// path.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config_path: None,
            default_value: None,
        }
    }

    /// Bind the option's value to the configuration path `path`.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Value written to the configuration path when the option is present
    /// without a value.
    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration path the option writes to.
    #[must_use]
    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// Value used when the option carries none.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// Configuration resource layered on top of the sources whenever a given
/// option is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDecorator {
    option: String,
    location: SourceLocation,
}

impl OptionDecorator {
    /// Merge `location` whenever `option` is detected.
    #[must_use]
    pub fn new(option: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            option: option.into(),
            location,
        }
    }

    /// Option that triggers the decorator.
    #[must_use]
    pub fn option(&self) -> &str {
        &self.option
    }

    /// Resource merged when the option is present.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// Command line with no options.
impl CliOptions for () {
    fn detected_options(&self) -> Vec<String> {
        Vec::new()
    }

    fn option_value(&self, _name: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests;
