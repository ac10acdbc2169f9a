//! Composition of the override chain from CLI facts.

use crate::{CliOptions, OptionDecorator, OptionMetadata, PropertyOverrides};

use super::{Override, OverrideChain};

/// Builds an [`OverrideChain`] with a fixed precedence, lowest first:
///
/// 1. decorator resources of every detected option,
/// 2. values of detected options bound to a configuration path,
/// 3. flat property overrides.
///
/// Options are visited in detection order within each layer. Detected
/// options without registered metadata are ignored.
#[derive(Clone, Debug, Default)]
pub struct OverrideComposer {
    metadata: Vec<OptionMetadata>,
    decorators: Vec<OptionDecorator>,
    properties: PropertyOverrides,
}

impl OverrideComposer {
    /// Composer with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for an option.
    #[must_use]
    pub fn option(mut self, metadata: OptionMetadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    /// Register a decorator. Decorators for the same option apply in
    /// registration order.
    #[must_use]
    pub fn decorator(mut self, decorator: OptionDecorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Set the flat property overrides.
    #[must_use]
    pub fn properties(mut self, properties: PropertyOverrides) -> Self {
        self.properties = properties;
        self
    }

    /// Build the chain for the options detected in `cli`.
    ///
    /// Decorators of every detected option apply before any option value,
    /// so one option's value is never overwritten by a later option's
    /// decorator resource.
    #[must_use]
    pub fn compose(&self, cli: &dyn CliOptions) -> OverrideChain {
        let detected: Vec<&OptionMetadata> = cli
            .detected_options()
            .into_iter()
            .filter_map(|name| {
                let found = self.metadata.iter().find(|meta| meta.name() == name);
                if found.is_none() {
                    tracing::debug!(option = %name, "ignoring option without metadata");
                }
                found
            })
            .collect();

        let mut chain = OverrideChain::new();
        for meta in &detected {
            self.decorators
                .iter()
                .filter(|decorator| decorator.option() == meta.name())
                .for_each(|decorator| chain.push(Override::Resource(decorator.location().clone())));
        }
        for meta in &detected {
            if let Some(path) = meta.config_path() {
                let value = cli
                    .option_value(meta.name())
                    .or_else(|| meta.default_value().map(str::to_owned));
                chain.push(Override::property(path, value));
            }
        }
        if !self.properties.is_empty() {
            chain.push(Override::Properties(self.properties.clone().into_override_map()));
        }
        chain
    }
}
