// ============================================================================
// encgraph-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every field starts at its default, so a
// builder with no calls produces the same value as `CoreConfig::default()`.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;
use crate::encoder::SuffixRule;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use encgraph_core::config::CoreConfigBuilder;
/// use encgraph_core::encoder::{EncoderType, SuffixRule};
///
/// let config = CoreConfigBuilder::new()
///     .distorted_dir("dis/video")
///     .suffix_rules(vec![SuffixRule::new(".svt.ivf", EncoderType::SvtAv1)])
///     .build();
/// assert_eq!(config.suffix_rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration, e.g. one read from the environment.
    pub fn from_config(config: CoreConfig) -> Self {
        Self { config }
    }

    /// Sets the reference directory.
    pub fn reference_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.reference_dir = dir.into();
        self
    }

    /// Sets the distorted directory.
    pub fn distorted_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.distorted_dir = dir.into();
        self
    }

    pub fn timing_log_name(mut self, name: impl Into<String>) -> Self {
        self.config.timing_log_name = name.into();
        self
    }

    pub fn graph_name(mut self, name: impl Into<String>) -> Self {
        self.config.graph_name = name.into();
        self
    }

    /// Sets the reference extension, including the leading dot (e.g. `.y4m`).
    pub fn reference_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.reference_extension = extension.into();
        self
    }

    /// Sets the chart title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Replaces the suffix rules. Order is priority order.
    pub fn suffix_rules(mut self, rules: Vec<SuffixRule>) -> Self {
        self.config.suffix_rules = rules;
        self
    }

    /// Builds the CoreConfig. Call `validate()` on the result before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
