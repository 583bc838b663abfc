//! Configuration structures and constants for the encgraph-core library.
//!
//! The directory layout is fixed: reference files live in one directory,
//! distorted files plus the timing log in another, and the chart is written
//! next to the distorted files. The only overrides are environment variables.

mod builder;

use std::env;
use std::path::PathBuf;

use crate::encoder::{SuffixRule, default_suffix_rules};
use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Directory holding the reference (source) files.
pub const DEFAULT_REFERENCE_DIR: &str = "ref/still-16";

/// Directory holding the distorted (encoded) files and the timing log.
pub const DEFAULT_DISTORTED_DIR: &str = "dis/still";

/// Pipe-delimited timing log inside the distorted directory.
pub const DEFAULT_TIMING_LOG_NAME: &str = "time.csv";

/// Chart written inside the distorted directory.
pub const DEFAULT_GRAPH_NAME: &str = "graph.png";

/// Extension appended to a stripped distorted name to find its reference.
pub const DEFAULT_REFERENCE_EXTENSION: &str = ".y4m";

/// Chart title used when none is given on the command line.
pub const DEFAULT_TITLE: &str = "SVT-AV1 vs libaom";

/// Environment variable overriding the reference directory.
pub const ENV_REFERENCE_DIR: &str = "ENCGRAPH_REF_DIR";

/// Environment variable overriding the distorted directory.
pub const ENV_DISTORTED_DIR: &str = "ENCGRAPH_DIS_DIR";

/// Main configuration structure for a comparison run.
///
/// # Examples
///
/// ```rust,no_run
/// use encgraph_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .reference_dir("ref/still-16")
///     .distorted_dir("dis/still")
///     .title("SVT-AV1 vs rav1e")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory containing reference files
    pub reference_dir: PathBuf,

    /// Directory containing distorted files, the timing log and the chart
    pub distorted_dir: PathBuf,

    /// File name of the timing log inside `distorted_dir`
    pub timing_log_name: String,

    /// File name of the chart inside `distorted_dir`
    pub graph_name: String,

    /// Extension of reference files, including the leading dot
    pub reference_extension: String,

    /// Chart title
    pub title: String,

    /// Suffix rules, highest priority first
    pub suffix_rules: Vec<SuffixRule>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            reference_dir: PathBuf::from(DEFAULT_REFERENCE_DIR),
            distorted_dir: PathBuf::from(DEFAULT_DISTORTED_DIR),
            timing_log_name: DEFAULT_TIMING_LOG_NAME.to_string(),
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
            reference_extension: DEFAULT_REFERENCE_EXTENSION.to_string(),
            title: DEFAULT_TITLE.to_string(),
            suffix_rules: default_suffix_rules(),
        }
    }
}

impl CoreConfig {
    /// Creates a configuration with the default layout rooted at the
    /// current working directory, then applies environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os(ENV_REFERENCE_DIR).filter(|v| !v.is_empty()) {
            log::debug!("Reference directory overridden by {ENV_REFERENCE_DIR}");
            config.reference_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env::var_os(ENV_DISTORTED_DIR).filter(|v| !v.is_empty()) {
            log::debug!("Distorted directory overridden by {ENV_DISTORTED_DIR}");
            config.distorted_dir = PathBuf::from(dir);
        }
        config
    }

    /// Path of a reference file by name.
    #[must_use]
    pub fn reference_path(&self, reference_name: &str) -> PathBuf {
        self.reference_dir.join(reference_name)
    }

    /// Path of a distorted file by name.
    #[must_use]
    pub fn distorted_path(&self, distorted_name: &str) -> PathBuf {
        self.distorted_dir.join(distorted_name)
    }

    #[must_use]
    pub fn timing_log_path(&self) -> PathBuf {
        self.distorted_dir.join(&self.timing_log_name)
    }

    #[must_use]
    pub fn graph_path(&self) -> PathBuf {
        self.distorted_dir.join(&self.graph_name)
    }

    /// Checks the configuration for values that would make a run meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.reference_extension.is_empty() {
            return Err(CoreError::Config(
                "reference extension must not be empty".to_string(),
            ));
        }
        if self.suffix_rules.is_empty() {
            return Err(CoreError::Config(
                "at least one suffix rule is required".to_string(),
            ));
        }
        if let Some(rule) = self.suffix_rules.iter().find(|r| r.suffix.is_empty()) {
            return Err(CoreError::Config(format!(
                "suffix rule for {} has an empty suffix",
                rule.encoder
            )));
        }
        if self.timing_log_name.is_empty() || self.graph_name.is_empty() {
            return Err(CoreError::Config(
                "timing log and graph file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
