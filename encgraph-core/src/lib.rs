//! Core library for comparing image and video encoders.
//!
//! Distorted files are classified by filename suffix into encoder groups,
//! joined with their encode times from a pipe-delimited log, scored against
//! their references with VMAF, and plotted as a three-panel chart of
//! quality, encode time and file size.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use encgraph_core::{CoreConfig, run_comparison};
//! use encgraph_core::external::{FfprobeDimensionProbe, StdFsMetadataProvider};
//! use encgraph_core::quality::VmafScorer;
//!
//! let config = CoreConfig::from_env();
//! config.validate().unwrap();
//!
//! let report = run_comparison(
//!     &config,
//!     FfprobeDimensionProbe::new(),
//!     &VmafScorer::sidecar(),
//!     &StdFsMetadataProvider,
//!     |done, total| println!("{done}/{total}"),
//! ).unwrap();
//! println!("Saved graph to {}", report.graph_path.display());
//! ```

pub mod assets;
pub mod chart;
pub mod config;
pub mod dimensions;
pub mod encoder;
pub mod error;
pub mod external;
pub mod identifier;
pub mod pipeline;
pub mod quality;
pub mod reporting;
pub mod timing;
pub mod utils;

// Re-exports for public API
pub use assets::{AssetDescriptor, Classification, ClassifiedAsset, QualityRequest, classify};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use dimensions::DimensionCache;
pub use encoder::{EncoderType, SuffixRule, default_suffix_rules};
pub use error::{CoreError, CoreResult};
pub use external::{Dimensions, check_dependency};
pub use identifier::asset_id;
pub use pipeline::{Analysis, ComparisonReport, analyze, run_comparison};
pub use quality::{QualityScore, QualityScorer, VmafScorer};
pub use reporting::{EncoderGroup, GroupSummary, ScoredAsset};
pub use timing::{TimingEntry, TimingTable};
pub use utils::{format_bytes, format_seconds};
