// ============================================================================
// encgraph-cli/src/commands/graph.rs
// ============================================================================
//
// GRAPH COMMAND: Runs the full comparison
//
// Builds the core configuration from the environment and the optional title,
// checks that the timing log exists and that ffprobe and ffmpeg are on PATH,
// runs the pipeline with the real probe, scorer and filesystem, then prints a
// summary and the chart path.

use anyhow::{Context, Result, bail};
use encgraph_core::external::{FfprobeDimensionProbe, StdFsMetadataProvider};
use encgraph_core::{CoreConfig, CoreConfigBuilder, VmafScorer, check_dependency, run_comparison};
use log::info;

use crate::cli::Cli;
use crate::output::print_summary;
use crate::progress::ScoringProgress;

/// Builds the run configuration for `cli`.
#[must_use]
pub fn build_config(cli: &Cli) -> CoreConfig {
    let mut builder = CoreConfigBuilder::from_config(CoreConfig::from_env());
    if let Some(title) = &cli.title {
        builder = builder.title(title.clone());
    }
    builder.build()
}

pub fn run_graph(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    config.validate().context("invalid configuration")?;

    info!("Reference directory: {}", config.reference_dir.display());
    info!("Distorted directory: {}", config.distorted_dir.display());

    let timing_log = config.timing_log_path();
    if !timing_log.is_file() {
        bail!("timing log not found at {}", timing_log.display());
    }

    for tool in ["ffprobe", "ffmpeg"] {
        check_dependency(tool)?;
    }

    let mut progress = ScoringProgress::new();
    let result = run_comparison(
        &config,
        FfprobeDimensionProbe::new(),
        &VmafScorer::sidecar(),
        &StdFsMetadataProvider,
        |done, total| progress.update(done, total),
    );
    progress.finish();
    let report = result?;

    print_summary(&report.analysis.summaries());
    println!("Saved graph to {}", report.graph_path.display());
    Ok(())
}
