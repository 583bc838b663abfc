// ============================================================================
// encgraph-core/src/pipeline.rs
// ============================================================================
//
// PIPELINE: End-to-end comparison run
//
// Load timing log -> classify distorted files (probing references through
// the dimension cache) -> score every asset -> join scores -> group by
// encoder -> render chart. Everything runs sequentially on the calling
// thread and the first error ends the run.

use std::path::PathBuf;

use crate::assets::{QualityRequest, classify};
use crate::chart::render_chart;
use crate::config::CoreConfig;
use crate::dimensions::DimensionCache;
use crate::error::{CoreError, CoreResult};
use crate::external::{DimensionProbe, FileMetadataProvider};
use crate::quality::{QualityScorer, score_all};
use crate::reporting::{EncoderGroup, GroupSummary, group_by_encoder, join_scores, summarize};
use crate::timing::TimingTable;

/// Grouped results of a run, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub groups: Vec<EncoderGroup>,
    pub asset_count: usize,
    pub probe_count: usize,
}

impl Analysis {
    #[must_use]
    pub fn summaries(&self) -> Vec<GroupSummary> {
        self.groups.iter().map(summarize).collect()
    }
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub analysis: Analysis,
    pub graph_path: PathBuf,
}

/// Classifies, scores, joins and groups, without rendering.
///
/// `on_progress(done, total)` is called after each asset is scored.
pub fn analyze<P, Q, M, F>(
    config: &CoreConfig,
    probe: P,
    scorer: &Q,
    metadata: &M,
    on_progress: F,
) -> CoreResult<Analysis>
where
    P: DimensionProbe,
    Q: QualityScorer + ?Sized,
    M: FileMetadataProvider,
    F: FnMut(usize, usize),
{
    config.validate()?;

    let timing = TimingTable::load(&config.timing_log_path())?;
    let mut cache = DimensionCache::new(probe, &config.reference_dir);
    let classification = classify(config, &timing, &mut cache, metadata)?;
    if classification.is_empty() {
        return Err(CoreError::NoFilesFound(
            config.distorted_dir.display().to_string(),
        ));
    }

    let requests: Vec<QualityRequest> = classification.requests().cloned().collect();
    log::info!("Scoring {} asset(s) with VMAF", requests.len());
    let scores = score_all(scorer, &requests, on_progress)?;

    let scored = join_scores(classification.descriptors(), &scores)?;
    let groups = group_by_encoder(&scored);
    for group in &groups {
        log::debug!("{}: {} asset(s)", group.encoder, group.len());
    }

    Ok(Analysis {
        groups,
        asset_count: classification.len(),
        probe_count: cache.probe_count(),
    })
}

/// Runs the whole comparison and writes the chart to `config.graph_path()`.
pub fn run_comparison<P, Q, M, F>(
    config: &CoreConfig,
    probe: P,
    scorer: &Q,
    metadata: &M,
    on_progress: F,
) -> CoreResult<ComparisonReport>
where
    P: DimensionProbe,
    Q: QualityScorer + ?Sized,
    M: FileMetadataProvider,
    F: FnMut(usize, usize),
{
    let analysis = analyze(config, probe, scorer, metadata, on_progress)?;
    let graph_path = config.graph_path();
    render_chart(&config.title, &analysis.groups, &graph_path)?;
    log::info!("Chart written to {}", graph_path.display());
    Ok(ComparisonReport {
        analysis,
        graph_path,
    })
}
