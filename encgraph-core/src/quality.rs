// ============================================================================
// encgraph-core/src/quality.rs
// ============================================================================
//
// QUALITY SCORING: VMAF via ffmpeg's libvmaf filter
//
// Each quality request is scored independently: both legs are scaled to the
// reference dimensions, libvmaf writes a JSON log into a scratch directory,
// and the first frame's VMAF value becomes the score. Inputs are still images
// or single-frame clips, so the first frame is the whole comparison.
//
// KEY COMPONENTS:
// - QualityScorer: trait the pipeline scores through
// - VmafScorer: ffmpeg/libvmaf implementation over an FfmpegSpawner
// - parse_vmaf_json / parse_vmaf_log: libvmaf JSON log parsing
// - score_all: sequential scoring with progress callbacks

use std::fs;
use std::path::Path;

use ffmpeg_sidecar::command::FfmpegCommand;
use serde::Deserialize;

use crate::assets::QualityRequest;
use crate::error::{CoreError, CoreResult};
use crate::external::ffmpeg_executor::run_to_completion;
use crate::external::{FfmpegSpawner, SidecarSpawner};

/// Score for one quality request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityScore {
    pub identifier: u64,
    pub vmaf: f64,
}

/// Computes a perceptual quality score for a reference/distorted pair.
pub trait QualityScorer {
    fn score(&self, request: &QualityRequest) -> CoreResult<QualityScore>;
}

/// Scores requests with ffmpeg's libvmaf filter.
#[derive(Debug, Clone, Default)]
pub struct VmafScorer<S: FfmpegSpawner = SidecarSpawner> {
    spawner: S,
    model: Option<String>,
}

impl VmafScorer<SidecarSpawner> {
    /// Scorer that runs the ffmpeg found by ffmpeg-sidecar.
    pub fn sidecar() -> Self {
        Self::new(SidecarSpawner)
    }
}

impl<S: FfmpegSpawner> VmafScorer<S> {
    pub fn new(spawner: S) -> Self {
        Self {
            spawner,
            model: None,
        }
    }

    /// Selects a libvmaf model, e.g. `version=vmaf_v0.6.1`. libvmaf's
    /// built-in default is used when unset.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn build_command(&self, request: &QualityRequest, log_path: &Path) -> FfmpegCommand {
        let dims = request.dimensions;
        let norm = format!(
            "scale={}:{}:flags=bicubic,format=yuv420p",
            dims.width, dims.height
        );
        let mut vmaf = format!(
            "libvmaf=log_fmt=json:log_path={}",
            escape_filter_path(log_path)
        );
        if let Some(model) = &self.model {
            vmaf.push_str(":model=");
            vmaf.push_str(model);
        }
        let filtergraph = format!("[0:v]{norm}[dis];[1:v]{norm}[ref];[dis][ref]{vmaf}");

        let mut cmd = FfmpegCommand::new();
        cmd.input(request.distorted_path.to_string_lossy().as_ref() as &str);
        cmd.input(request.reference_path.to_string_lossy().as_ref() as &str);
        cmd.args(["-lavfi", filtergraph.as_str()]);
        cmd.args(["-an", "-f", "null"]);
        cmd.output("-");
        cmd
    }
}

impl<S: FfmpegSpawner> QualityScorer for VmafScorer<S> {
    fn score(&self, request: &QualityRequest) -> CoreResult<QualityScore> {
        let scratch = tempfile::Builder::new().prefix("encgraph-vmaf").tempdir()?;
        let log_path = scratch.path().join("vmaf.json");

        let cmd = self.build_command(request, &log_path);
        run_to_completion(&self.spawner, cmd, "libvmaf")?;

        let vmaf = parse_vmaf_log(&log_path)?;
        log::debug!(
            "VMAF {:.3} for {}",
            vmaf,
            request.distorted_path.display()
        );
        Ok(QualityScore {
            identifier: request.identifier,
            vmaf,
        })
    }
}

/// Escapes a path for use inside an ffmpeg filter option value.
fn escape_filter_path(path: &Path) -> String {
    path.display()
        .to_string()
        .replace('\\', "\\\\")
        .replace(':', "\\:")
        .replace(' ', "\\ ")
        .replace('[', "\\[")
        .replace(']', "\\]")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

// libvmaf JSON log (partial)
#[derive(Debug, Deserialize)]
struct VmafLog {
    frames: Vec<VmafFrame>,
}

#[derive(Debug, Deserialize)]
struct VmafFrame {
    metrics: VmafFrameMetrics,
}

#[derive(Debug, Deserialize)]
struct VmafFrameMetrics {
    vmaf: f64,
}

/// Extracts the first frame's VMAF score from libvmaf JSON output.
pub fn parse_vmaf_json(content: &str) -> CoreResult<f64> {
    let log: VmafLog = serde_json::from_str(content)
        .map_err(|e| CoreError::VmafParse(format!("invalid libvmaf JSON: {e}")))?;
    log.frames
        .first()
        .map(|frame| frame.metrics.vmaf)
        .ok_or_else(|| CoreError::VmafParse("libvmaf log contains no frames".to_string()))
}

/// Reads and parses a libvmaf JSON log file.
pub fn parse_vmaf_log(log_path: &Path) -> CoreResult<f64> {
    let content = fs::read_to_string(log_path).map_err(|e| {
        CoreError::VmafParse(format!(
            "failed to read libvmaf log '{}': {}",
            log_path.display(),
            e
        ))
    })?;
    parse_vmaf_json(&content)
}

/// Scores every request in order, calling `on_progress(done, total)` after each.
pub fn score_all<Q, F>(
    scorer: &Q,
    requests: &[QualityRequest],
    mut on_progress: F,
) -> CoreResult<Vec<QualityScore>>
where
    Q: QualityScorer + ?Sized,
    F: FnMut(usize, usize),
{
    let total = requests.len();
    let mut scores = Vec::with_capacity(total);
    for (index, request) in requests.iter().enumerate() {
        scores.push(scorer.score(request)?);
        on_progress(index + 1, total);
    }
    Ok(scores)
}
