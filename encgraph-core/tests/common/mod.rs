// encgraph-core/tests/common/mod.rs
//
// Shared fakes and fixtures for the integration tests.

#![allow(dead_code)]

use encgraph_core::external::{DimensionProbe, Dimensions};
use encgraph_core::{CoreConfig, CoreConfigBuilder, CoreError, CoreResult, QualityRequest, QualityScore, QualityScorer};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Probe returning fixed dimensions and recording every path it was asked about.
#[derive(Default)]
pub struct RecordingProbe {
    pub calls: RefCell<Vec<PathBuf>>,
}

impl DimensionProbe for RecordingProbe {
    fn probe_dimensions(&self, path: &Path) -> CoreResult<Dimensions> {
        self.calls.borrow_mut().push(path.to_path_buf());
        if !path.exists() {
            return Err(CoreError::DimensionParse(format!(
                "no reference at {}",
                path.display()
            )));
        }
        Ok(Dimensions::new(1920, 1080))
    }
}

/// Scorer returning a preset VMAF per distorted filename (default 90.0).
#[derive(Default)]
pub struct TableScorer {
    pub scores: HashMap<String, f64>,
    pub calls: RefCell<Vec<QualityRequest>>,
}

impl TableScorer {
    pub fn with(scores: &[(&str, f64)]) -> Self {
        Self {
            scores: scores.iter().map(|(n, s)| (n.to_string(), *s)).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl QualityScorer for TableScorer {
    fn score(&self, request: &QualityRequest) -> CoreResult<QualityScore> {
        self.calls.borrow_mut().push(request.clone());
        let name = request
            .distorted_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(QualityScore {
            identifier: request.identifier,
            vmaf: self.scores.get(&name).copied().unwrap_or(90.0),
        })
    }
}

/// A temporary `ref/` + `dis/` layout.
pub struct Layout {
    pub root: TempDir,
}

impl Layout {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(root.path().join("ref")).expect("ref dir");
        fs::create_dir_all(root.path().join("dis")).expect("dis dir");
        Self { root }
    }

    pub fn reference_dir(&self) -> PathBuf {
        self.root.path().join("ref")
    }

    pub fn distorted_dir(&self) -> PathBuf {
        self.root.path().join("dis")
    }

    pub fn config(&self) -> CoreConfig {
        CoreConfigBuilder::new()
            .reference_dir(self.reference_dir())
            .distorted_dir(self.distorted_dir())
            .build()
    }

    pub fn add_reference(&self, name: &str) {
        fs::write(self.reference_dir().join(name), b"YUV4MPEG2").expect("write reference");
    }

    pub fn add_distorted(&self, name: &str, size: usize) {
        fs::write(self.distorted_dir().join(name), vec![0u8; size]).expect("write distorted");
    }

    pub fn write_timing_log(&self, content: &str) {
        fs::write(self.distorted_dir().join("time.csv"), content).expect("write timing log");
    }
}
