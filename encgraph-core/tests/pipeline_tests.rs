// encgraph-core/tests/pipeline_tests.rs

mod common;

use common::{Layout, RecordingProbe, TableScorer};
use encgraph_core::chart::render_chart;
use encgraph_core::external::StdFsMetadataProvider;
use encgraph_core::{CoreConfigBuilder, CoreError, EncoderType, analyze, run_comparison};

#[test]
fn test_analyze_groups_scores_times_and_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let layout = Layout::new();
    for name in ["a", "b"] {
        layout.add_reference(&format!("{name}.y4m"));
    }
    layout.add_distorted("a.svt.ivf", 1000);
    layout.add_distorted("a.aom.ivf", 2000);
    layout.add_distorted("b.svt.ivf", 3000);
    layout.add_distorted("b.aom.ivf", 4000);
    layout.write_timing_log(
        "filename|elapsed\na.svt.ivf|1.5\na.aom.ivf|10.0\nb.svt.ivf|2.5\nb.aom.ivf|12.0\n",
    );

    let scorer = TableScorer::with(&[
        ("a.svt.ivf", 91.0),
        ("a.aom.ivf", 92.0),
        ("b.svt.ivf", 93.0),
        ("b.aom.ivf", 94.0),
    ]);
    let mut progress = Vec::new();
    let analysis = analyze(
        &layout.config(),
        RecordingProbe::default(),
        &scorer,
        &StdFsMetadataProvider,
        |done, total| progress.push((done, total)),
    )?;

    assert_eq!(analysis.asset_count, 4);
    assert_eq!(analysis.probe_count, 2);
    assert_eq!(progress, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    assert_eq!(scorer.calls.borrow().len(), 4);

    assert_eq!(analysis.groups.len(), 2);
    let svt = &analysis.groups[0];
    assert_eq!(svt.encoder, EncoderType::SvtAv1);
    assert_eq!(svt.scores, vec![91.0, 93.0]);
    assert_eq!(svt.times, vec![1.5, 2.5]);
    assert_eq!(svt.sizes, vec![1000, 3000]);

    let aom = &analysis.groups[1];
    assert_eq!(aom.encoder, EncoderType::Libaom);
    assert_eq!(aom.scores, vec![92.0, 94.0]);

    let summaries = analysis.summaries();
    assert_eq!(summaries[0].mean_vmaf, Some(92.0));
    assert_eq!(summaries[1].mean_time_seconds, Some(11.0));
    assert_eq!(summaries[1].mean_size_bytes, Some(3000.0));
    Ok(())
}

#[test]
fn test_analyze_without_timing_log_fails() {
    let layout = Layout::new();
    layout.add_reference("a.y4m");
    layout.add_distorted("a.svt.ivf", 10);

    let result = analyze(
        &layout.config(),
        RecordingProbe::default(),
        &TableScorer::default(),
        &StdFsMetadataProvider,
        |_, _| {},
    );
    assert!(matches!(result, Err(CoreError::PathError(_))));
}

#[test]
fn test_analyze_with_no_classified_files_fails() {
    let layout = Layout::new();
    layout.write_timing_log("filename|elapsed\n");
    layout.add_distorted("readme.txt", 10);

    let scorer = TableScorer::default();
    let result = analyze(
        &layout.config(),
        RecordingProbe::default(),
        &scorer,
        &StdFsMetadataProvider,
        |_, _| {},
    );
    assert!(matches!(result, Err(CoreError::NoFilesFound(_))));
    assert!(scorer.calls.borrow().is_empty());
}

#[test]
fn test_analyze_rejects_invalid_config() {
    let layout = Layout::new();
    let mut config = layout.config();
    config.suffix_rules.clear();

    let result = analyze(
        &config,
        RecordingProbe::default(),
        &TableScorer::default(),
        &StdFsMetadataProvider,
        |_, _| {},
    );
    assert!(matches!(result, Err(CoreError::Config(_))));
}

#[test]
fn test_run_comparison_writes_graph_into_distorted_dir() -> Result<(), Box<dyn std::error::Error>> {
    let layout = Layout::new();
    layout.add_reference("a.y4m");
    layout.add_distorted("a.svt.ivf", 1200);
    layout.add_distorted("a.aom.ivf", 3400);
    layout.add_distorted("a.jpg", 5600);
    layout.write_timing_log("filename|elapsed\na.svt.ivf|1.25\na.aom.ivf|8.0\na.jpg|0.1\n");

    let config = CoreConfigBuilder::from_config(layout.config())
        .title("stills")
        .build();
    let scorer = TableScorer::with(&[("a.svt.ivf", 94.0), ("a.aom.ivf", 95.5), ("a.jpg", 88.0)]);
    let report = run_comparison(
        &config,
        RecordingProbe::default(),
        &scorer,
        &StdFsMetadataProvider,
        |_, _| {},
    )?;

    assert_eq!(report.graph_path, layout.distorted_dir().join("graph.png"));
    let written = std::fs::metadata(&report.graph_path)?;
    assert!(written.is_file());
    assert!(written.len() > 0);
    assert_eq!(report.analysis.asset_count, 3);
    assert_eq!(report.analysis.groups.len(), 3);
    Ok(())
}

#[test]
fn test_run_comparison_failure_writes_no_graph() {
    let layout = Layout::new();
    layout.write_timing_log("filename|elapsed\n");

    let result = run_comparison(
        &layout.config(),
        RecordingProbe::default(),
        &TableScorer::default(),
        &StdFsMetadataProvider,
        |_, _| {},
    );
    assert!(matches!(result, Err(CoreError::NoFilesFound(_))));
    assert!(!layout.distorted_dir().join("graph.png").exists());
}

#[test]
fn test_render_chart_into_missing_directory_is_a_chart_error() {
    let layout = Layout::new();
    let path = layout.root.path().join("no-such-dir").join("graph.png");
    let result = render_chart("empty", &[], &path);
    assert!(matches!(result, Err(CoreError::Chart(_))));
}
