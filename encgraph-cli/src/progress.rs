// ============================================================================
// encgraph-cli/src/progress.rs
// ============================================================================
//
// PROGRESS: indicatif bar for the scoring phase
//
// The core reports (done, total) after each VMAF run; the bar is created
// lazily on the first report since the total is only known after
// classification.

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "  Scoring: {pos}/{len} [{bar:30.cyan/blue}] {percent:>3}% ({elapsed})";

#[derive(Default)]
pub struct ScoringProgress {
    bar: Option<ProgressBar>,
}

impl ScoringProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `done` of `total` assets have been scored.
    pub fn update(&mut self, done: usize, total: usize) {
        let bar = self.bar.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::with_template(TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##."),
            );
            pb
        });
        bar.set_length(total as u64);
        bar.set_position(done as u64);
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
