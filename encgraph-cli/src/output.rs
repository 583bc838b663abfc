// encgraph-cli/src/output.rs
//
// Console summary printed after a successful run.

use console::style;
use encgraph_core::{GroupSummary, format_bytes, format_seconds};

pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("\n{}", style(&line).blue());
    println!(" {}", style(text).bold().white());
    println!("{}\n", style(&line).blue());
}

/// One row of the summary table, without styling.
#[must_use]
pub fn summary_row(summary: &GroupSummary) -> String {
    let vmaf = summary
        .mean_vmaf
        .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
    let time = summary
        .mean_time_seconds
        .map_or_else(|| "n/a".to_string(), format_seconds);
    let size = summary
        .mean_size_bytes
        .map_or_else(|| "n/a".to_string(), |b| format_bytes(b.round() as u64));
    format!(
        "{:<12} {:>5} {:>10} {:>12} {:>12}",
        summary.encoder.display_name(),
        summary.count,
        vmaf,
        time,
        size
    )
}

pub fn print_summary(summaries: &[GroupSummary]) {
    print_heading("ENCODER SUMMARY");
    println!(
        "{}",
        style(format!(
            "{:<12} {:>5} {:>10} {:>12} {:>12}",
            "Encoder", "Files", "VMAF", "Time", "Size"
        ))
        .bold()
        .cyan()
    );
    for summary in summaries {
        println!("{}", summary_row(summary));
    }
    println!();
}
