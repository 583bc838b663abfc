//! Command implementations for the CLI.

/// The chart run: score, group and plot.
pub mod graph;
