//! Group summaries and legend labels.

use super::EncoderGroup;
use crate::encoder::EncoderType;

/// Count and means for one encoder group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub encoder: EncoderType,
    pub count: usize,
    pub mean_vmaf: Option<f64>,
    pub mean_time_seconds: Option<f64>,
    pub mean_size_bytes: Option<f64>,
}

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn mean_u64(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64)
    }
}

#[must_use]
pub fn summarize(group: &EncoderGroup) -> GroupSummary {
    GroupSummary {
        encoder: group.encoder,
        count: group.len(),
        mean_vmaf: mean(&group.scores),
        mean_time_seconds: mean(&group.times),
        mean_size_bytes: mean_u64(&group.sizes),
    }
}

/// Legend label such as `SVT-AV1 (mean: 93.25)`.
#[must_use]
pub fn mean_label(encoder: EncoderType, values: &[f64]) -> String {
    match mean(values) {
        Some(m) => format!("{} (mean: {:.2})", encoder, m),
        None => format!("{} (mean: n/a)", encoder),
    }
}

/// Legend label for byte sizes, in kilobytes: `libaom (mean: 12.50kb)`.
#[must_use]
pub fn mean_label_kb(encoder: EncoderType, sizes: &[u64]) -> String {
    match mean_u64(sizes) {
        Some(m) => format!("{} (mean: {:.2}kb)", encoder, m / 1024.0),
        None => format!("{} (mean: n/a)", encoder),
    }
}
