//! Joining scores back onto assets and grouping them by encoder.
//!
//! Grouping is the last step before charting: each group carries the ordered
//! score, time and size sequences for one encoder. Means are only computed
//! for summaries and legend labels.

mod summary;

use std::collections::HashMap;

use crate::assets::AssetDescriptor;
use crate::encoder::EncoderType;
use crate::error::{CoreError, CoreResult};
use crate::quality::QualityScore;

pub use summary::{GroupSummary, mean, mean_label, mean_label_kb, summarize};

/// An asset descriptor with its quality score attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAsset {
    pub descriptor: AssetDescriptor,
    pub vmaf: f64,
}

/// Ordered per-encoder sequences handed to the chart renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderGroup {
    pub encoder: EncoderType,
    pub identifiers: Vec<u64>,
    pub scores: Vec<f64>,
    pub times: Vec<f64>,
    pub sizes: Vec<u64>,
}

impl EncoderGroup {
    fn new(encoder: EncoderType) -> Self {
        Self {
            encoder,
            identifiers: Vec::new(),
            scores: Vec::new(),
            times: Vec::new(),
            sizes: Vec::new(),
        }
    }

    fn push(&mut self, asset: &ScoredAsset) {
        self.identifiers.push(asset.descriptor.identifier);
        self.scores.push(asset.vmaf);
        self.times.push(asset.descriptor.encode_time_seconds);
        self.sizes.push(asset.descriptor.file_size_bytes);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Attaches scores to descriptors by identifier, keeping descriptor order.
///
/// Every descriptor must have a score. Extra scores are ignored. When two
/// scores share an identifier the later one wins, so descriptors whose
/// identifiers collide all receive that same score.
pub fn join_scores<'a, I>(descriptors: I, scores: &[QualityScore]) -> CoreResult<Vec<ScoredAsset>>
where
    I: IntoIterator<Item = &'a AssetDescriptor>,
{
    let by_id: HashMap<u64, f64> = scores.iter().map(|s| (s.identifier, s.vmaf)).collect();
    descriptors
        .into_iter()
        .map(|descriptor| {
            let vmaf = by_id
                .get(&descriptor.identifier)
                .copied()
                .ok_or(CoreError::MissingScore(descriptor.identifier))?;
            Ok(ScoredAsset {
                descriptor: descriptor.clone(),
                vmaf,
            })
        })
        .collect()
}

/// Groups scored assets by encoder.
///
/// Groups follow `EncoderType` declaration order and only encoders with at
/// least one asset appear. Within a group, input order is preserved.
#[must_use]
pub fn group_by_encoder(scored: &[ScoredAsset]) -> Vec<EncoderGroup> {
    EncoderType::ALL
        .iter()
        .filter_map(|&encoder| {
            let mut group = EncoderGroup::new(encoder);
            scored
                .iter()
                .filter(|a| a.descriptor.encoder == encoder)
                .for_each(|a| group.push(a));
            (!group.is_empty()).then_some(group)
        })
        .collect()
}
