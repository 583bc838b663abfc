//! Asset classification.
//!
//! Turns the distorted directory into a list of assets: one descriptor
//! (encoder, size, encode time) plus one quality request (reference path,
//! distorted path, dimensions) per file whose name matches a suffix rule.
//! Files are visited in lexicographic filename order so output is stable.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config::CoreConfig;
use crate::dimensions::DimensionCache;
use crate::encoder::{EncoderType, match_suffix, reference_name};
use crate::error::{CoreError, CoreResult};
use crate::external::{DimensionProbe, Dimensions, FileMetadataProvider};
use crate::identifier::asset_id;
use crate::timing::TimingTable;

/// Measured facts about one distorted file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDescriptor {
    pub identifier: u64,
    pub filename: String,
    pub encoder: EncoderType,
    pub file_size_bytes: u64,
    pub encode_time_seconds: f64,
}

/// A reference/distorted pair to be scored at the given dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityRequest {
    pub identifier: u64,
    pub reference_path: PathBuf,
    pub distorted_path: PathBuf,
    pub dimensions: Dimensions,
}

/// Descriptor and quality request for the same file.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedAsset {
    pub descriptor: AssetDescriptor,
    pub request: QualityRequest,
}

/// Result of one classification pass, in filename order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub assets: Vec<ClassifiedAsset>,
}

impl Classification {
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.assets.iter().map(|a| &a.descriptor)
    }

    pub fn requests(&self) -> impl Iterator<Item = &QualityRequest> {
        self.assets.iter().map(|a| &a.request)
    }
}

/// Classifies every file in `config.distorted_dir`.
///
/// Entries that are not regular files, have non UTF-8 names, or match no
/// suffix rule are skipped. Any filesystem or probe error aborts the pass,
/// including an entry that cannot be stat'ed (e.g. a dangling symlink).
pub fn classify<P, M>(
    config: &CoreConfig,
    timing: &TimingTable,
    cache: &mut DimensionCache<P>,
    metadata: &M,
) -> CoreResult<Classification>
where
    P: DimensionProbe,
    M: FileMetadataProvider,
{
    let dir = &config.distorted_dir;
    let read_dir = fs::read_dir(dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to read distorted directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();
        // Follows symlinks; a dangling link is a stat failure, not a skip.
        let file_type = fs::metadata(&path)
            .map_err(|e| {
                CoreError::PathError(format!("Failed to stat '{}': {}", path.display(), e))
            })?
            .file_type();
        if !file_type.is_file() {
            log::debug!("Skipping non-file entry {}", path.display());
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => log::debug!("Skipping non UTF-8 filename {:?}", name),
        }
    }
    names.sort();

    let mut assets = Vec::new();
    let mut seen_ids: HashMap<u64, String> = HashMap::new();
    for name in names {
        let Some(rule) = match_suffix(&name, &config.suffix_rules) else {
            log::debug!("Skipping {}: no encoder suffix", name);
            continue;
        };

        let ref_name = reference_name(&name, rule, &config.reference_extension);
        let dimensions = cache.get(&ref_name)?;
        let identifier = asset_id(&name);
        if let Some(other) = seen_ids.insert(identifier, name.clone()) {
            log::warn!(
                "Asset identifier {} shared by {} and {}; scores may be misattributed",
                identifier,
                other,
                name
            );
        }

        let distorted_path = config.distorted_path(&name);
        let file_size_bytes = metadata.get_size(&distorted_path)?;
        let encode_time_seconds = timing.elapsed(&name);
        if !timing.contains(&name) {
            log::debug!("No timing entry for {}; using 0", name);
        }

        log::debug!(
            "Classified {} as {} (ref {}, {}, {} bytes, {:.2}s)",
            name,
            rule.encoder,
            ref_name,
            dimensions,
            file_size_bytes,
            encode_time_seconds
        );

        assets.push(ClassifiedAsset {
            descriptor: AssetDescriptor {
                identifier,
                filename: name,
                encoder: rule.encoder,
                file_size_bytes,
                encode_time_seconds,
            },
            request: QualityRequest {
                identifier,
                reference_path: config.reference_path(&ref_name),
                distorted_path,
                dimensions,
            },
        });
    }

    log::info!(
        "Classified {} file(s) in {} ({} reference probe(s))",
        assets.len(),
        dir.display(),
        cache.probe_count()
    );
    Ok(Classification { assets })
}
