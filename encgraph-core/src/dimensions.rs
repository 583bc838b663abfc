//! Per-run cache of reference dimensions.
//!
//! Several distorted files usually share one reference, so each reference is
//! probed at most once per run. The cache is an ordinary value owned by the
//! caller and passed into classification; nothing is kept across runs.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::CoreResult;
use crate::external::{DimensionProbe, Dimensions};

/// Memoizes reference name → probed dimensions.
#[derive(Debug)]
pub struct DimensionCache<P: DimensionProbe> {
    probe: P,
    reference_dir: PathBuf,
    entries: HashMap<String, Dimensions>,
    probe_count: usize,
}

impl<P: DimensionProbe> DimensionCache<P> {
    /// Creates an empty cache resolving reference names against `reference_dir`.
    pub fn new(probe: P, reference_dir: impl Into<PathBuf>) -> Self {
        Self {
            probe,
            reference_dir: reference_dir.into(),
            entries: HashMap::new(),
            probe_count: 0,
        }
    }

    /// Dimensions of the named reference file.
    ///
    /// The first request for a name runs the probe on
    /// `reference_dir/reference_name`; later requests return the stored
    /// value. Probe failures are returned as-is and nothing is cached.
    pub fn get(&mut self, reference_name: &str) -> CoreResult<Dimensions> {
        if let Some(dims) = self.entries.get(reference_name) {
            return Ok(*dims);
        }

        let path = self.reference_dir.join(reference_name);
        log::debug!("Probing reference dimensions: {}", path.display());
        self.probe_count += 1;
        let dims = self.probe.probe_dimensions(&path)?;
        log::debug!("{} is {}", reference_name, dims);

        self.entries.insert(reference_name.to_string(), dims);
        Ok(dims)
    }

    /// Number of probe invocations made so far.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.probe_count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingProbe {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl DimensionProbe for RecordingProbe {
        fn probe_dimensions(&self, path: &Path) -> CoreResult<Dimensions> {
            self.calls.borrow_mut().push(path.to_path_buf());
            if path.ends_with("broken.y4m") {
                return Err(CoreError::DimensionParse("1920".to_string()));
            }
            Ok(Dimensions::new(1920, 1080))
        }
    }

    #[test]
    fn test_probes_once_per_reference() {
        let mut cache = DimensionCache::new(RecordingProbe::default(), "ref");
        assert_eq!(cache.get("a.y4m").unwrap(), Dimensions::new(1920, 1080));
        assert_eq!(cache.get("a.y4m").unwrap(), Dimensions::new(1920, 1080));
        assert_eq!(cache.get("b.y4m").unwrap(), Dimensions::new(1920, 1080));
        assert_eq!(cache.get("a.y4m").unwrap(), Dimensions::new(1920, 1080));

        assert_eq!(cache.probe_count(), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(
            *cache.probe().calls.borrow(),
            vec![PathBuf::from("ref/a.y4m"), PathBuf::from("ref/b.y4m")]
        );
    }

    #[test]
    fn test_probe_failure_propagates_and_is_not_cached() {
        let mut cache = DimensionCache::new(RecordingProbe::default(), "ref");
        assert!(matches!(
            cache.get("broken.y4m"),
            Err(CoreError::DimensionParse(_))
        ));
        assert!(cache.is_empty());
        assert!(cache.get("broken.y4m").is_err());
        assert_eq!(cache.probe_count(), 2);
    }
}
