//! The in-memory sample store handle.

use std::collections::HashMap;
use std::path::Path;

use hazard_common::SampleSet;
use tracing::{info, warn};

use crate::archive::Archive;
use crate::error::StoreResult;
use crate::key::{ClimateModel, DatasetKey, Period, Scenario};

/// An explicitly owned map from dataset key to sample set.
///
/// Constructed once at startup and passed by reference to whoever needs
/// lookups; there is no process-wide table.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    datasets: HashMap<DatasetKey, SampleSet>,
}

impl SampleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an archive. Entries with keys the store does
    /// not recognize are skipped with a warning, so an archive from a
    /// newer extraction run still loads.
    pub fn from_archive(archive: &Archive) -> Self {
        let mut datasets = HashMap::new();

        for (scenario, model, period, points) in archive.entries() {
            let scenario = match scenario.parse::<Scenario>() {
                Ok(s) => s,
                Err(_) => {
                    warn!(scenario, "skipping unknown scenario in archive");
                    continue;
                }
            };
            let model = match model.parse::<ClimateModel>() {
                Ok(m) => m,
                Err(_) => {
                    warn!(model, "skipping unknown climate model in archive");
                    continue;
                }
            };
            let period = match period.parse::<Period>() {
                Ok(p) => p,
                Err(_) => {
                    warn!(period, "skipping unknown period in archive");
                    continue;
                }
            };

            datasets.insert(
                DatasetKey::new(scenario, model, period),
                SampleSet::from_samples(points.to_vec()),
            );
        }

        info!(datasets = datasets.len(), "built sample store");
        Self { datasets }
    }

    /// Load an archive file and build a store from it.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let archive = Archive::load(path)?;
        Ok(Self::from_archive(&archive))
    }

    /// Insert one dataset directly.
    pub fn insert(&mut self, key: DatasetKey, samples: SampleSet) {
        self.datasets.insert(key, samples);
    }

    /// Sample set for a key, if the archive carried that combination.
    pub fn get(&self, key: &DatasetKey) -> Option<&SampleSet> {
        self.datasets.get(key)
    }

    /// Number of datasets held.
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Check if the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Iterate the keys present.
    pub fn keys(&self) -> impl Iterator<Item = &DatasetKey> {
        self.datasets.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_common::{GeoPoint, Sample, WindSpeeds};

    fn point(v: f64) -> Sample {
        Sample::new(
            GeoPoint::new(27.0, -82.0),
            WindSpeeds {
                rp10: v,
                rp25: v,
                rp50: v,
                rp100: v,
                rp250: v,
                rp1000: v,
            },
        )
    }

    #[test]
    fn test_from_archive_builds_typed_keys() {
        let mut archive = Archive::new();
        let key = DatasetKey::new(Scenario::Ssp370, ClimateModel::EcEarth3, Period::MidCentury);
        archive.insert(key, vec![point(42.0), point(43.0)]);

        let store = SampleStore::from_archive(&archive);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_keys_skipped() {
        let json = r#"{"ssp126": {"CESM2": {"base": []}},
                       "ssp585": {"CESM2": {"base": []}}}"#;
        let archive: Archive = serde_json::from_str(json).unwrap();
        let store = SampleStore::from_archive(&archive);
        // ssp126 is not a supported scenario; only ssp585 survives.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_dataset_is_none() {
        let store = SampleStore::new();
        let key = DatasetKey::new(Scenario::Ssp245, ClimateModel::Miroc6, Period::Base);
        assert!(store.get(&key).is_none());
    }
}
