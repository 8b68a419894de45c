//! The on-disk JSON archive: scenario → model → period → point list.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use hazard_common::Sample;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreResult;
use crate::key::DatasetKey;

/// Optional provenance header stored under the `_meta` key, which can
/// never collide with a scenario name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveMetadata {
    /// When the archive was generated.
    pub generated: DateTime<Utc>,
    /// Free-form description of the source data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The archive file layout. Point lists are keyed by scenario, then
/// model, then period, exactly as the extraction tooling writes them;
/// absent combinations mean "no data", not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Archive {
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ArchiveMetadata>,

    #[serde(flatten)]
    scenarios: BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<Sample>>>>,
}

impl Archive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the point list for one dataset, replacing any previous
    /// entry.
    pub fn insert(&mut self, key: DatasetKey, samples: Vec<Sample>) {
        self.scenarios
            .entry(key.scenario.to_string())
            .or_default()
            .entry(key.model.to_string())
            .or_default()
            .insert(key.period.to_string(), samples);
    }

    /// Point list for one dataset, if present.
    pub fn get(&self, key: &DatasetKey) -> Option<&[Sample]> {
        self.scenarios
            .get(key.scenario.as_str())?
            .get(key.model.as_str())?
            .get(key.period.as_str())
            .map(|points| points.as_slice())
    }

    /// Iterate every (scenario, model, period) entry with its points,
    /// keys in their raw string form.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str, &[Sample])> {
        self.scenarios.iter().flat_map(|(scenario, models)| {
            models.iter().flat_map(move |(model, periods)| {
                periods.iter().map(move |(period, points)| {
                    (
                        scenario.as_str(),
                        model.as_str(),
                        period.as_str(),
                        points.as_slice(),
                    )
                })
            })
        })
    }

    /// Total number of points across all entries.
    pub fn point_count(&self) -> usize {
        self.entries().map(|(_, _, _, points)| points.len()).sum()
    }

    /// Load an archive from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let archive: Archive = serde_json::from_reader(reader)?;
        info!(
            path = %path.display(),
            points = archive.point_count(),
            "loaded sample archive"
        );
        Ok(archive)
    }

    /// Write the archive to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, self)?;
        info!(
            path = %path.display(),
            points = self.point_count(),
            "saved sample archive"
        );
        Ok(())
    }
}
