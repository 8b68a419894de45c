//! Sample records and the immutable sample collection fed to
//! interpolation.

use serde::{Deserialize, Serialize};

use crate::geo::{BoundingBox, GeoPoint};
use crate::metric::{ReturnPeriod, WindSpeeds};

/// One land point with its return-period wind speeds.
///
/// Serializes flat as `{lat, lon, rp10, ..., rp1000}`, matching the
/// archive's point records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(flatten)]
    pub location: GeoPoint,
    #[serde(flatten)]
    pub winds: WindSpeeds,
}

impl Sample {
    /// Create a sample.
    pub fn new(location: GeoPoint, winds: WindSpeeds) -> Self {
        Self { location, winds }
    }

    /// Wind speed for the given return period.
    pub fn value(&self, period: ReturnPeriod) -> f64 {
        self.winds.get(period)
    }
}

/// The irregular collection of samples for one dataset selection.
///
/// Read-only to the engine: constructed once per dataset load, then
/// only borrowed. Duplicate locations are tolerated — at grid build
/// time all in-range samples contribute to the weighted average.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Build a set from sample records.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate samples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// The samples as a slice.
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Bounding box of the sample locations. `None` when empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.samples.iter().map(|s| &s.location))
    }

    /// Observed min/max of one metric across the set. `None` when empty.
    pub fn value_range(&self, period: ReturnPeriod) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.value(period));
        let first = iter.next()?;
        let mut range = (first, first);
        for v in iter {
            range.0 = range.0.min(v);
            range.1 = range.1.max(v);
        }
        Some(range)
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
