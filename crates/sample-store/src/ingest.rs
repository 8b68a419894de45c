//! CSV ingestion: exceedance-intensity rows filtered to land points.

use std::io::Read;

use csv::ReaderBuilder;
use hazard_common::{BoundingBox, GeoPoint, LandMask, Sample, SampleSet, WindSpeeds};
use tracing::{debug, warn};

use crate::error::StoreResult;

/// Bounding-box prefilter for the Florida extraction, applied before
/// the polygon test.
pub const FLORIDA_BBOX: BoundingBox = BoundingBox {
    min_lon: -88.0,
    min_lat: 24.0,
    max_lon: -79.5,
    max_lat: 31.0,
};

/// Counters describing one ingest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows read from the file.
    pub total_rows: usize,
    /// Rows kept as land samples.
    pub kept: usize,
    /// Rows rejected by the bounding-box prefilter.
    pub outside_bbox: usize,
    /// Rows inside the box but off the land mask.
    pub sea: usize,
    /// Rows with too few columns or unparseable numbers.
    pub malformed: usize,
}

/// Round to a fixed number of decimal places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Read exceedance-intensity CSV rows into a land-filtered sample set.
///
/// Column order is `lon, lat, rp10, rp25, rp50, rp100, rp250, rp1000`
/// (longitude first), with a header row. A row is kept when it passes
/// the bounding-box prefilter and the land-mask containment test.
/// Coordinates are rounded to 2 decimals and speeds to 1, matching the
/// archive's precision. Malformed rows are counted and skipped, never
/// fatal.
pub fn ingest_csv<R: Read>(
    reader: R,
    mask: &LandMask,
    bbox: &BoundingBox,
) -> StoreResult<(SampleSet, IngestStats)> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut stats = IngestStats::default();
    let mut samples = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        stats.total_rows += 1;

        let mut fields = [0f64; 8];
        let mut ok = record.len() >= 8;
        if ok {
            for (i, field) in fields.iter_mut().enumerate() {
                match record[i].trim().parse::<f64>() {
                    Ok(v) => *field = v,
                    Err(_) => {
                        ok = false;
                        break;
                    }
                }
            }
        }
        if !ok {
            stats.malformed += 1;
            warn!(row = stats.total_rows, "skipping malformed CSV row");
            continue;
        }

        let [lon, lat, rp10, rp25, rp50, rp100, rp250, rp1000] = fields;

        if !bbox.contains(lon, lat) {
            stats.outside_bbox += 1;
            continue;
        }
        let location = GeoPoint::new(lat, lon);
        if !mask.contains(&location) {
            stats.sea += 1;
            continue;
        }

        samples.push(Sample::new(
            GeoPoint::new(round_to(lat, 2), round_to(lon, 2)),
            WindSpeeds {
                rp10: round_to(rp10, 1),
                rp25: round_to(rp25, 1),
                rp50: round_to(rp50, 1),
                rp100: round_to(rp100, 1),
                rp250: round_to(rp250, 1),
                rp1000: round_to(rp1000, 1),
            },
        ));
        stats.kept += 1;
    }

    debug!(?stats, "ingested CSV");
    Ok((SampleSet::from_samples(samples), stats))
}
