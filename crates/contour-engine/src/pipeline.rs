//! Threshold orchestration: one IDW grid, many isoline levels.

use hazard_common::{LandMask, ReturnPeriod, SampleSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::idw::{build_grid, IdwConfig};
use crate::marching::extract_segments;
use crate::stitch::{stitch_segments, Polyline};

/// Contour levels the original hazard map draws, in m/s.
pub const DEFAULT_THRESHOLDS_MS: [f64; 7] = [30.0, 40.0, 45.0, 50.0, 55.0, 60.0, 70.0];

/// The stitched polylines for one threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourLevel {
    /// Threshold value in the metric's units (m/s for wind speeds).
    pub threshold: f64,
    pub polylines: Vec<Polyline>,
}

/// Contours for every requested threshold, in request order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContourSet {
    pub levels: Vec<ContourLevel>,
}

impl ContourSet {
    /// Total polyline count across all levels.
    pub fn polyline_count(&self) -> usize {
        self.levels.iter().map(|l| l.polylines.len()).sum()
    }

    /// True when no level produced any geometry.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(|l| l.polylines.is_empty())
    }
}

/// Generate evenly spaced threshold values covering a data range,
/// starting from the first multiple of `interval` at or above `min`.
pub fn generate_thresholds(min: f64, max: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0 || max <= min {
        return Vec::new();
    }

    let start = (min / interval).ceil() * interval;
    let mut thresholds = Vec::new();
    let mut level = start;
    while level <= max {
        thresholds.push(level);
        level += interval;
    }
    thresholds
}

/// Run the full contour pipeline for one metric.
///
/// Builds a single IDW grid and reuses it across every threshold,
/// extracting and stitching isolines per level. An empty sample set
/// returns an empty result, and thresholds outside the observed data
/// range simply yield levels with no polylines — neither is an error.
pub fn contour_lines(
    samples: &SampleSet,
    mask: &LandMask,
    metric: ReturnPeriod,
    thresholds: &[f64],
    config: &IdwConfig,
) -> ContourSet {
    if samples.is_empty() {
        return ContourSet::default();
    }

    let grid = build_grid(samples, metric, config);
    if grid.is_empty() {
        return ContourSet::default();
    }

    let mut levels = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let segments = extract_segments(&grid, threshold, mask);
        let polylines = stitch_segments(&segments);
        debug!(
            metric = %metric,
            threshold,
            segments = segments.len(),
            polylines = polylines.len(),
            "extracted contour level"
        );
        levels.push(ContourLevel {
            threshold,
            polylines,
        });
    }

    ContourSet { levels }
}
