//! Inverse-distance-weighted gridding of irregular samples.

use hazard_common::{GeoPoint, ReturnPeriod, SampleSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::ScalarGrid;

/// Samples at least this close to a node set its value exactly instead
/// of blending, which avoids divide-by-near-zero weights and guarantees
/// the surface passes through sample locations.
const EXACT_MATCH_EPSILON: f64 = 0.001;

/// A node needs this many in-range samples before interpolation is
/// trusted; one isolated sample cannot justify a surface around itself.
const MIN_SUPPORT: usize = 2;

/// Configuration for IDW grid construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdwConfig {
    /// Node count in the longitude direction.
    pub nx: usize,
    /// Node count in the latitude direction.
    pub ny: usize,
    /// Margin added to the sample bounding box on every side, degrees.
    pub padding_degrees: f64,
    /// Distance exponent for the weight 1/d^power.
    pub power: f64,
    /// Samples beyond this planar distance (degrees) do not contribute.
    pub max_influence_distance: f64,
}

impl Default for IdwConfig {
    fn default() -> Self {
        Self {
            nx: 150,
            ny: 150,
            padding_degrees: 0.05,
            power: 2.0,
            max_influence_distance: 0.15,
        }
    }
}

impl IdwConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("IDW_GRID_NX") {
            if let Ok(nx) = val.parse() {
                config.nx = nx;
            }
        }

        if let Ok(val) = std::env::var("IDW_GRID_NY") {
            if let Ok(ny) = val.parse() {
                config.ny = ny;
            }
        }

        if let Ok(val) = std::env::var("IDW_PADDING_DEGREES") {
            if let Ok(padding) = val.parse() {
                config.padding_degrees = padding;
            }
        }

        if let Ok(val) = std::env::var("IDW_MAX_INFLUENCE_DISTANCE") {
            if let Ok(dist) = val.parse() {
                config.max_influence_distance = dist;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.nx < 2 || self.ny < 2 {
            return Err("grid needs at least 2 nodes per axis".to_string());
        }
        if self.power <= 0.0 {
            return Err("power must be > 0".to_string());
        }
        if self.max_influence_distance <= 0.0 {
            return Err("max_influence_distance must be > 0".to_string());
        }
        if self.padding_degrees < 0.0 {
            return Err("padding_degrees must be >= 0".to_string());
        }
        Ok(())
    }
}

/// Rasterize a sample set onto a regular lat/lon node grid.
///
/// The bounding box is the sample extent expanded by the configured
/// padding; node spacing is `width/(nx-1)` × `height/(ny-1)` so the
/// grid includes both extremes. Each node blends the samples within
/// `max_influence_distance` with weight 1/d^power, except that a sample
/// within [`EXACT_MATCH_EPSILON`] pins the node to that sample's value.
/// A node is valid only when at least [`MIN_SUPPORT`] in-range samples
/// support it.
///
/// Degenerate input (no samples, or fewer than 2 nodes per axis) yields
/// an empty all-invalid grid, not an error.
pub fn build_grid(samples: &SampleSet, metric: ReturnPeriod, config: &IdwConfig) -> ScalarGrid {
    let bbox = match samples.bounding_box() {
        Some(bbox) => bbox.expand(config.padding_degrees),
        None => return ScalarGrid::empty(),
    };
    if config.nx < 2 || config.ny < 2 {
        return ScalarGrid::empty();
    }

    let dx = bbox.width() / (config.nx - 1) as f64;
    let dy = bbox.height() / (config.ny - 1) as f64;
    let max_dist_sq = config.max_influence_distance * config.max_influence_distance;
    let epsilon_sq = EXACT_MATCH_EPSILON * EXACT_MATCH_EPSILON;

    let mut values = vec![0.0; config.nx * config.ny];
    let mut valid = vec![false; config.nx * config.ny];
    let mut range: Option<(f64, f64)> = None;

    for iy in 0..config.ny {
        let lat = bbox.min_lat + iy as f64 * dy;
        for ix in 0..config.nx {
            let lon = bbox.min_lon + ix as f64 * dx;

            let mut weight_sum = 0.0;
            let mut value_sum = 0.0;
            let mut support = 0usize;
            let mut exact: Option<f64> = None;

            for sample in samples {
                let d_lat = lat - sample.location.lat;
                let d_lon = lon - sample.location.lon;
                let dist_sq = d_lat * d_lat + d_lon * d_lon;

                if dist_sq >= max_dist_sq {
                    continue;
                }
                support += 1;

                // The first epsilon-match pins the node; later samples
                // still count toward support but never override it.
                if exact.is_some() {
                    continue;
                }
                if dist_sq < epsilon_sq {
                    exact = Some(sample.value(metric));
                    continue;
                }

                // Power 2 is the common case and divides by the squared
                // distance directly, skipping the square root.
                let weight = if config.power == 2.0 {
                    1.0 / dist_sq
                } else {
                    1.0 / dist_sq.sqrt().powf(config.power)
                };
                weight_sum += weight;
                value_sum += weight * sample.value(metric);
            }

            if support < MIN_SUPPORT {
                continue;
            }
            let value = match exact {
                Some(v) => v,
                None if weight_sum > 0.0 => value_sum / weight_sum,
                None => continue,
            };

            let idx = iy * config.nx + ix;
            values[idx] = value;
            valid[idx] = true;
            range = Some(match range {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
    }

    let grid = ScalarGrid::from_parts(
        config.nx,
        config.ny,
        GeoPoint::new(bbox.min_lat, bbox.min_lon),
        dx,
        dy,
        values,
        valid,
        range,
    );

    debug!(
        metric = %metric,
        samples = samples.len(),
        nx = config.nx,
        ny = config.ny,
        valid_nodes = grid.valid_count(),
        value_range = ?grid.value_range(),
        "built IDW grid"
    );

    grid
}
