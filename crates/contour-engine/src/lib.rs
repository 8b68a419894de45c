//! Scalar-field interpolation and contour extraction.
//!
//! Turns an irregular point cloud of wind-speed samples into:
//! - a continuous raster surface (inverse-distance-weighted grid) for
//!   heat-style rendering, and
//! - stitched isolines at arbitrary threshold values (marching squares
//!   plus segment stitching), restricted to a land mask.
//!
//! Everything here is a pure function of its inputs: grids, segments
//! and polylines are freshly allocated per call and handed to the
//! caller by value.

pub mod grid;
pub mod idw;
pub mod marching;
pub mod pipeline;
pub mod stitch;

pub use grid::ScalarGrid;
pub use idw::{build_grid, IdwConfig};
pub use marching::{extract_segments, GeoSegment};
pub use pipeline::{
    contour_lines, generate_thresholds, ContourLevel, ContourSet, DEFAULT_THRESHOLDS_MS,
};
pub use stitch::{stitch_segments, Polyline};
