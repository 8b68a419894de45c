//! Marching-squares isoline extraction over a scalar grid.

use hazard_common::{GeoPoint, LandMask};

use crate::grid::ScalarGrid;

/// Edge crossings between two corners closer in value than this
/// degenerate to the edge midpoint instead of dividing by the delta.
const FLAT_EDGE_EPSILON: f64 = 1e-12;

/// One undivided piece of an isoline in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoSegment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl GeoSegment {
    /// Midpoint of the segment, used for the land-mask test.
    pub fn midpoint(&self) -> GeoPoint {
        self.start.midpoint(&self.end)
    }
}

/// A point in fractional grid-index space.
#[derive(Debug, Clone, Copy)]
struct GridPos {
    x: f64,
    y: f64,
}

/// Where the threshold crosses the edge between two corners, by linear
/// interpolation; flat edges fall back to the midpoint.
fn edge_crossing(
    threshold: f64,
    value_a: f64,
    value_b: f64,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
) -> GridPos {
    let delta = value_b - value_a;
    if delta.abs() < FLAT_EDGE_EPSILON {
        return GridPos {
            x: (ax + bx) / 2.0,
            y: (ay + by) / 2.0,
        };
    }
    let t = (threshold - value_a) / delta;
    GridPos {
        x: ax + t * (bx - ax),
        y: ay + t * (by - ay),
    }
}

/// Extract unconnected isoline segments at one threshold.
///
/// Walks every 2×2 cell of adjacent nodes. Cells touching any invalid
/// node are skipped entirely, so no geometry crosses unsampled regions.
/// Corner values ≥ threshold set the case bits TL=1, TR=2, BR=4, BL=8;
/// the two saddle cases are resolved by comparing the cell-center
/// average against the threshold. Segments are converted to geographic
/// coordinates and dropped when their midpoint is off the land mask.
///
/// A flat field exactly at the threshold yields nothing: every corner
/// counts as ≥ threshold, which is case 15.
pub fn extract_segments(grid: &ScalarGrid, threshold: f64, mask: &LandMask) -> Vec<GeoSegment> {
    if grid.nx() < 2 || grid.ny() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::new();

    for iy in 0..grid.ny() - 1 {
        for ix in 0..grid.nx() - 1 {
            if !grid.is_valid(ix, iy)
                || !grid.is_valid(ix + 1, iy)
                || !grid.is_valid(ix, iy + 1)
                || !grid.is_valid(ix + 1, iy + 1)
            {
                continue;
            }

            let tl = grid.value(ix, iy);
            let tr = grid.value(ix + 1, iy);
            let br = grid.value(ix + 1, iy + 1);
            let bl = grid.value(ix, iy + 1);

            let mut case = 0u8;
            if tl >= threshold {
                case |= 1;
            }
            if tr >= threshold {
                case |= 2;
            }
            if br >= threshold {
                case |= 4;
            }
            if bl >= threshold {
                case |= 8;
            }

            if case == 0 || case == 15 {
                continue;
            }

            let x = ix as f64;
            let y = iy as f64;
            let top = edge_crossing(threshold, tl, tr, x, y, x + 1.0, y);
            let right = edge_crossing(threshold, tr, br, x + 1.0, y, x + 1.0, y + 1.0);
            let bottom = edge_crossing(threshold, bl, br, x, y + 1.0, x + 1.0, y + 1.0);
            let left = edge_crossing(threshold, tl, bl, x, y, x, y + 1.0);

            let mut emit = |a: GridPos, b: GridPos| {
                let segment = GeoSegment {
                    start: grid.grid_to_geo(a.x, a.y),
                    end: grid.grid_to_geo(b.x, b.y),
                };
                if mask.contains(&segment.midpoint()) {
                    segments.push(segment);
                }
            };

            match case {
                1 | 14 => emit(left, top),
                2 | 13 => emit(top, right),
                3 | 12 => emit(left, right),
                4 | 11 => emit(right, bottom),
                6 | 9 => emit(top, bottom),
                7 | 8 => emit(bottom, left),
                // Saddles: opposite corners agree, and the pairing is
                // decided by whether the cell center sits above the
                // threshold.
                5 => {
                    let center = (tl + tr + br + bl) / 4.0;
                    if center >= threshold {
                        emit(top, right);
                        emit(bottom, left);
                    } else {
                        emit(left, top);
                        emit(right, bottom);
                    }
                }
                10 => {
                    let center = (tl + tr + br + bl) / 4.0;
                    if center >= threshold {
                        emit(left, top);
                        emit(right, bottom);
                    } else {
                        emit(top, right);
                        emit(bottom, left);
                    }
                }
                _ => {}
            }
        }
    }

    segments
}
