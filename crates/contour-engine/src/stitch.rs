//! Stitching of unordered isoline segments into continuous polylines.

use std::collections::HashMap;

use hazard_common::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::marching::GeoSegment;

/// Endpoints are considered identical after rounding to 4 decimal
/// degrees (~11 m), which absorbs float noise between neighboring
/// cells' crossings.
const KEY_SCALE: f64 = 1e4;

/// An ordered sequence of geographic points, at least 2 long.
///
/// `closed` is set when the last point returns to the first under the
/// endpoint rounding tolerance; the closing point is kept in `points`.
/// Winding direction of closed loops is not normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<GeoPoint>,
    pub closed: bool,
}

fn endpoint_key(p: &GeoPoint) -> (i64, i64) {
    (
        (p.lat * KEY_SCALE).round() as i64,
        (p.lon * KEY_SCALE).round() as i64,
    )
}

/// Merge segments sharing endpoints into polylines.
///
/// Endpoint connectivity is the only linking signal. Each segment is
/// consumed exactly once by a greedy walk: start at the first unused
/// segment, repeatedly attach any unused segment touching the current
/// chain end (flipping it when its far endpoint matches), and stop at a
/// dead end or when the chain returns to its own start. Branch points
/// take the first unused candidate in input order, so assembly is
/// deterministic with respect to segment order.
pub fn stitch_segments(segments: &[GeoSegment]) -> Vec<Polyline> {
    if segments.is_empty() {
        return Vec::new();
    }

    let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, segment) in segments.iter().enumerate() {
        buckets.entry(endpoint_key(&segment.start)).or_default().push(i);
        buckets.entry(endpoint_key(&segment.end)).or_default().push(i);
    }

    let mut used = vec![false; segments.len()];
    let mut polylines = Vec::new();

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let mut points = vec![segments[start_idx].start, segments[start_idx].end];
        let start_key = endpoint_key(&points[0]);
        let mut cursor = endpoint_key(&points[1]);

        loop {
            let Some(candidates) = buckets.get(&cursor) else {
                break;
            };
            let mut next: Option<(usize, bool)> = None;
            for &j in candidates {
                if used[j] {
                    continue;
                }
                if endpoint_key(&segments[j].start) == cursor {
                    next = Some((j, false));
                    break;
                }
                if endpoint_key(&segments[j].end) == cursor {
                    next = Some((j, true));
                    break;
                }
            }

            let Some((j, flip)) = next else {
                break;
            };
            used[j] = true;
            let far = if flip {
                segments[j].start
            } else {
                segments[j].end
            };
            points.push(far);
            cursor = endpoint_key(&far);
            if cursor == start_key {
                // Closed loop; walking on would never terminate.
                break;
            }
        }

        let closed = endpoint_key(points.last().unwrap()) == start_key;
        polylines.push(Polyline { points, closed });
    }

    polylines
}
