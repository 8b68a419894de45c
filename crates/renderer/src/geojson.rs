//! GeoJSON output for stitched contour lines.
//!
//! Each polyline becomes a LineString feature whose properties carry
//! the threshold in m/s, the rounded mph equivalent, and a display
//! label, ready for an external vector renderer.

use contour_engine::ContourSet;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// m/s to mph.
const MPH_PER_MS: f64 = 2.237;

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create an empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// The feature geometry.
    pub geometry: Geometry,

    /// Free-form properties.
    pub properties: Value,
}

/// GeoJSON geometry types produced by the contour renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A line string geometry.
    LineString {
        /// Array of [longitude, latitude] coordinate pairs.
        coordinates: Vec<[f64; 2]>,
    },
}

impl Geometry {
    /// Create a line string geometry from [lon, lat] pairs.
    pub fn line_string(coordinates: Vec<[f64; 2]>) -> Self {
        Geometry::LineString { coordinates }
    }
}

/// Convert a contour set into a FeatureCollection, one LineString per
/// polyline. Levels with no geometry contribute nothing.
pub fn contour_features(contours: &ContourSet) -> FeatureCollection {
    let mut collection = FeatureCollection::new();

    for level in &contours.levels {
        let mph = (level.threshold * MPH_PER_MS).round() as i64;
        for polyline in &level.polylines {
            let coordinates = polyline
                .points
                .iter()
                .map(|p| [p.lon, p.lat])
                .collect::<Vec<_>>();
            collection.features.push(Feature {
                type_: "Feature".to_string(),
                geometry: Geometry::line_string(coordinates),
                properties: json!({
                    "threshold_ms": level.threshold,
                    "threshold_mph": mph,
                    "label": format!("{} mph ({} m/s)", mph, level.threshold),
                    "closed": polyline.closed,
                }),
            });
        }
    }

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_engine::{ContourLevel, Polyline};
    use hazard_common::GeoPoint;

    fn one_level_set() -> ContourSet {
        ContourSet {
            levels: vec![ContourLevel {
                threshold: 30.0,
                polylines: vec![Polyline {
                    points: vec![
                        GeoPoint::new(0.5, 0.0),
                        GeoPoint::new(0.5, 0.5),
                        GeoPoint::new(0.5, 1.0),
                    ],
                    closed: false,
                }],
            }],
        }
    }

    #[test]
    fn test_line_string_coordinates_lon_first() {
        let collection = contour_features(&one_level_set());
        assert_eq!(collection.features.len(), 1);
        let Geometry::LineString { coordinates } = &collection.features[0].geometry;
        assert_eq!(coordinates[0], [0.0, 0.5]);
        assert_eq!(coordinates[2], [1.0, 0.5]);
    }

    #[test]
    fn test_threshold_properties() {
        let collection = contour_features(&one_level_set());
        let props = &collection.features[0].properties;
        assert_eq!(props["threshold_ms"], 30.0);
        assert_eq!(props["threshold_mph"], 67);
        assert_eq!(props["label"], "67 mph (30 m/s)");
        assert_eq!(props["closed"], false);
    }

    #[test]
    fn test_serializes_as_valid_geojson_shape() {
        let collection = contour_features(&one_level_set());
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert_eq!(value["features"][0]["geometry"]["type"], "LineString");
    }

    #[test]
    fn test_empty_set_gives_empty_collection() {
        let collection = contour_features(&ContourSet::default());
        assert!(collection.features.is_empty());
    }
}
