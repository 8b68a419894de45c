//! Geographic point and bounding box types.

use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 decimal degrees, no projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Planar distance to another point, degrees treated as a flat
    /// metric. Valid at regional scale; no great-circle correction.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared planar distance in degrees.
    pub fn distance_sq(&self, other: &GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        d_lat * d_lat + d_lon * d_lon
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }
}

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Compute the bounding box of a set of points. Returns `None` for
    /// an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::new(first.lon, first.lat, first.lon, first.lat);
        for p in iter {
            bbox.min_lon = bbox.min_lon.min(p.lon);
            bbox.min_lat = bbox.min_lat.min(p.lat);
            bbox.max_lon = bbox.max_lon.max(p.lon);
            bbox.max_lat = bbox.max_lat.max(p.lat);
        }
        Some(bbox)
    }

    /// Width in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a point is contained within this bounding box.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Get the center point of the bounding box.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Expand the bounding box by a buffer amount (in degrees) on every side.
    pub fn expand(&self, buffer: f64) -> Self {
        Self {
            min_lon: self.min_lon - buffer,
            min_lat: self.min_lat - buffer,
            max_lon: self.max_lon + buffer,
            max_lat: self.max_lat + buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_planar() {
        let a = GeoPoint::new(27.0, -82.0);
        let b = GeoPoint::new(27.0, -81.0);
        assert!((a.distance_to(&b) - 1.0).abs() < f64::EPSILON);

        let c = GeoPoint::new(28.0, -81.0);
        assert!((a.distance_to(&c) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let a = GeoPoint::new(26.0, -82.0);
        let b = GeoPoint::new(28.0, -80.0);
        let m = a.midpoint(&b);
        assert!((m.lat - 27.0).abs() < f64::EPSILON);
        assert!((m.lon - -81.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bbox_from_points() {
        let points = [
            GeoPoint::new(25.0, -82.0),
            GeoPoint::new(30.0, -80.0),
            GeoPoint::new(27.0, -87.0),
        ];
        let bbox = BoundingBox::from_points(points.iter()).unwrap();
        assert_eq!(bbox.min_lon, -87.0);
        assert_eq!(bbox.min_lat, 25.0);
        assert_eq!(bbox.max_lon, -80.0);
        assert_eq!(bbox.max_lat, 30.0);

        let empty: &[GeoPoint] = &[];
        assert!(BoundingBox::from_points(empty).is_none());
    }

    #[test]
    fn test_bbox_contains_and_expand() {
        let bbox = BoundingBox::new(-88.0, 24.0, -79.5, 31.0);
        assert!(bbox.contains(-82.5, 27.5));
        assert!(!bbox.contains(-90.0, 27.5));

        let expanded = bbox.expand(0.5);
        assert_eq!(expanded.min_lon, -88.5);
        assert_eq!(expanded.max_lat, 31.5);
        assert!((expanded.width() - bbox.width() - 1.0).abs() < f64::EPSILON);
    }
}
