//! Generators for synthetic samples, sample sets, and masks.

use hazard_common::{GeoPoint, LandMask, Ring, Sample, SampleSet, WindSpeeds};

/// Wind speeds with the same value for every return period.
pub fn uniform_winds(value: f64) -> WindSpeeds {
    WindSpeeds {
        rp10: value,
        rp25: value,
        rp50: value,
        rp100: value,
        rp250: value,
        rp1000: value,
    }
}

/// A sample at (lat, lon) with a uniform wind speed.
pub fn sample_at(lat: f64, lon: f64, value: f64) -> Sample {
    Sample::new(GeoPoint::new(lat, lon), uniform_winds(value))
}

/// Four samples at the corners of the 1°×1° square with origin (0, 0):
/// the bottom row (lat 0) at `low`, the top row (lat 1) at `high`.
pub fn corner_square_samples(low: f64, high: f64) -> SampleSet {
    SampleSet::from_samples(vec![
        sample_at(0.0, 0.0, low),
        sample_at(0.0, 1.0, low),
        sample_at(1.0, 0.0, high),
        sample_at(1.0, 1.0, high),
    ])
}

/// A `rows`×`cols` lattice of samples with 1° spacing from the origin,
/// values increasing northward by `step` per row starting at `base`.
pub fn gradient_samples(rows: usize, cols: usize, base: f64, step: f64) -> SampleSet {
    let mut samples = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            samples.push(sample_at(row as f64, col as f64, base + row as f64 * step));
        }
    }
    SampleSet::from_samples(samples)
}

/// A single square ring spanning ±`half_extent` degrees around the
/// origin: every midpoint in these tests counts as land.
pub fn open_mask(half_extent: f64) -> LandMask {
    let ring = Ring::new(vec![
        GeoPoint::new(-half_extent, -half_extent),
        GeoPoint::new(-half_extent, half_extent),
        GeoPoint::new(half_extent, half_extent),
        GeoPoint::new(half_extent, -half_extent),
    ])
    .expect("square ring is well-formed");
    LandMask::new(vec![ring])
}
