//! Common types shared across the hazard-maps workspace.

pub mod error;
pub mod geo;
pub mod mask;
pub mod metric;
pub mod sample;

pub use error::{HazardError, HazardResult};
pub use geo::{BoundingBox, GeoPoint};
pub use mask::{LandMask, Ring};
pub use metric::{ReturnPeriod, WindSpeeds};
pub use sample::{Sample, SampleSet};
