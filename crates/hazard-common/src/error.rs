//! Error types for hazard-maps crates.

use thiserror::Error;

/// Result type alias using HazardError.
pub type HazardResult<T> = Result<T, HazardError>;

/// Primary error type for the shared data model.
#[derive(Debug, Error)]
pub enum HazardError {
    /// A polygon ring with fewer than 3 vertices cannot classify points.
    #[error("malformed ring: {0}")]
    MalformedRing(String),

    /// A return-period key that is not one of the known identifiers.
    #[error("unknown return period: {0}")]
    UnknownReturnPeriod(String),
}
