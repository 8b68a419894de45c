//! Shared test utilities for the hazard-maps workspace.
//!
//! Provides synthetic sample sets and masks with predictable,
//! hand-verifiable values for use across the test suites.

pub mod generators;

pub use generators::{
    corner_square_samples, gradient_samples, open_mask, sample_at, uniform_winds,
};
