//! The sample archive: typed dataset keys, the on-disk JSON layout,
//! CSV ingestion with land filtering, and the in-memory store handle.
//!
//! One archive holds the land-filtered point lists for every
//! (scenario, climate model, period) combination; the engine looks a
//! [`SampleSet`](hazard_common::SampleSet) up by [`DatasetKey`] and
//! never touches the archive format itself.

pub mod archive;
pub mod error;
pub mod ingest;
pub mod key;
pub mod store;

pub use archive::{Archive, ArchiveMetadata};
pub use error::{StoreError, StoreResult};
pub use ingest::{ingest_csv, IngestStats, FLORIDA_BBOX};
pub use key::{ClimateModel, DatasetKey, Period, Scenario};
pub use store::SampleStore;
