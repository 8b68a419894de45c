//! Integration tests: ingest → archive file → store round trips.

use chrono::{TimeZone, Utc};
use hazard_common::ReturnPeriod;
use sample_store::{
    ingest_csv, Archive, ArchiveMetadata, ClimateModel, DatasetKey, Period, SampleStore, Scenario,
    FLORIDA_BBOX,
};
use test_utils::sample_at;

fn base_key() -> DatasetKey {
    DatasetKey::new(Scenario::Ssp585, ClimateModel::Cesm2, Period::Base)
}

// ============================================================================
// Archive file round trip
// ============================================================================

#[test]
fn test_archive_save_load_round_trip() {
    let mut archive = Archive::new();
    archive.metadata = Some(ArchiveMetadata {
        generated: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        source: Some("exceedance_intensity csv extraction".to_string()),
    });
    archive.insert(
        base_key(),
        vec![sample_at(27.5, -82.5, 41.5), sample_at(27.6, -82.4, 42.0)],
    );
    archive.insert(
        DatasetKey::new(Scenario::Ssp245, ClimateModel::MultiModelMean, Period::LateCentury),
        vec![sample_at(26.0, -81.0, 48.0)],
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("florida_all_ssp.json");
    archive.save(&path).unwrap();

    let loaded = Archive::load(&path).unwrap();
    assert_eq!(loaded.metadata, archive.metadata);
    assert_eq!(loaded.point_count(), 3);

    let store = SampleStore::from_archive(&loaded);
    assert_eq!(store.len(), 2);
    let samples = store.get(&base_key()).unwrap();
    assert_eq!(samples.len(), 2);
    let (min, max) = samples.value_range(ReturnPeriod::Rp250).unwrap();
    assert_eq!(min, 41.5);
    assert_eq!(max, 42.0);
}

// ============================================================================
// Ingest → store flow
// ============================================================================

#[test]
fn test_ingested_csv_flows_into_store() {
    let mask = hazard_common::mask::regions::florida();
    let csv = "lon,lat,rp10,rp25,rp50,rp100,rp250,rp1000\n\
               -81.4,28.5,20.1,25.2,30.3,35.4,41.5,50.6\n\
               -85.0,26.0,20.1,25.2,30.3,35.4,41.5,50.6\n";

    let (samples, stats) = ingest_csv(csv.as_bytes(), &mask, &FLORIDA_BBOX).unwrap();
    // Orlando-ish point kept; open-Gulf point dropped as sea.
    assert_eq!(stats.kept, 1);
    assert_eq!(stats.sea, 1);

    let mut archive = Archive::new();
    archive.insert(base_key(), samples.as_slice().to_vec());

    let store = SampleStore::from_archive(&archive);
    let stored = store.get(&base_key()).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.as_slice()[0].value(ReturnPeriod::Rp1000), 50.6);
}
