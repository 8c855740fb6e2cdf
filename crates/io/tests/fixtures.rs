//! Integration test: loading fixtures from a data directory.

use std::fs;

use sipai_crops::CropEntry;
use sipai_io::{CROPS_FIXTURE, DataSource, IoError, WATER_QUALITY_FIXTURE};
use sipai_quality::{Parameter, WaterQuality};

fn write_fixture(dir: &tempfile::TempDir, name: &str, body: &str) {
    fs::write(dir.path().join(format!("{name}.json")), body).expect("write fixture");
}

#[test]
fn read_water_quality_fixture() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(
        &dir,
        WATER_QUALITY_FIXTURE,
        r#"{
            "location": "Farm Main Intake",
            "current_readings": {
                "ec": {"value": "1.1", "unit": "dS/m"},
                "ph": {"value": "7.0", "unit": ""},
                "sar": {"value": "2.1", "unit": ""}
            }
        }"#,
    );

    let src = DataSource::new(dir.path());
    let wq: WaterQuality = src.read(WATER_QUALITY_FIXTURE).unwrap();
    let readings = wq.current_readings.expect("current readings present");
    assert_eq!(readings.value_of(Parameter::Ec), Some(1.1));
    assert_eq!(readings.value_of(Parameter::Sar), Some(2.1));
}

#[test]
fn read_crops_fixture() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(
        &dir,
        CROPS_FIXTURE,
        r#"[{"name": "Cotton"}, {"name": "Sweet Corn"}]"#,
    );

    let crops: Vec<CropEntry> = DataSource::new(dir.path()).read(CROPS_FIXTURE).unwrap();
    assert_eq!(
        crops,
        vec![CropEntry::new("Cotton"), CropEntry::new("Sweet Corn")]
    );
}

#[test]
fn read_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result: Result<Vec<CropEntry>, _> = DataSource::new(dir.path()).read("crops");
    let err = result.unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn read_malformed_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(&dir, "crops", "[{\"name\": ");
    let result: Result<Vec<CropEntry>, _> = DataSource::new(dir.path()).read("crops");
    let err = result.unwrap_err();
    assert!(
        matches!(err, IoError::Parse { .. }),
        "expected Parse, got {err:?}",
    );
    assert!(err.to_string().contains("crops.json"));
}

#[test]
fn read_wrong_shape() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(&dir, "crops", r#"{"name": "Cotton"}"#);
    let result: Result<Vec<CropEntry>, _> = DataSource::new(dir.path()).read("crops");
    assert!(matches!(result, Err(IoError::Parse { .. })));
}

#[test]
fn read_directory_as_fixture() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::create_dir(dir.path().join("crops.json")).expect("create dir");
    let result: Result<Vec<CropEntry>, _> = DataSource::new(dir.path()).read("crops");
    assert!(matches!(result, Err(IoError::Read { .. })));
}

#[test]
fn fetch_returns_none_on_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let src = DataSource::new(dir.path());

    let missing: Option<WaterQuality> = src.fetch(WATER_QUALITY_FIXTURE);
    assert!(missing.is_none());

    write_fixture(&dir, "broken", "not json");
    let broken: Option<WaterQuality> = src.fetch("broken");
    assert!(broken.is_none());

    let invalid: Option<WaterQuality> = src.fetch("../water_quality");
    assert!(invalid.is_none());
}

#[test]
fn fetch_returns_value_on_success() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(&dir, CROPS_FIXTURE, r#"[{"name": "Wheat"}]"#);
    let crops: Option<Vec<CropEntry>> = DataSource::new(dir.path()).fetch(CROPS_FIXTURE);
    assert_eq!(crops, Some(vec![CropEntry::new("Wheat")]));
}
