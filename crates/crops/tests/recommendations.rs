//! Integration tests for crop recommendations.

use sipai_crops::{
    CAUTION_MESSAGE, CropEntry, CropKind, CropTable, SAFE_MESSAGE, UNSAFE_MESSAGE,
    classify_crop_recommendations, recommend_crops,
};
use sipai_quality::{Tier, WaterQuality};

fn reading(json: &str) -> WaterQuality {
    serde_json::from_str(json).unwrap()
}

fn crops(names: &[&str]) -> Vec<CropEntry> {
    names.iter().map(|n| CropEntry::new(*n)).collect()
}

fn tier_for(name: &str, ec: f64) -> Tier {
    let wq = WaterQuality::from_values([("ec", ec)]);
    let list = crops(&[name]);
    classify_crop_recommendations(Some(&wq), Some(&list[..]))[name].status
}

#[test]
fn cotton_between_cutoffs_is_amber() {
    let wq = reading(r#"{"current_readings": {"ec": {"value": "5.0"}}}"#);
    let list = crops(&["Cotton"]);
    let recs = classify_crop_recommendations(Some(&wq), Some(&list[..]));

    let cotton = &recs["Cotton"];
    assert_eq!(cotton.status, Tier::Amber);
    assert_eq!(cotton.message, CAUTION_MESSAGE);
    assert!(
        cotton
            .actions
            .iter()
            .any(|a| a.contains("Increase leaching fraction")),
        "actions: {:?}",
        cotton.actions
    );
}

#[test]
fn cotton_above_red_cutoff_is_red() {
    let wq = reading(r#"{"current_readings": {"ec": {"value": "8.0"}}}"#);
    let list = crops(&["Cotton"]);
    let recs = classify_crop_recommendations(Some(&wq), Some(&list[..]));
    assert_eq!(recs["Cotton"].status, Tier::Red);
    assert_eq!(recs["Cotton"].message, UNSAFE_MESSAGE);
}

#[test]
fn mixed_crop_list() {
    let wq = WaterQuality::from_values([("ec", 1.1)]);
    let list = crops(&["Sweet Corn", "Cotton", "Wheat"]);
    let recs = classify_crop_recommendations(Some(&wq), Some(&list[..]));

    assert_eq!(recs.len(), 3);
    assert_eq!(recs["Sweet Corn"].status, Tier::Amber);
    assert_eq!(
        recs["Sweet Corn"].actions,
        vec!["Increase leaching fraction to 15%", "Monitor crop closely"]
    );
    assert_eq!(recs["Cotton"].status, Tier::Green);
    assert_eq!(recs["Cotton"].message, SAFE_MESSAGE);
    assert_eq!(recs["Wheat"].status, Tier::Amber);
    assert_eq!(
        recs["Wheat"].actions,
        vec!["Increase leaching fraction", "Monitor crop closely"]
    );
}

/// Each crop cutoff, checked exactly at the cutoff and just beyond it.
#[test]
fn crop_cutoffs_are_strict() {
    let eps = 1e-9;
    let cases = [
        ("sweet corn", 0.7, 1.7),
        ("Cotton", 4.0, 7.7),
        ("Tomato", 0.7, 3.0),
    ];
    for (name, amber, red) in cases {
        assert_eq!(tier_for(name, amber), Tier::Green, "{name} at {amber}");
        assert_eq!(tier_for(name, amber + eps), Tier::Amber, "{name} above {amber}");
        assert_eq!(tier_for(name, red), Tier::Amber, "{name} at {red}");
        assert_eq!(tier_for(name, red + eps), Tier::Red, "{name} above {red}");
    }
}

#[test]
fn missing_ec_evaluates_as_zero() {
    let no_current = reading(r#"{"site": "Reservoir"}"#);
    let list = crops(&["Cotton", "Alfalfa"]);
    let recs = classify_crop_recommendations(Some(&no_current), Some(&list[..]));
    assert_eq!(recs.len(), 2);
    assert!(recs.values().all(|r| r.status == Tier::Green));

    let bad_ec = reading(r#"{"current_readings": {"ec": {"value": "n/a"}}}"#);
    let recs = classify_crop_recommendations(Some(&bad_ec), Some(&list[..]));
    assert!(recs.values().all(|r| r.status == Tier::Green));
}

#[test]
fn custom_table_overrides_cutoffs() {
    let wq = WaterQuality::from_values([("ec", 5.0)]);
    let list = crops(&["Cotton", "Citrus"]);
    let table = CropTable::new()
        .with_ec(CropKind::Cotton, 6.0, 9.0)
        .with_ec(CropKind::Generic, 5.5, 6.0);
    let recs = recommend_crops(Some(&wq), Some(&list[..]), &table);
    assert_eq!(recs["Cotton"].status, Tier::Green);
    assert_eq!(recs["Citrus"].status, Tier::Green);
}

#[test]
fn recommendations_are_idempotent() {
    let wq = WaterQuality::from_values([("ec", 2.4)]);
    let list = crops(&["Sweet Corn", "Cotton", "Barley"]);
    let first = classify_crop_recommendations(Some(&wq), Some(&list[..]));
    let second = classify_crop_recommendations(Some(&wq), Some(&list[..]));
    assert_eq!(first, second);
}

#[test]
fn serialized_shape() {
    let wq = WaterQuality::from_values([("ec", 0.5)]);
    let list = crops(&["Cotton"]);
    let recs = classify_crop_recommendations(Some(&wq), Some(&list[..]));
    let json = serde_json::to_value(&recs).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Cotton": {"status": "green", "message": "Safe to irrigate", "actions": []}
        })
    );
}
