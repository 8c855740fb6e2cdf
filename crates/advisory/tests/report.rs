//! Integration test: full advisory report from fixture-shaped JSON.

use serde_json::{Value, json};
use sipai_advisory::{AdvisoryReport, respond, to_json};
use sipai_crops::{CropEntry, CropKind, CropTable};
use sipai_quality::{StatusThresholds, WaterQuality};

fn water_quality() -> WaterQuality {
    serde_json::from_str(
        r#"{
            "location": "Eastern Sector",
            "current_readings": {
                "ph": {"value": "7.0", "unit": ""},
                "ec": {"value": "5.0", "unit": "dS/m"},
                "sar": {"value": "2.1", "unit": ""},
                "no3": {"value": "5.5", "unit": "mg/l"}
            }
        }"#,
    )
    .unwrap()
}

fn crop_list() -> Vec<CropEntry> {
    serde_json::from_str(r#"[{"name": "Cotton"}, {"name": "Sweet Corn"}, {"name": "Wheat"}]"#)
        .unwrap()
}

#[test]
fn report_json_shape() {
    let wq = water_quality();
    let crops = crop_list();
    let report = AdvisoryReport::build(
        Some(&wq),
        Some(crops.as_slice()),
        &StatusThresholds::default(),
        &CropTable::default(),
    );
    let value: Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

    assert_eq!(value["overall_status"], "red");
    assert_eq!(value["defaulted_parameters"], json!([]));
    assert_eq!(value["parameters"].as_array().unwrap().len(), 4);
    assert_eq!(
        value["parameters"][1],
        json!({"parameter": "ec", "label": "EC", "value": 5.0, "display": "5.0 dS/m"})
    );
    assert_eq!(value["crops"]["Cotton"]["status"], "amber");
    assert_eq!(value["crops"]["Sweet Corn"]["status"], "red");
    assert_eq!(value["crops"]["Wheat"]["status"], "red");
    assert_eq!(
        value["crops"]["Wheat"]["actions"],
        json!(["Consider alternative water source", "Apply gypsum"])
    );
}

#[test]
fn report_respects_custom_thresholds() {
    let wq = water_quality();
    let crops = crop_list();
    let thresholds = StatusThresholds::new().with_ec(6.0, 8.0);
    let table = CropTable::new()
        .with_ec(CropKind::SweetCorn, 6.0, 8.0)
        .with_ec(CropKind::Generic, 6.0, 8.0);
    let report = AdvisoryReport::build(Some(&wq), Some(crops.as_slice()), &thresholds, &table);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["overall_status"], "green");
    assert_eq!(value["crops"]["Sweet Corn"]["status"], "green");
    assert_eq!(value["crops"]["Cotton"]["status"], "amber");
}

#[test]
fn advisor_answers_report_questions() {
    let reply = respond("What does the high EC level mean for my farm?").unwrap();
    assert!(reply.contains("moderate salinity"));
    let reply = respond("anything else?").unwrap();
    assert!(reply.starts_with("Thank you for your question."));
}
