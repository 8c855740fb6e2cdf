//! Combined advisory report: overall status, parameter readings and crop advice.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use sipai_crops::{CropEntry, CropTable, Recommendation, recommend_crops};
use sipai_quality::{
    Parameter, StatusThresholds, WaterQuality, WaterStatus, assess_overall_status,
};

use crate::error::AdvisoryError;

/// Top-level advisory output.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    /// Overall water status.
    pub overall_status: WaterStatus,
    /// Parameters classified from a fallback value rather than a reading.
    pub defaulted_parameters: Vec<Parameter>,
    /// Known parameters present in the sample, in display order.
    pub parameters: Vec<ParameterSummary>,
    /// crop name -> recommendation
    pub crops: BTreeMap<String, Recommendation>,
}

/// One parameter reading, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSummary {
    pub parameter: Parameter,
    pub label: &'static str,
    /// Parsed value, `None` when the reading is not numeric.
    pub value: Option<f64>,
    /// Raw value with unit, or `N/A`.
    pub display: String,
}

impl AdvisoryReport {
    /// Builds the report.
    ///
    /// Missing inputs produce an `unknown` status and empty sections rather
    /// than an error.
    pub fn build(
        reading: Option<&WaterQuality>,
        crops: Option<&[CropEntry]>,
        thresholds: &StatusThresholds,
        table: &CropTable,
    ) -> Self {
        let assessment = assess_overall_status(reading, thresholds);
        let parameters: Vec<ParameterSummary> = reading
            .and_then(|r| r.current_readings.as_ref())
            .map(|readings| {
                Parameter::ALL
                    .into_iter()
                    .filter_map(|p| {
                        readings.get(p.key()).map(|r| ParameterSummary {
                            parameter: p,
                            label: p.label(),
                            value: r.as_f64(),
                            display: r.display(p.default_unit()),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        let crops = recommend_crops(reading, crops, table);

        info!(
            status = %assessment.status,
            n_parameters = parameters.len(),
            n_crops = crops.len(),
            "advisory report built"
        );

        Self {
            overall_status: assessment.status,
            defaulted_parameters: assessment.defaulted,
            parameters,
            crops,
        }
    }
}

/// Serialize the report to pretty-printed JSON.
pub fn to_json(report: &AdvisoryReport) -> Result<String, AdvisoryError> {
    serde_json::to_string_pretty(report).map_err(|e| AdvisoryError::Serialization {
        reason: e.to_string(),
    })
}
