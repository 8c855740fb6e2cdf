//! Overall water-status classification.
//!
//! Reads EC, SAR and pH from a [`WaterQuality`] sample and maps them to a
//! [`WaterStatus`] through [`StatusThresholds`]. Missing or non-numeric
//! readings fall back to neutral values (EC 0, SAR 0, pH 7); the fallback
//! is reported in [`StatusAssessment::defaulted`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StatusThresholds;
use crate::parameter::Parameter;
use crate::reading::{CurrentReadings, WaterQuality};
use crate::status::WaterStatus;

/// EC used when the sensor value is missing.
pub const EC_FALLBACK: f64 = 0.0;
/// SAR used when the sensor value is missing.
pub const SAR_FALLBACK: f64 = 0.0;
/// pH used when the sensor value is missing.
pub const PH_FALLBACK: f64 = 7.0;

/// Result of an overall status classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusAssessment {
    pub status: WaterStatus,
    /// Parameters whose value was missing or invalid and replaced by a fallback.
    pub defaulted: Vec<Parameter>,
}

impl StatusAssessment {
    fn unknown() -> Self {
        Self {
            status: WaterStatus::Unknown,
            defaulted: Vec::new(),
        }
    }

    /// True when every classified parameter came from an actual reading.
    pub fn is_complete(&self) -> bool {
        self.status != WaterStatus::Unknown && self.defaulted.is_empty()
    }
}

/// Classifies a sample with the default thresholds.
///
/// Returns [`WaterStatus::Unknown`] when the sample or its current readings
/// are absent. Never fails: invalid values fall back to EC 0, SAR 0, pH 7.
///
/// ```
/// use sipai_quality::{WaterQuality, WaterStatus, classify_overall_status};
///
/// let reading = WaterQuality::from_values([("ec", 3.5)]);
/// assert_eq!(classify_overall_status(Some(&reading)), WaterStatus::Red);
/// assert_eq!(classify_overall_status(None), WaterStatus::Unknown);
/// ```
pub fn classify_overall_status(reading: Option<&WaterQuality>) -> WaterStatus {
    assess_overall_status(reading, &StatusThresholds::default()).status
}

/// Classifies a sample and reports which parameters were defaulted.
///
/// `thresholds` is trusted as given; call [`StatusThresholds::validate`]
/// when building it from user input.
pub fn assess_overall_status(
    reading: Option<&WaterQuality>,
    thresholds: &StatusThresholds,
) -> StatusAssessment {
    let Some(readings) = reading.and_then(|r| r.current_readings.as_ref()) else {
        debug!("no current readings, status unknown");
        return StatusAssessment::unknown();
    };

    let mut defaulted = Vec::new();
    let ec = value_or_fallback(readings, Parameter::Ec, EC_FALLBACK, &mut defaulted);
    let sar = value_or_fallback(readings, Parameter::Sar, SAR_FALLBACK, &mut defaulted);
    let ph = value_or_fallback(readings, Parameter::Ph, PH_FALLBACK, &mut defaulted);

    let status = WaterStatus::from(thresholds.classify(ec, sar, ph));
    debug!(ec, sar, ph, %status, "classified overall water status");

    StatusAssessment { status, defaulted }
}

/// Looks up `parameter`, recording it in `defaulted` when the fallback is used.
fn value_or_fallback(
    readings: &CurrentReadings,
    parameter: Parameter,
    fallback: f64,
    defaulted: &mut Vec<Parameter>,
) -> f64 {
    match readings.value_of(parameter) {
        Some(v) => v,
        None => {
            warn!(
                parameter = parameter.key(),
                fallback, "reading missing or invalid, using fallback"
            );
            defaulted.push(parameter);
            fallback
        }
    }
}

/// EC of a sample, or [`EC_FALLBACK`] when absent.
pub fn ec_or_fallback(reading: &WaterQuality) -> f64 {
    reading
        .current_readings
        .as_ref()
        .and_then(|r| r.value_of(Parameter::Ec))
        .unwrap_or(EC_FALLBACK)
}
