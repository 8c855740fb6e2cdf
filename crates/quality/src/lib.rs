//! Water-quality readings and overall irrigation status.
//!
//! This crate holds the reading data model shared by the rest of the
//! workspace and classifies a sample into a green/amber/red status from its
//! EC, SAR and pH.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   reading    │────▶│    classify    │────▶│     status       │
//!  │ (parse JSON) │     │  (thresholds)  │     │ (tier / unknown) │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use sipai_quality::{StatusThresholds, WaterQuality, WaterStatus, assess_overall_status};
//!
//! let json = r#"{"current_readings": {"ec": {"value": "0.8"}, "ph": {"value": 7}}}"#;
//! let reading: WaterQuality = serde_json::from_str(json).unwrap();
//!
//! let assessment = assess_overall_status(Some(&reading), &StatusThresholds::default());
//! assert_eq!(assessment.status, WaterStatus::Amber);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod parameter;
pub mod reading;
pub mod status;

pub use classify::{
    EC_FALLBACK, PH_FALLBACK, SAR_FALLBACK, StatusAssessment, assess_overall_status,
    classify_overall_status, ec_or_fallback,
};
pub use config::StatusThresholds;
pub use error::QualityError;
pub use parameter::{Parameter, format_with_unit};
pub use reading::{CurrentReadings, NumericValue, ParameterReading, WaterQuality, parse_numeric};
pub use status::{Tier, WaterStatus};
