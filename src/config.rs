use std::path::PathBuf;

use serde::Deserialize;

/// Top-level SIP AI configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SipaiConfig {
    /// Fixture settings.
    #[serde(default)]
    pub io: IoToml,

    /// Overall status cutoffs.
    #[serde(default)]
    pub thresholds: ThresholdsToml,

    /// Per-crop EC cutoff overrides.
    #[serde(default)]
    pub crops: CropsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_water_quality")]
    pub water_quality: String,
    #[serde(default = "default_crops")]
    pub crops: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            water_quality: default_water_quality(),
            crops: default_crops(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_water_quality() -> String {
    sipai_io::WATER_QUALITY_FIXTURE.to_string()
}
fn default_crops() -> String {
    sipai_io::CROPS_FIXTURE.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsToml {
    #[serde(default = "default_ec_amber")]
    pub ec_amber: f64,
    #[serde(default = "default_ec_red")]
    pub ec_red: f64,
    #[serde(default = "default_sar_amber")]
    pub sar_amber: f64,
    #[serde(default = "default_sar_red")]
    pub sar_red: f64,
    #[serde(default = "default_ph_amber_low")]
    pub ph_amber_low: f64,
    #[serde(default = "default_ph_amber_high")]
    pub ph_amber_high: f64,
    #[serde(default = "default_ph_red_low")]
    pub ph_red_low: f64,
    #[serde(default = "default_ph_red_high")]
    pub ph_red_high: f64,
}

impl Default for ThresholdsToml {
    fn default() -> Self {
        Self {
            ec_amber: default_ec_amber(),
            ec_red: default_ec_red(),
            sar_amber: default_sar_amber(),
            sar_red: default_sar_red(),
            ph_amber_low: default_ph_amber_low(),
            ph_amber_high: default_ph_amber_high(),
            ph_red_low: default_ph_red_low(),
            ph_red_high: default_ph_red_high(),
        }
    }
}

fn default_ec_amber() -> f64 {
    0.7
}
fn default_ec_red() -> f64 {
    3.0
}
fn default_sar_amber() -> f64 {
    3.0
}
fn default_sar_red() -> f64 {
    9.0
}
fn default_ph_amber_low() -> f64 {
    6.0
}
fn default_ph_amber_high() -> f64 {
    8.5
}
fn default_ph_red_low() -> f64 {
    5.0
}
fn default_ph_red_high() -> f64 {
    9.0
}

/// Crop overrides. Crops left out keep their built-in cutoffs.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropsToml {
    #[serde(default)]
    pub sweet_corn: Option<CropCutoffsToml>,
    #[serde(default)]
    pub cotton: Option<CropCutoffsToml>,
    #[serde(default)]
    pub generic: Option<CropCutoffsToml>,
}

/// EC cutoffs (dS/m) for one crop.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropCutoffsToml {
    pub ec_amber: f64,
    pub ec_red: f64,
}
