//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::*;

use sipai_crops::{CropKind, CropTable};
use sipai_io::DataSource;
use sipai_quality::StatusThresholds;

/// Loads the TOML configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SipaiConfig> {
    let Some(path) = path else {
        return Ok(SipaiConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Builds validated [`StatusThresholds`] from the `[thresholds]` section.
pub fn build_status_thresholds(t: &ThresholdsToml) -> Result<StatusThresholds> {
    let thresholds = StatusThresholds::new()
        .with_ec(t.ec_amber, t.ec_red)
        .with_sar(t.sar_amber, t.sar_red)
        .with_ph_amber(t.ph_amber_low, t.ph_amber_high)
        .with_ph_red(t.ph_red_low, t.ph_red_high);
    thresholds
        .validate()
        .context("invalid [thresholds] section")?;
    Ok(thresholds)
}

/// Builds a validated [`CropTable`] from the `[crops.*]` sections.
pub fn build_crop_table(crops: &CropsToml) -> Result<CropTable> {
    let overrides = [
        (CropKind::SweetCorn, &crops.sweet_corn),
        (CropKind::Cotton, &crops.cotton),
        (CropKind::Generic, &crops.generic),
    ];
    let mut table = CropTable::new();
    for (kind, cutoffs) in overrides {
        if let Some(c) = cutoffs {
            table = table.with_ec(kind, c.ec_amber, c.ec_red);
        }
    }
    table.validate().context("invalid [crops] section")?;
    Ok(table)
}

/// Builds the fixture [`DataSource`]. `data_dir` overrides `[io].data_dir`.
pub fn build_data_source(io: &IoToml, data_dir: Option<&Path>) -> Result<DataSource> {
    let dir = data_dir.unwrap_or(&io.data_dir);
    if dir.as_os_str().is_empty() {
        bail!("data directory must not be empty");
    }
    Ok(DataSource::new(dir))
}
