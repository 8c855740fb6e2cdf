//! Report command: combined status, readings and crop advice.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sipai_advisory::{AdvisoryReport, to_json};
use sipai_crops::CropEntry;
use sipai_quality::WaterQuality;

use crate::cli::ReportArgs;
use crate::convert;

/// Build the advisory report and write it to `--output` or stdout.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();
    let config = convert::load_config(args.common.config.as_deref())?;
    let thresholds = convert::build_status_thresholds(&config.thresholds)?;
    let table = convert::build_crop_table(&config.crops)?;
    let source = convert::build_data_source(&config.io, args.common.data_dir.as_deref())?;

    let reading: Option<WaterQuality> = source.fetch(&config.io.water_quality);
    let crops: Option<Vec<CropEntry>> = source.fetch(&config.io.crops);

    let report = AdvisoryReport::build(reading.as_ref(), crops.as_deref(), &thresholds, &table);
    let json = to_json(&report).context("failed to render report")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
