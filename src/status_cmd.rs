//! Status command: overall water status of the current sample.

use anyhow::Result;
use tracing::{info, info_span, warn};

use sipai_quality::{WaterQuality, assess_overall_status};

use crate::cli::StatusArgs;
use crate::convert;

/// Print the overall status (`green`, `amber`, `red` or `unknown`).
pub fn run(args: StatusArgs) -> Result<()> {
    let _cmd = info_span!("status").entered();
    let config = convert::load_config(args.common.config.as_deref())?;
    let thresholds = convert::build_status_thresholds(&config.thresholds)?;
    let source = convert::build_data_source(&config.io, args.common.data_dir.as_deref())?;

    info!(dir = %source.dir().display(), "loading water quality");
    let reading: Option<WaterQuality> = source.fetch(&config.io.water_quality);

    let assessment = assess_overall_status(reading.as_ref(), &thresholds);
    if !assessment.defaulted.is_empty() {
        let names: Vec<&str> = assessment.defaulted.iter().map(|p| p.key()).collect();
        warn!(
            defaulted = %names.join(","),
            "status computed with fallback values for missing readings"
        );
    }

    println!("{}", assessment.status);
    Ok(())
}
