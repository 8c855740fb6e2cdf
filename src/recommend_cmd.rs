//! Recommend command: per-crop advice for the current sample.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sipai_crops::{CropEntry, recommend_crops};
use sipai_quality::WaterQuality;

use crate::cli::RecommendArgs;
use crate::convert;

/// Print the recommendation map as pretty JSON.
pub fn run(args: RecommendArgs) -> Result<()> {
    let _cmd = info_span!("recommend").entered();
    let config = convert::load_config(args.common.config.as_deref())?;
    let table = convert::build_crop_table(&config.crops)?;
    let source = convert::build_data_source(&config.io, args.common.data_dir.as_deref())?;

    let reading: Option<WaterQuality> = source.fetch(&config.io.water_quality);
    let crops: Option<Vec<CropEntry>> = if args.crops.is_empty() {
        source.fetch(&config.io.crops)
    } else {
        Some(args.crops.into_iter().map(CropEntry::new).collect())
    };
    info!(
        n_crops = crops.as_ref().map_or(0, Vec::len),
        "evaluating crops"
    );

    let recommendations = recommend_crops(reading.as_ref(), crops.as_deref(), &table);
    let json = serde_json::to_string_pretty(&recommendations)
        .context("failed to serialize recommendations")?;
    println!("{json}");
    Ok(())
}
