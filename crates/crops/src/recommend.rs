//! Per-crop irrigation recommendations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use sipai_quality::{Tier, WaterQuality, ec_or_fallback};

use crate::kind::{CropEntry, CropKind};
use crate::table::CropTable;

/// Message for green recommendations.
pub const SAFE_MESSAGE: &str = "Safe to irrigate";
/// Message for amber recommendations.
pub const CAUTION_MESSAGE: &str = "Safe with caution";
/// Message for red recommendations.
pub const UNSAFE_MESSAGE: &str = "Not recommended for irrigation";

/// Irrigation advice for one crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub status: Tier,
    pub message: String,
    pub actions: Vec<String>,
}

impl Recommendation {
    /// Builds the recommendation for `kind` at the given EC.
    pub fn for_ec(table: &CropTable, kind: CropKind, ec: f64) -> Self {
        let thresholds = table.get(kind);
        let status = thresholds.tier(ec);
        let message = match status {
            Tier::Green => SAFE_MESSAGE,
            Tier::Amber => CAUTION_MESSAGE,
            Tier::Red => UNSAFE_MESSAGE,
        };
        Self {
            status,
            message: message.to_string(),
            actions: thresholds
                .actions(status)
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }
}

/// Recommendations for each crop using the default [`CropTable`].
///
/// Returns an empty map when either the reading or the crop list is absent.
/// A reading without current readings is evaluated at EC 0.
///
/// The result is keyed by crop name as given; a name listed twice keeps
/// the last entry.
///
/// ```
/// use sipai_crops::{CropEntry, classify_crop_recommendations};
/// use sipai_quality::{Tier, WaterQuality};
///
/// let reading = WaterQuality::from_values([("ec", 5.0)]);
/// let crops = [CropEntry::new("Cotton")];
/// let recs = classify_crop_recommendations(Some(&reading), Some(&crops[..]));
/// assert_eq!(recs["Cotton"].status, Tier::Amber);
/// ```
pub fn classify_crop_recommendations(
    reading: Option<&WaterQuality>,
    crops: Option<&[CropEntry]>,
) -> BTreeMap<String, Recommendation> {
    recommend_crops(reading, crops, &CropTable::default())
}

/// Like [`classify_crop_recommendations`] with an explicit table.
pub fn recommend_crops(
    reading: Option<&WaterQuality>,
    crops: Option<&[CropEntry]>,
    table: &CropTable,
) -> BTreeMap<String, Recommendation> {
    let (Some(reading), Some(crops)) = (reading, crops) else {
        debug!("reading or crop list missing, no recommendations");
        return BTreeMap::new();
    };

    let ec = ec_or_fallback(reading);
    crops
        .iter()
        .map(|crop| {
            let kind = crop.kind();
            if kind.is_generic() {
                debug!(crop = %crop.name, "no dedicated table, using generic thresholds");
            }
            let rec = Recommendation::for_ec(table, kind, ec);
            debug!(crop = %crop.name, %kind, ec, status = %rec.status, "crop recommendation");
            (crop.name.clone(), rec)
        })
        .collect()
}
