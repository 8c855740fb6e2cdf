//! Per-crop irrigation recommendations from water salinity.
//!
//! Each crop name resolves to a [`CropKind`]. Sweet corn and cotton have
//! their own EC tolerance entries in the [`CropTable`]; every other crop
//! takes the [`CropKind::Generic`] entry. The water's EC is then compared
//! against the entry's amber and red cutoffs.
//!
//! # Quick start
//!
//! ```
//! use sipai_crops::{CropEntry, CropTable, recommend_crops};
//! use sipai_quality::{Tier, WaterQuality};
//!
//! let reading = WaterQuality::from_values([("ec", 1.2)]);
//! let crops = vec![CropEntry::new("Sweet Corn"), CropEntry::new("Wheat")];
//!
//! let recs = recommend_crops(Some(&reading), Some(&crops[..]), &CropTable::default());
//! assert_eq!(recs["Sweet Corn"].status, Tier::Amber);
//! assert_eq!(recs["Wheat"].status, Tier::Amber);
//! ```

pub mod error;
pub mod kind;
pub mod recommend;
pub mod table;

pub use error::CropError;
pub use kind::{CropEntry, CropKind};
pub use recommend::{
    CAUTION_MESSAGE, Recommendation, SAFE_MESSAGE, UNSAFE_MESSAGE, classify_crop_recommendations,
    recommend_crops,
};
pub use table::{CropTable, CropThresholds};
