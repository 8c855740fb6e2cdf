//! # sipai-io
//!
//! Loads mock data from a directory of JSON fixtures. [`DataSource::read`]
//! reports failures as [`IoError`]; [`DataSource::fetch`] logs them and
//! returns `None` so callers can carry on with an empty view.

mod error;
mod source;

pub use error::IoError;
pub use source::{CROPS_FIXTURE, DataSource, WATER_QUALITY_FIXTURE};
