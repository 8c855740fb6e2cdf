//! Crop identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CropError;

/// A crop as listed by the user: only the name is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropEntry {
    pub name: String,
}

impl CropEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Resolves the threshold table this crop uses.
    pub fn kind(&self) -> CropKind {
        CropKind::from_name(&self.name)
    }
}

/// Crops with their own salinity tolerance table.
///
/// Any crop without a dedicated table resolves to [`CropKind::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CropKind {
    SweetCorn,
    Cotton,
    /// Fallback for every crop without a dedicated table.
    Generic,
}

impl CropKind {
    pub const ALL: [CropKind; 3] = [Self::SweetCorn, Self::Cotton, Self::Generic];

    /// Resolves a crop name by case-insensitive exact match.
    ///
    /// Surrounding whitespace is significant: `" cotton"` is not cotton.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "sweet corn" => CropKind::SweetCorn,
            "cotton" => CropKind::Cotton,
            _ => CropKind::Generic,
        }
    }

    /// Configuration key.
    pub fn key(self) -> &'static str {
        match self {
            CropKind::SweetCorn => "sweet_corn",
            CropKind::Cotton => "cotton",
            CropKind::Generic => "generic",
        }
    }

    /// True for the fallback kind.
    pub fn is_generic(self) -> bool {
        self == CropKind::Generic
    }
}

impl FromStr for CropKind {
    type Err = CropError;

    /// Parses a configuration key (`sweet_corn`, `cotton`, `generic`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| CropError::UnknownKind { key: s.to_string() })
    }
}

impl fmt::Display for CropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
