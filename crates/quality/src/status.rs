//! Status tiers for water and crop classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-tier suitability classification.
///
/// Tiers are ordered by severity, so `Tier::Green < Tier::Amber < Tier::Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tier {
    /// Safe to use without restriction.
    Green = 0,
    /// Usable with caution.
    Amber = 1,
    /// Unsafe for irrigation.
    Red = 2,
}

impl Tier {
    /// All three tiers in increasing severity.
    pub const ALL: [Tier; 3] = [Self::Green, Self::Amber, Self::Red];

    /// Lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Green => "green",
            Tier::Amber => "amber",
            Tier::Red => "red",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall water status: a [`Tier`], or `Unknown` when no reading is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterStatus {
    Green,
    Amber,
    Red,
    /// No reading (or no current readings) to classify.
    Unknown,
}

impl WaterStatus {
    /// Lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            WaterStatus::Green => "green",
            WaterStatus::Amber => "amber",
            WaterStatus::Red => "red",
            WaterStatus::Unknown => "unknown",
        }
    }

    /// Returns the tier, or `None` for `Unknown`.
    pub fn tier(self) -> Option<Tier> {
        match self {
            WaterStatus::Green => Some(Tier::Green),
            WaterStatus::Amber => Some(Tier::Amber),
            WaterStatus::Red => Some(Tier::Red),
            WaterStatus::Unknown => None,
        }
    }
}

impl From<Tier> for WaterStatus {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Green => WaterStatus::Green,
            Tier::Amber => WaterStatus::Amber,
            Tier::Red => WaterStatus::Red,
        }
    }
}

impl fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
