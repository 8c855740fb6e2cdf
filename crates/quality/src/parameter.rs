//! Water-quality parameters and their presentation metadata.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::QualityError;

/// A measured water-quality parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    /// Acidity/alkalinity.
    Ph,
    /// Electrical conductivity (salinity proxy).
    Ec,
    /// Sodium adsorption ratio.
    Sar,
    /// Nitrate.
    No3,
    /// Chloride.
    Cl,
    /// Calcium.
    Ca,
    /// Magnesium.
    Mg,
    /// Sodium.
    Na,
    /// Water temperature.
    Temperature,
}

impl Parameter {
    /// All parameters in display order.
    pub const ALL: [Parameter; 9] = [
        Self::Ph,
        Self::Ec,
        Self::Sar,
        Self::No3,
        Self::Cl,
        Self::Ca,
        Self::Mg,
        Self::Na,
        Self::Temperature,
    ];

    /// Key under which the parameter appears in `current_readings`.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Ec => "ec",
            Parameter::Sar => "sar",
            Parameter::No3 => "no3",
            Parameter::Cl => "cl",
            Parameter::Ca => "ca",
            Parameter::Mg => "mg",
            Parameter::Na => "na",
            Parameter::Temperature => "temperature",
        }
    }

    /// Resolves a reading key, ignoring ASCII case.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Ec => "EC",
            Parameter::Sar => "SAR",
            Parameter::No3 => "NO₃",
            Parameter::Cl => "Cl",
            Parameter::Ca => "Ca",
            Parameter::Mg => "Mg",
            Parameter::Na => "Na",
            Parameter::Temperature => "Temperature",
        }
    }

    /// Unit used when a reading does not carry its own. Empty for unitless parameters.
    pub fn default_unit(self) -> &'static str {
        match self {
            Parameter::Ph | Parameter::Sar => "",
            Parameter::Ec => "dS/m",
            Parameter::No3 | Parameter::Cl | Parameter::Ca | Parameter::Mg | Parameter::Na => {
                "mg/l"
            }
            Parameter::Temperature => "°C",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Parameter::Ph => "A measure of acidity/alkalinity",
            Parameter::Ec => "Electrical conductivity indicates salt content",
            Parameter::Sar => "Sodium Adsorption Ratio affects soil permeability",
            Parameter::No3 => "Nitrate level affects fertilization needs",
            Parameter::Cl => "Chloride can cause leaf burn at high levels",
            Parameter::Ca => "Calcium is essential for soil structure",
            Parameter::Mg => "Magnesium is vital for photosynthesis",
            Parameter::Na => "Sodium can damage soil structure",
            Parameter::Temperature => "Water temperature at the sampling point",
        }
    }
}

impl FromStr for Parameter {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| QualityError::UnknownParameter { key: s.to_string() })
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats a value with its unit for display.
///
/// Returns `"N/A"` when the value is missing or empty. A missing unit
/// still leaves the separating space, so `("7.0", None)` gives `"7.0 "`.
pub fn format_with_unit(value: Option<&str>, unit: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("{v} {}", unit.unwrap_or("")),
        _ => "N/A".to_string(),
    }
}
