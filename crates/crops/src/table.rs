//! Per-crop EC tolerance table.

use sipai_quality::Tier;

use crate::error::CropError;
use crate::kind::CropKind;
use crate::recommend::Recommendation;

/// EC cutoffs and remedial actions for one crop kind.
///
/// `ec > ec_red` is red, `ec > ec_amber` is amber, anything else green.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropThresholds {
    ec_amber: f64,
    ec_red: f64,
    amber_actions: &'static [&'static str],
    red_actions: &'static [&'static str],
}

const SPECIFIC_AMBER_ACTIONS: &[&str] = &["Increase leaching fraction to 15%", "Monitor crop closely"];
const SPECIFIC_RED_ACTIONS: &[&str] = &["Consider alternative water source", "Apply gypsum at 2 t/ha"];
const GENERIC_AMBER_ACTIONS: &[&str] = &["Increase leaching fraction", "Monitor crop closely"];
const GENERIC_RED_ACTIONS: &[&str] = &["Consider alternative water source", "Apply gypsum"];

impl CropThresholds {
    /// Default table entry for `kind`.
    ///
    /// | Kind | amber above | red above |
    /// |------|-------------|-----------|
    /// | sweet corn | 0.7 | 1.7 |
    /// | cotton | 4.0 | 7.7 |
    /// | generic | 0.7 | 3.0 |
    pub fn for_kind(kind: CropKind) -> Self {
        match kind {
            CropKind::SweetCorn => Self {
                ec_amber: 0.7,
                ec_red: 1.7,
                amber_actions: SPECIFIC_AMBER_ACTIONS,
                red_actions: SPECIFIC_RED_ACTIONS,
            },
            CropKind::Cotton => Self {
                ec_amber: 4.0,
                ec_red: 7.7,
                amber_actions: SPECIFIC_AMBER_ACTIONS,
                red_actions: SPECIFIC_RED_ACTIONS,
            },
            CropKind::Generic => Self {
                ec_amber: 0.7,
                ec_red: 3.0,
                amber_actions: GENERIC_AMBER_ACTIONS,
                red_actions: GENERIC_RED_ACTIONS,
            },
        }
    }

    /// Overrides the EC cutoffs, keeping the actions.
    pub fn with_ec(mut self, amber: f64, red: f64) -> Self {
        self.ec_amber = amber;
        self.ec_red = red;
        self
    }

    pub fn ec_amber(&self) -> f64 {
        self.ec_amber
    }

    pub fn ec_red(&self) -> f64 {
        self.ec_red
    }

    /// Classifies an EC value.
    pub fn tier(&self, ec: f64) -> Tier {
        if ec > self.ec_red {
            Tier::Red
        } else if ec > self.ec_amber {
            Tier::Amber
        } else {
            Tier::Green
        }
    }

    /// Actions suggested for `tier`. Green needs none.
    pub fn actions(&self, tier: Tier) -> &'static [&'static str] {
        match tier {
            Tier::Green => &[],
            Tier::Amber => self.amber_actions,
            Tier::Red => self.red_actions,
        }
    }

    fn validate(&self, kind: CropKind) -> Result<(), CropError> {
        let invalid = |reason: String| CropError::InvalidThreshold {
            crop: kind.key(),
            reason,
        };
        for (name, v) in [("ec_amber", self.ec_amber), ("ec_red", self.ec_red)] {
            if !v.is_finite() || v < 0.0 {
                return Err(invalid(format!(
                    "{name} must be finite and non-negative, got {v}"
                )));
            }
        }
        if self.ec_amber > self.ec_red {
            return Err(invalid(format!(
                "ec_amber ({}) must not exceed ec_red ({})",
                self.ec_amber, self.ec_red
            )));
        }
        Ok(())
    }
}

/// Threshold table covering every [`CropKind`].
///
/// # Example
///
/// ```
/// use sipai_crops::{CropKind, CropTable};
/// use sipai_quality::Tier;
///
/// let table = CropTable::new().with_ec(CropKind::Cotton, 5.0, 9.0);
/// assert!(table.validate().is_ok());
/// assert_eq!(table.get(CropKind::Cotton).tier(4.5), Tier::Green);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CropTable {
    sweet_corn: CropThresholds,
    cotton: CropThresholds,
    generic: CropThresholds,
}

impl CropTable {
    /// Creates the default table.
    pub fn new() -> Self {
        Self {
            sweet_corn: CropThresholds::for_kind(CropKind::SweetCorn),
            cotton: CropThresholds::for_kind(CropKind::Cotton),
            generic: CropThresholds::for_kind(CropKind::Generic),
        }
    }

    /// Replaces the EC cutoffs for one kind.
    pub fn with_ec(mut self, kind: CropKind, amber: f64, red: f64) -> Self {
        let entry = self.entry_mut(kind);
        *entry = entry.with_ec(amber, red);
        self
    }

    /// Returns the thresholds for `kind`.
    pub fn get(&self, kind: CropKind) -> &CropThresholds {
        match kind {
            CropKind::SweetCorn => &self.sweet_corn,
            CropKind::Cotton => &self.cotton,
            CropKind::Generic => &self.generic,
        }
    }

    /// Recommendation for one crop kind at the given EC.
    pub fn recommend(&self, kind: CropKind, ec: f64) -> Recommendation {
        Recommendation::for_ec(self, kind, ec)
    }

    fn entry_mut(&mut self, kind: CropKind) -> &mut CropThresholds {
        match kind {
            CropKind::SweetCorn => &mut self.sweet_corn,
            CropKind::Cotton => &mut self.cotton,
            CropKind::Generic => &mut self.generic,
        }
    }

    /// Validates every entry: cutoffs finite, non-negative, amber <= red.
    pub fn validate(&self) -> Result<(), CropError> {
        for kind in CropKind::ALL {
            self.get(kind).validate(kind)?;
        }
        Ok(())
    }
}

impl Default for CropTable {
    fn default() -> Self {
        Self::new()
    }
}
