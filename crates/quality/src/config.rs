//! Cutoffs for overall water-status classification.

use crate::error::QualityError;
use crate::status::Tier;

/// Cutoffs used to classify EC, SAR and pH into a [`Tier`].
///
/// Every comparison is strict: a value exactly at a cutoff stays in the
/// lower tier.
///
/// # Example
///
/// ```
/// use sipai_quality::{StatusThresholds, Tier};
///
/// let thresholds = StatusThresholds::new().with_ec(1.0, 4.0);
/// assert!(thresholds.validate().is_ok());
/// assert_eq!(thresholds.classify(0.8, 0.0, 7.0), Tier::Green);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StatusThresholds {
    ec_amber: f64,
    ec_red: f64,
    sar_amber: f64,
    sar_red: f64,
    ph_amber_low: f64,
    ph_amber_high: f64,
    ph_red_low: f64,
    ph_red_high: f64,
}

impl StatusThresholds {
    /// Creates thresholds with the standard irrigation restriction cutoffs.
    ///
    /// Defaults: EC 0.7 / 3.0 dS/m, SAR 3 / 9, pH amber outside 6.0..8.5,
    /// pH red outside 5.0..9.0.
    pub fn new() -> Self {
        Self {
            ec_amber: 0.7,
            ec_red: 3.0,
            sar_amber: 3.0,
            sar_red: 9.0,
            ph_amber_low: 6.0,
            ph_amber_high: 8.5,
            ph_red_low: 5.0,
            ph_red_high: 9.0,
        }
    }

    /// Sets the EC amber and red cutoffs (dS/m).
    pub fn with_ec(mut self, amber: f64, red: f64) -> Self {
        self.ec_amber = amber;
        self.ec_red = red;
        self
    }

    /// Sets the SAR amber and red cutoffs.
    pub fn with_sar(mut self, amber: f64, red: f64) -> Self {
        self.sar_amber = amber;
        self.sar_red = red;
        self
    }

    /// Sets the pH band outside of which the status is at least amber.
    pub fn with_ph_amber(mut self, low: f64, high: f64) -> Self {
        self.ph_amber_low = low;
        self.ph_amber_high = high;
        self
    }

    /// Sets the pH band outside of which the status is red.
    pub fn with_ph_red(mut self, low: f64, high: f64) -> Self {
        self.ph_red_low = low;
        self.ph_red_high = high;
        self
    }

    // --- Accessors ---

    pub fn ec_amber(&self) -> f64 {
        self.ec_amber
    }

    pub fn ec_red(&self) -> f64 {
        self.ec_red
    }

    pub fn sar_amber(&self) -> f64 {
        self.sar_amber
    }

    pub fn sar_red(&self) -> f64 {
        self.sar_red
    }

    /// Returns the `(low, high)` pH amber band.
    pub fn ph_amber(&self) -> (f64, f64) {
        (self.ph_amber_low, self.ph_amber_high)
    }

    /// Returns the `(low, high)` pH red band.
    pub fn ph_red(&self) -> (f64, f64) {
        (self.ph_red_low, self.ph_red_high)
    }

    /// Classifies scalar readings. Red conditions are checked before amber.
    pub fn classify(&self, ec: f64, sar: f64, ph: f64) -> Tier {
        if ec > self.ec_red || sar > self.sar_red || ph > self.ph_red_high || ph < self.ph_red_low
        {
            Tier::Red
        } else if ec > self.ec_amber
            || sar > self.sar_amber
            || ph > self.ph_amber_high
            || ph < self.ph_amber_low
        {
            Tier::Amber
        } else {
            Tier::Green
        }
    }

    /// Validates this configuration.
    ///
    /// Checks that every cutoff is finite, that amber cutoffs do not exceed
    /// red ones, and that the pH bands nest:
    /// `red_low <= amber_low <= amber_high <= red_high`.
    pub fn validate(&self) -> Result<(), QualityError> {
        let all = [
            ("ec_amber", self.ec_amber),
            ("ec_red", self.ec_red),
            ("sar_amber", self.sar_amber),
            ("sar_red", self.sar_red),
            ("ph_amber_low", self.ph_amber_low),
            ("ph_amber_high", self.ph_amber_high),
            ("ph_red_low", self.ph_red_low),
            ("ph_red_high", self.ph_red_high),
        ];
        for (name, v) in all {
            if !v.is_finite() {
                return Err(QualityError::InvalidThreshold {
                    reason: format!("{name} must be finite, got {v}"),
                });
            }
        }

        Self::validate_order("ec_amber", self.ec_amber, "ec_red", self.ec_red)?;
        Self::validate_order("sar_amber", self.sar_amber, "sar_red", self.sar_red)?;
        Self::validate_order(
            "ph_red_low",
            self.ph_red_low,
            "ph_amber_low",
            self.ph_amber_low,
        )?;
        Self::validate_order(
            "ph_amber_low",
            self.ph_amber_low,
            "ph_amber_high",
            self.ph_amber_high,
        )?;
        Self::validate_order(
            "ph_amber_high",
            self.ph_amber_high,
            "ph_red_high",
            self.ph_red_high,
        )?;
        Ok(())
    }

    fn validate_order(lo_name: &str, lo: f64, hi_name: &str, hi: f64) -> Result<(), QualityError> {
        if lo > hi {
            return Err(QualityError::InvalidThreshold {
                reason: format!("{lo_name} ({lo}) must not exceed {hi_name} ({hi})"),
            });
        }
        Ok(())
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self::new()
    }
}
