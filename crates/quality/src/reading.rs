//! Water-quality readings as they arrive from fixtures.
//!
//! Sensor values may be JSON numbers or strings (optionally followed by a
//! unit, e.g. `"1.1 dS/m"`). Anything that does not yield a finite number is
//! treated as missing.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::parameter::{Parameter, format_with_unit};

/// A water-quality sample: the latest reading per parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaterQuality {
    /// Latest readings keyed by parameter (`ec`, `sar`, `ph`, ...).
    #[serde(default)]
    pub current_readings: Option<CurrentReadings>,
}

impl WaterQuality {
    /// Builds a sample from `(key, value)` pairs.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let readings = values
            .into_iter()
            .map(|(k, v)| (k.to_string(), ParameterReading::number(v)))
            .collect();
        Self {
            current_readings: Some(CurrentReadings(readings)),
        }
    }
}

/// Mapping from parameter key to reading.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CurrentReadings(BTreeMap<String, ParameterReading>);

impl CurrentReadings {
    /// Returns the raw reading stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParameterReading> {
        self.0.get(key)
    }

    /// Returns the parsed value for `parameter`, if present and numeric.
    pub fn value_of(&self, parameter: Parameter) -> Option<f64> {
        self.get(parameter.key()).and_then(ParameterReading::as_f64)
    }

    /// Inserts or replaces a reading.
    pub fn insert(&mut self, key: impl Into<String>, reading: ParameterReading) {
        self.0.insert(key.into(), reading);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterReading)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single sensor reading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterReading {
    #[serde(default)]
    pub value: Option<NumericValue>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl ParameterReading {
    /// A numeric reading without a unit.
    pub fn number(value: f64) -> Self {
        Self {
            value: Some(NumericValue::Number(value)),
            unit: None,
        }
    }

    /// A textual reading without a unit.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(NumericValue::Text(value.into())),
            unit: None,
        }
    }

    /// Sets the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Parsed value, or `None` if missing or not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_ref().and_then(NumericValue::as_f64)
    }

    /// Formats the raw value with the reading's unit, falling back to
    /// `fallback_unit` when the reading carries none.
    pub fn display(&self, fallback_unit: &str) -> String {
        let raw = self.value.as_ref().and_then(NumericValue::raw_text);
        let unit = self.unit.as_deref().unwrap_or(fallback_unit);
        format_with_unit(raw.as_deref(), Some(unit))
    }
}

/// A sensor value as found in the JSON payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    /// Any other JSON value (bool, array, object). Never numeric.
    Other(IgnoredAny),
}

impl NumericValue {
    /// Parses the value leniently.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Number(v) => Some(*v).filter(|v| v.is_finite()),
            NumericValue::Text(s) => parse_numeric(s),
            NumericValue::Other(_) => None,
        }
    }

    /// Text shown for display. Numeric zero and NaN have none, so they
    /// render as `N/A` like a missing value.
    fn raw_text(&self) -> Option<String> {
        match self {
            NumericValue::Number(v) if *v == 0.0 || v.is_nan() => None,
            NumericValue::Number(v) => Some(v.to_string()),
            NumericValue::Text(s) => Some(s.clone()),
            NumericValue::Other(_) => None,
        }
    }
}

/// Parses the longest leading decimal number in `s`.
///
/// Leading whitespace is skipped and trailing text (such as a unit) is
/// ignored. Returns `None` when no digits are found or the result is not
/// finite.
pub fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut n_digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        let n_frac = frac_end - (end + 1);
        if n_digits + n_frac > 0 {
            n_digits += n_frac;
            end = frac_end;
        }
    }
    if n_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut i = end + 1;
        if i < len && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end > i {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
