use crate::unit::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSS length units accepted in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    Rem,
    Em,
    #[serde(rename = "%")]
    Percent,
    Vw,
    Vh,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Px,
        Unit::Rem,
        Unit::Em,
        Unit::Percent,
        Unit::Vw,
        Unit::Vh,
    ];

    /// Suffix as written after the number
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.suffix() == s)
            .ok_or_else(|| UnitError::InvalidUnit(s.to_string()))
    }
}

/// A magnitude with an optional unit label, as read from a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Option<Unit>,
}

impl Dimension {
    pub fn new(magnitude: f64, unit: Option<Unit>) -> Self {
        Self { magnitude, unit }
    }

    /// Same magnitude, different label. No rescaling happens here:
    /// "320px" becomes "320rem".
    pub fn with_unit(self, unit: Unit) -> Self {
        Self {
            magnitude: self.magnitude,
            unit: Some(unit),
        }
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Self::new(value, None)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_number(self.magnitude))?;
        if let Some(unit) = self.unit {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

/// Shortest decimal text for a value ("1", "0.1739", "3.375"), written the
/// way a browser prints numbers
pub fn format_number(value: f64) -> String {
    // -0 prints as "0"
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Exponent form outside [1e-6, 1e21), with a signed exponent: 1e+21
    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    format!("{}", value)
}
