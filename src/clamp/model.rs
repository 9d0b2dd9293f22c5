use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixels per rem. The page never lets the user change it.
pub const ROOT_FONT_SIZE: u32 = 16;

pub const DEFAULT_MIN_WIDTH: &str = "320px";
pub const DEFAULT_MAX_WIDTH: &str = "1240px";
pub const DEFAULT_MIN_FONT_SIZE: &str = "16px";
pub const DEFAULT_MAX_FONT_SIZE: &str = "54px";

/// Inputs to the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    MinWidth,
    MaxWidth,
    MinFontSize,
    MaxFontSize,
    Root,
}

impl Field {
    /// The four user-editable text fields, in form order
    pub const INPUTS: [Field; 4] = [
        Field::MinWidth,
        Field::MaxWidth,
        Field::MinFontSize,
        Field::MaxFontSize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::MinWidth => "min_width",
            Field::MaxWidth => "max_width",
            Field::MinFontSize => "min_font_size",
            Field::MaxFontSize => "max_font_size",
            Field::Root => "root",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts snake_case and the camelCase names the page uses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min_width" | "minWidth" => Ok(Field::MinWidth),
            "max_width" | "maxWidth" => Ok(Field::MaxWidth),
            "min_font_size" | "minFontSize" => Ok(Field::MinFontSize),
            "max_font_size" | "maxFontSize" => Ok(Field::MaxFontSize),
            "root" => Ok(Field::Root),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Raw field text plus the root scale factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub min_width: String,
    pub max_width: String,
    pub min_font_size: String,
    pub max_font_size: String,
    pub root: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH.to_string(),
            max_width: DEFAULT_MAX_WIDTH.to_string(),
            min_font_size: DEFAULT_MIN_FONT_SIZE.to_string(),
            max_font_size: DEFAULT_MAX_FONT_SIZE.to_string(),
            root: ROOT_FONT_SIZE,
        }
    }
}

impl Configuration {
    pub fn new(
        min_width: impl Into<String>,
        max_width: impl Into<String>,
        min_font_size: impl Into<String>,
        max_font_size: impl Into<String>,
        root: u32,
    ) -> Self {
        Self {
            min_width: min_width.into(),
            max_width: max_width.into(),
            min_font_size: min_font_size.into(),
            max_font_size: max_font_size.into(),
            root,
        }
    }

    /// Text of one of the four input fields. `Field::Root` has no text.
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::MinWidth => Some(self.min_width.as_str()),
            Field::MaxWidth => Some(self.max_width.as_str()),
            Field::MinFontSize => Some(self.min_font_size.as_str()),
            Field::MaxFontSize => Some(self.max_font_size.as_str()),
            Field::Root => None,
        }
    }

    /// Replace one input field. Returns false for `Field::Root`, which is
    /// fixed once the configuration is created.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let slot = match field {
            Field::MinWidth => &mut self.min_width,
            Field::MaxWidth => &mut self.max_width,
            Field::MinFontSize => &mut self.min_font_size,
            Field::MaxFontSize => &mut self.max_font_size,
            Field::Root => return false,
        };
        *slot = value.into();
        true
    }
}

/// Line through (min width, min font size) and (max width, max font size), in rem
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearModel {
    pub slope: f64,
    pub y_axis_intersection: f64,
}

/// Structured builder result. All magnitudes are rem, rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidClamp {
    pub min: f64,
    pub preferred: f64,
    /// Viewport-width coefficient, slope * 100
    pub vw: f64,
    pub max: f64,
    pub root: u32,
    pub model: LinearModel,
}

/// Which unit the result is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnit {
    #[default]
    Rem,
    Px,
}

impl OutputUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputUnit::Rem => "rem",
            OutputUnit::Px => "px",
        }
    }
}

impl fmt::Display for OutputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for OutputUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rem" => Ok(OutputUnit::Rem),
            "px" => Ok(OutputUnit::Px),
            other => Err(format!("Unsupported output unit: {} (expected rem or px)", other)),
        }
    }
}

/// Round the exact decimal value of `value` to 4 places, ties away from zero
///
/// 57.796 / 16 is stored just below 3.61225 and rounds to 3.6122;
/// 1.03125 is an exact tie and rounds to 1.0313.
pub fn round4(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // An exact tie at the 5th decimal needs a denominator dividing 2^5.
    // For those values the scaled product is exact.
    if value.abs() < 1e11 && (value * 32.0).fract() == 0.0 {
        return (value * 10_000.0).round() / 10_000.0;
    }
    // No tie possible: `{:.4}` rounds the exact decimal expansion
    format!("{:.4}", value).parse::<f64>().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.17391304347826086), 0.1739);
        assert_eq!(round4(4.130434782608696), 4.1304);
        assert_eq!(round4(1.03125), 1.0313);
        assert_eq!(round4(-1.03125), -1.0313);
        assert_eq!(round4(20.0), 20.0);
    }

    #[test]
    fn test_round4_uses_exact_decimal_value() {
        // Stored as 3.612249999..., below the tie
        assert_eq!(round4(57.796 / 16.0), 3.6122);
        assert_eq!(round4(656.61 / 16.0), 41.0381);
        assert_eq!(round4(17.3 / 16.0), 1.0813);
        assert_eq!(round4(61.9 / 16.0), 3.8687);
        assert_eq!(round4(-57.796 / 16.0), -3.6122);
        assert_eq!(round4(0.00005), 0.0001);
        assert_eq!(round4(-0.00004), 0.0);
    }

    #[test]
    fn test_field_names() {
        assert_eq!("minWidth".parse::<Field>(), Ok(Field::MinWidth));
        assert_eq!("max_font_size".parse::<Field>(), Ok(Field::MaxFontSize));
        assert!("width".parse::<Field>().is_err());
        assert_eq!(Field::MinFontSize.to_string(), "min_font_size");
    }

    #[test]
    fn test_configuration_defaults() {
        let config = Configuration::default();
        assert_eq!(config.field(Field::MinWidth), Some("320px"));
        assert_eq!(config.field(Field::MaxWidth), Some("1240px"));
        assert_eq!(config.field(Field::MinFontSize), Some("16px"));
        assert_eq!(config.field(Field::MaxFontSize), Some("54px"));
        assert_eq!(config.root, 16);
    }

    #[test]
    fn test_set_field() {
        let mut config = Configuration::default();
        assert!(config.set_field(Field::MaxWidth, "1440px"));
        assert_eq!(config.max_width, "1440px");
        assert!(!config.set_field(Field::Root, "20"));
        assert_eq!(config.root, 16);
    }

    #[test]
    fn test_output_unit_parse() {
        assert_eq!("px".parse::<OutputUnit>(), Ok(OutputUnit::Px));
        assert_eq!(OutputUnit::default(), OutputUnit::Rem);
        assert!("em".parse::<OutputUnit>().is_err());
    }
}
