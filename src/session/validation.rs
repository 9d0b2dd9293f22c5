use crate::clamp::builder::{build_clamp, normalize_to_rem};
use crate::clamp::error::ClampError;
use crate::clamp::model::{Configuration, Field};
use crate::unit::{looks_like_dimension, parse_unit, Unit};
use std::fmt;

/// Input check for the form: at most one build error, any number of warnings
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Why the builder produces nothing, if it does
    pub error: Option<ClampError>,
    pub warnings: Vec<FieldWarning>,
}

/// Input that builds but is probably not what the user meant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    pub field: Field,
    pub message: String,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_issues(&self) -> bool {
        self.error.is_some() || !self.warnings.is_empty()
    }

    fn warn(&mut self, field: Field, message: String) {
        self.warnings.push(FieldWarning { field, message });
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "Error: {}", error)?;
        }
        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  [{}] {}", warning.field, warning.message)?;
            }
        }
        Ok(())
    }
}

/// Check a configuration the way the builder will read it
pub fn validate_configuration(config: &Configuration) -> ValidationResult {
    let mut result = ValidationResult {
        error: build_clamp(config).err(),
        warnings: Vec::new(),
    };

    for field in Field::INPUTS {
        let raw = config.field(field).unwrap_or_default();
        let dim = match parse_unit(raw) {
            Some(dim) => dim,
            None => continue,
        };

        match dim.unit {
            None => result.warn(field, format!("'{}' has no unit, read as pixels", raw.trim())),
            Some(Unit::Px) | Some(Unit::Rem) => {}
            Some(unit) => result.warn(field, format!("'{}' unit is read as pixels", unit)),
        }

        if dim.unit.is_some() && !looks_like_dimension(raw) {
            result.warn(field, format!("text after '{}' is ignored", dim));
        }

        if dim.magnitude < 0.0 {
            result.warn(field, format!("negative value '{}'", dim));
        }
    }

    let widths = (
        parse_unit(&config.min_width),
        parse_unit(&config.max_width),
    );
    if let (Some(min), Some(max)) = widths {
        if config.root != 0
            && normalize_to_rem(min, config.root) > normalize_to_rem(max, config.root)
        {
            result.warn(
                Field::MinWidth,
                "min width is larger than max width".to_string(),
            );
        }
    }

    result
}
